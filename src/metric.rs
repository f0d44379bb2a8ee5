use num::Float;

/// Items that live in a metric space.
///
/// The tree prunes subtrees using the triangle inequality, so `distance`
/// must be a genuine metric: non-negative, symmetric, zero only between
/// equal items, and obeying `d(a, c) <= d(a, b) + d(b, c)`. A sloppy
/// metric degrades results, not memory safety. NaN distances panic when
/// ordered.
pub trait MetricItem<F: Float> {
    fn distance(&self, other: &Self) -> F;
}

impl MetricItem<f32> for f32 {
    fn distance(&self, other: &Self) -> f32 {
        (self - other).abs()
    }
}

impl MetricItem<f64> for f64 {
    fn distance(&self, other: &Self) -> f64 {
        (self - other).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::MetricItem;

    #[test]
    fn scalar_distance_is_absolute_difference() {
        assert_eq!(2.0f32.distance(&-1.0), 3.0);
        assert_eq!((-1.5f64).distance(&2.5), 4.0);
    }
}
