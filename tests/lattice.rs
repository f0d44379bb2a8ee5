use vptree::{MetricItem, VpTree};

struct Point {
    x: f32,
    y: f32,
}

impl Point {
    fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

impl MetricItem<f32> for Point {
    fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[test]
fn point_check() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(1.0, 0.0);

    assert_eq!(a.distance(&b), 1.0);
}

fn lattice_points(n: usize) -> Vec<Point> {
    (0..n)
        .flat_map(|i| (0..n).map(move |j| Point::new(i as f32, j as f32)))
        .collect()
}

#[test]
fn lattice_neighbors() {
    let tree = VpTree::new(lattice_points(20)).unwrap();

    let found = tree.nearest_neighbors(&Point::new(4.46, 4.4), 4);
    assert_eq!(found.len(), 4);

    let coords: Vec<(f32, f32)> = found.iter().map(|(_, p)| (p.x, p.y)).collect();
    assert_eq!(coords, vec![(4.0, 4.0), (5.0, 4.0), (4.0, 5.0), (5.0, 5.0)]);

    // distances come back sorted nearest-first.
    for pair in found.windows(2) {
        assert!(pair[0].0 <= pair[1].0);
    }
}
