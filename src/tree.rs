//! Vantage-point trees are a data structure for fast
//! k-nearest-neighbor searches.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::{Debug, Display};

use num::Float;
use rand::Rng;
use tracing::{debug, trace};

use crate::error::TreeError;
use crate::metric::MetricItem;
use crate::select::{cmp_distance, median_pair};

/// Scalars usable as distance values.
pub trait Scalar: Float + Debug + Display {}
impl<T: Float + Debug + Display> Scalar for T {}

/// One slot of the flat node table. A node owns exactly one vantage
/// point; `mu` is the median distance from that point to the rest of
/// its subtree, absent on leaves.
#[derive(Debug, Clone, Copy)]
struct Node<F: Scalar> {
    vp: u32,
    mu: Option<F>,
    left: Option<u32>,
    right: Option<u32>,
}

impl<F: Scalar> Node<F> {
    /// Slot contents between allocation and the builder filling them in.
    fn unfilled() -> Self {
        Node {
            vp: 0,
            mu: None,
            left: None,
            right: None,
        }
    }
}

/// Candidate entry in the bounded search heap, ordered by distance so
/// the heap root is the current worst candidate.
struct HeapElem<F: Scalar> {
    dist: F,
    item: u32,
}

impl<F: Scalar> PartialEq for HeapElem<F> {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist
    }
}

impl<F: Scalar> Eq for HeapElem<F> {}

impl<F: Scalar> PartialOrd for HeapElem<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Scalar> Ord for HeapElem<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_distance(&self.dist, &other.dist)
    }
}

/// A vantage-point tree over an owned set of items.
///
/// The tree is stored as a flat node table indexed by `u32` slots, with
/// slot 0 as the root. It is immutable once built; queries borrow the
/// indexed items.
#[derive(Debug)]
pub struct VpTree<F: Scalar, T: MetricItem<F>> {
    items: Vec<T>,
    nodes: Vec<Node<F>>,
}

impl<F: Scalar, T: MetricItem<F>> VpTree<F, T> {
    /// Build a tree over `items`, choosing vantage points with the
    /// thread-local RNG.
    pub fn new(items: Vec<T>) -> Result<Self, TreeError> {
        Self::with_rng(items, &mut rand::thread_rng())
    }

    /// Build a tree over `items` with a caller-supplied RNG.
    ///
    /// The RNG only influences which items become vantage points, never
    /// the result of a query. A seeded RNG makes builds reproducible.
    pub fn with_rng<R: Rng + ?Sized>(items: Vec<T>, rng: &mut R) -> Result<Self, TreeError> {
        if items.is_empty() {
            return Err(TreeError::EmptyPointSet);
        }
        if items.len() > u32::MAX as usize {
            return Err(TreeError::TooManyPoints(items.len()));
        }

        // Every node consumes one vantage point, so the table never
        // outgrows the item count.
        let mut nodes = Vec::with_capacity(items.len());
        let mut pending: Vec<(u32, Vec<u32>)> = Vec::new();

        nodes.push(Node::unfilled());
        pending.push((0, (0..items.len() as u32).collect()));

        while let Some((slot, mut subtree)) = pending.pop() {
            if subtree.len() == 1 {
                nodes[slot as usize].vp = subtree[0];
                continue;
            }

            let vp = subtree.swap_remove(rng.gen_range(0..subtree.len()));
            let mut spread: Vec<(F, u32)> = subtree
                .into_iter()
                .map(|id| (items[id as usize].distance(&items[vp as usize]), id))
                .collect();
            let mu = median_pair(&mut spread);

            // The median itself lands on the left, so the left side is
            // never empty; the right side is, whenever every remaining
            // distance ties the median.
            let (near, far): (Vec<_>, Vec<_>) = spread.into_iter().partition(|pair| pair.0 <= mu);

            let left = alloc_child(&mut nodes, &mut pending, near);
            let right = alloc_child(&mut nodes, &mut pending, far);
            nodes[slot as usize] = Node {
                vp,
                mu: Some(mu),
                left,
                right,
            };
        }

        debug!(items = items.len(), nodes = nodes.len(), "built vantage-point tree");
        Ok(VpTree { items, nodes })
    }

    /// Find the `count` items nearest to `query`.
    ///
    /// Returns `(distance, item)` pairs sorted nearest-first; fewer than
    /// `count` when the tree holds fewer items, none when `count` is zero.
    pub fn nearest_neighbors(&self, query: &T, count: usize) -> Vec<(F, &T)> {
        if count == 0 {
            return Vec::new();
        }

        let mut heap: BinaryHeap<HeapElem<F>> = BinaryHeap::with_capacity(count + 1);
        let mut pending: Vec<u32> = vec![0];
        let mut visited = 0usize;

        while let Some(slot) = pending.pop() {
            visited += 1;
            let node = &self.nodes[slot as usize];
            let d = query.distance(&self.items[node.vp as usize]);

            if heap.len() < count {
                heap.push(HeapElem { dist: d, item: node.vp });
            } else if heap.peek().is_some_and(|worst| d < worst.dist) {
                heap.pop();
                heap.push(HeapElem { dist: d, item: node.vp });
            }

            let Some(mu) = node.mu else {
                continue;
            };

            // No pruning until `count` candidates are held.
            let tau = if heap.len() < count {
                F::infinity()
            } else {
                heap.peek().map_or(F::infinity(), |worst| worst.dist)
            };

            let mut sides = [(node.left, d < mu + tau), (node.right, d >= mu - tau)];
            // The side holding the query is pushed last so the stack
            // pops it first and tau tightens before the far side.
            if d <= mu {
                sides.swap(0, 1);
            }
            for (child, within) in sides {
                if !within {
                    continue;
                }
                if let Some(child) = child {
                    pending.push(child);
                }
            }
        }

        trace!(visited, count, "nearest-neighbor search finished");

        heap.into_sorted_vec()
            .into_iter()
            .map(|elem| (elem.dist, &self.items[elem.item as usize]))
            .collect()
    }

    /// Find the single item nearest to `query`.
    pub fn nearest_neighbor(&self, query: &T) -> Option<&T> {
        self.nearest_neighbors(query, 1).pop().map(|(_, item)| item)
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The indexed items, in the order they were handed to the builder.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

fn alloc_child<F: Scalar>(
    nodes: &mut Vec<Node<F>>,
    pending: &mut Vec<(u32, Vec<u32>)>,
    side: Vec<(F, u32)>,
) -> Option<u32> {
    if side.is_empty() {
        return None;
    }
    let slot = nodes.len() as u32;
    nodes.push(Node::unfilled());
    pending.push((slot, side.into_iter().map(|(_, id)| id).collect()));
    Some(slot)
}
