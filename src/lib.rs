//! Vantage-point trees are a data structure for fast
//! k-nearest-neighbor searches in arbitrary metric spaces.
//!
//! A tree is built once over an owned set of items and a metric
//! supplied through [`MetricItem`], then answers queries without
//! scanning every item.
//!
//! ```
//! use vptree::{MetricItem, VpTree};
//!
//! let tree = VpTree::new(vec![0.0f64, 0.25, 0.5, 1.0]).unwrap();
//!
//! let nearest = tree.nearest_neighbor(&0.4).unwrap();
//! assert_eq!(*nearest, 0.5);
//!
//! let two = tree.nearest_neighbors(&0.4, 2);
//! assert_eq!(*two[0].1, 0.5);
//! assert_eq!(*two[1].1, 0.25);
//! ```

pub mod error;
pub mod metric;
pub mod select;
pub mod tree;

pub use error::TreeError;
pub use metric::MetricItem;
pub use tree::{Scalar, VpTree};
