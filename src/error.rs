use thiserror::Error;

/// Errors raised while building a tree. Queries cannot fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("cannot build a vantage-point tree from an empty point set")]
    EmptyPointSet,

    /// Node and item slots are `u32`.
    #[error("point set of {0} items exceeds the u32 index space")]
    TooManyPoints(usize),
}
