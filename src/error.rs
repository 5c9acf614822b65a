/// Errors returned when configuring a [`BTree`](crate::BTree).
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested minimum degree is below 2.
    ///
    /// A minimum degree of `t` allows `t - 1..=2t - 1` keys per non-root node,
    /// so `t < 2` would permit empty interior nodes.
    #[error("invalid argument: minimum degree must be at least 2, got {0}")]
    InvalidDegree(usize),
}
