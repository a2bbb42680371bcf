//! The capability interface shared by both representations.

use crate::error::Result;

/// Operations common to [`ListGraph`](crate::ListGraph) and
/// [`MatrixGraph`](crate::MatrixGraph).
///
/// The trait is object-safe so callers can pick a representation at runtime
/// (say, by expected edge density) and hold it behind `dyn Graph<T>`. Visitors
/// are `&mut dyn FnMut(&T)` for the same reason; the inherent methods on each
/// representation accept any `F: FnMut(&T)` directly.
///
/// `add_node` is deliberately not part of the capability set: it is the one
/// representation-specific operation (the matrix variant must grow a row and
/// column alongside the node) and stays inherent on each type.
pub trait Graph<T> {
    /// Whether `y` is reachable from `x` over one or more directed edges.
    ///
    /// This is transitive reachability, not a direct-edge test; see
    /// `has_edge` on the concrete types for the latter.
    fn adjacent(&self, x: &T, y: &T) -> Result<bool>;

    /// An owned snapshot of `x`'s out-neighbors, in insertion/index order.
    fn neighbors(&self, x: &T) -> Result<Vec<T>>;

    /// Inserts the directed edge `x -> y`.
    fn add_edge(&mut self, x: &T, y: &T) -> Result<()>;

    /// Removes the directed edge `x -> y`; no-op when the edge is absent.
    fn delete_edge(&mut self, x: &T, y: &T) -> Result<()>;

    /// Removes `x` and every edge incident to it, in both directions.
    fn delete_node(&mut self, x: &T) -> Result<()>;

    /// Breadth-first traversal from `start`, calling `visit` once per
    /// reachable node in frontier order.
    fn bfs(&self, start: &T, visit: &mut dyn FnMut(&T)) -> Result<()>;

    /// Depth-first traversal from `start`, calling `visit` once per reachable
    /// node. The first neighbor in storage order is explored first.
    fn dfs(&self, start: &T, visit: &mut dyn FnMut(&T)) -> Result<()>;
}
