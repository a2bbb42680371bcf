//! Adjacency-list representation.

use rustc_hash::FxBuildHasher;
use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use tracing::trace;

use crate::error::{Error, Result};
use crate::graph::Graph;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// A directed graph backed by per-node out-neighbor lists.
///
/// Nodes keep insertion order; each node's out-neighbors keep edge insertion
/// order. Parallel edges are preserved as-is: `add_edge` does not deduplicate,
/// and `delete_edge` removes only the first occurrence.
///
/// Suits graphs where edge density is low. For dense graphs, or when O(1)
/// direct-edge tests matter, prefer [`MatrixGraph`](crate::MatrixGraph).
#[derive(Debug, Clone)]
pub struct ListGraph<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    nodes: Vec<T>,
    adjacency: HashMap<T, Vec<T>>,
}

impl<T> ListGraph<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            adjacency: HashMap::default(),
        }
    }

    /// Appends `t` to the node sequence with an empty out-neighbor list.
    ///
    /// Fails with [`Error::DuplicateNode`] when `t` is already present.
    pub fn add_node(&mut self, t: T) -> Result<()> {
        if self.adjacency.contains_key(&t) {
            return Err(Error::duplicate_node(&t));
        }
        trace!(node = ?t, total = self.nodes.len() + 1, "add node");
        self.nodes.push(t.clone());
        self.adjacency.insert(t, Vec::new());
        Ok(())
    }

    /// The node sequence, in insertion order.
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_node(&self, x: &T) -> bool {
        self.adjacency.contains_key(x)
    }

    /// Whether the direct edge `x -> y` exists. Scans `x`'s out-neighbor list.
    pub fn has_edge(&self, x: &T, y: &T) -> bool {
        self.adjacency
            .get(x)
            .is_some_and(|out| out.iter().any(|n| n == y))
    }

    /// Appends `y` to `x`'s out-neighbor list.
    ///
    /// Fails with [`Error::InvalidEdge`] when `x` is absent. `y` is *not*
    /// required to be present: an edge may point at a destination added
    /// later. Until `add_node(y)` happens, traversals treat `y` as having no
    /// out-neighbors and node queries on `y` fail; adding the destination
    /// first is the caller's responsibility.
    pub fn add_edge(&mut self, x: &T, y: &T) -> Result<()> {
        let Some(out) = self.adjacency.get_mut(x) else {
            return Err(Error::invalid_edge(x, y));
        };
        out.push(y.clone());
        Ok(())
    }

    /// Removes the first occurrence of `y` from `x`'s out-neighbor list.
    ///
    /// No-op when no such edge exists; fails with [`Error::InvalidEdge`] when
    /// `x` itself is absent.
    pub fn delete_edge(&mut self, x: &T, y: &T) -> Result<()> {
        let Some(out) = self.adjacency.get_mut(x) else {
            return Err(Error::invalid_edge(x, y));
        };
        if let Some(pos) = out.iter().position(|n| n == y) {
            out.remove(pos);
        }
        Ok(())
    }

    /// Removes `x` and every edge incident to it.
    ///
    /// Ordering matters: `x` is purged from every other out-neighbor list
    /// (all occurrences, so parallel edges cannot leave a dangling
    /// reference), then its own adjacency entry is dropped, then the node
    /// sequence entry.
    pub fn delete_node(&mut self, x: &T) -> Result<()> {
        if !self.adjacency.contains_key(x) {
            return Err(Error::not_found(x));
        }
        for out in self.adjacency.values_mut() {
            out.retain(|n| n != x);
        }
        self.adjacency.remove(x);
        self.nodes.retain(|n| n != x);
        trace!(node = ?x, remaining = self.nodes.len(), "delete node");
        Ok(())
    }

    /// An owned copy of `x`'s out-neighbor list, order and duplicates
    /// preserved. Safe to mutate without affecting the graph.
    pub fn neighbors(&self, x: &T) -> Result<Vec<T>> {
        self.adjacency
            .get(x)
            .cloned()
            .ok_or_else(|| Error::not_found(x))
    }

    /// Whether `y` is reachable from `x` over one or more edges.
    ///
    /// Breadth-first expansion that short-circuits the instant `y` shows up
    /// as a neighbor of a frontier node. Each node is expanded at most once,
    /// so cycles terminate. Note the one-or-more contract: `adjacent(x, x)`
    /// is true only when some cycle leads back to `x`.
    pub fn adjacent(&self, x: &T, y: &T) -> Result<bool> {
        if !self.adjacency.contains_key(x) {
            return Err(Error::not_found(x));
        }
        let mut seen: HashSet<T> = HashSet::default();
        let mut frontier: VecDeque<T> = VecDeque::new();
        seen.insert(x.clone());
        frontier.push_back(x.clone());
        while let Some(v) = frontier.pop_front() {
            let Some(out) = self.adjacency.get(&v) else {
                // Dangling edge destination: no out-neighbors to expand.
                continue;
            };
            for n in out {
                if n == y {
                    return Ok(true);
                }
                if seen.insert(n.clone()) {
                    frontier.push_back(n.clone());
                }
            }
        }
        Ok(false)
    }

    /// Breadth-first traversal from `start`.
    ///
    /// FIFO frontier: pop the head, visit it, append its not-yet-seen
    /// out-neighbors in list order. Every node reachable from `start` is
    /// visited exactly once.
    pub fn bfs<F>(&self, start: &T, mut visit: F) -> Result<()>
    where
        F: FnMut(&T),
    {
        if !self.adjacency.contains_key(start) {
            return Err(Error::not_found(start));
        }
        let mut seen: HashSet<T> = HashSet::default();
        let mut frontier: VecDeque<T> = VecDeque::new();
        seen.insert(start.clone());
        frontier.push_back(start.clone());
        while let Some(v) = frontier.pop_front() {
            visit(&v);
            let Some(out) = self.adjacency.get(&v) else {
                continue;
            };
            for n in out {
                if seen.insert(n.clone()) {
                    frontier.push_back(n.clone());
                }
            }
        }
        Ok(())
    }

    /// Depth-first traversal from `start`.
    ///
    /// A deque used as a stack: pop the front, visit it, push its neighbors
    /// onto the front in reverse order (so the first neighbor in list order
    /// is explored first), then purge every already-visited node from the
    /// whole frontier, not just the head. The whole-frontier purge is the
    /// re-visit guard: a node re-queued through a convergent path is dropped
    /// the moment any copy of it is visited, which can reorder visits
    /// relative to a textbook recursive DFS.
    pub fn dfs<F>(&self, start: &T, mut visit: F) -> Result<()>
    where
        F: FnMut(&T),
    {
        if !self.adjacency.contains_key(start) {
            return Err(Error::not_found(start));
        }
        let mut visited: HashSet<T> = HashSet::default();
        let mut frontier: VecDeque<T> = VecDeque::new();
        frontier.push_back(start.clone());
        while let Some(v) = frontier.pop_front() {
            visit(&v);
            visited.insert(v.clone());
            if let Some(out) = self.adjacency.get(&v) {
                for n in out.iter().rev() {
                    frontier.push_front(n.clone());
                }
            }
            frontier.retain(|n| !visited.contains(n));
        }
        Ok(())
    }
}

impl<T> Default for ListGraph<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> for ListGraph<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    fn adjacent(&self, x: &T, y: &T) -> Result<bool> {
        ListGraph::adjacent(self, x, y)
    }

    fn neighbors(&self, x: &T) -> Result<Vec<T>> {
        ListGraph::neighbors(self, x)
    }

    fn add_edge(&mut self, x: &T, y: &T) -> Result<()> {
        ListGraph::add_edge(self, x, y)
    }

    fn delete_edge(&mut self, x: &T, y: &T) -> Result<()> {
        ListGraph::delete_edge(self, x, y)
    }

    fn delete_node(&mut self, x: &T) -> Result<()> {
        ListGraph::delete_node(self, x)
    }

    fn bfs(&self, start: &T, visit: &mut dyn FnMut(&T)) -> Result<()> {
        ListGraph::bfs(self, start, visit)
    }

    fn dfs(&self, start: &T, visit: &mut dyn FnMut(&T)) -> Result<()> {
        ListGraph::dfs(self, start, visit)
    }
}
