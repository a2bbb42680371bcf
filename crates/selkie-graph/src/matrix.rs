//! Adjacency-matrix representation.
//!
//! The node sequence doubles as the index space: `nodes[i]` owns row and
//! column `i` of a square boolean matrix that is resized in lockstep with
//! every node insertion and deletion.

use std::collections::VecDeque;
use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// A directed graph backed by a square boolean matrix.
///
/// `matrix[i][j]` means an edge `nodes[i] -> nodes[j]` exists. Good when edge
/// density is high or O(1) direct-edge tests matter; every node costs a full
/// row and column regardless of degree.
///
/// By construction a node is adjacent to itself: [`add_node`](Self::add_node)
/// sets the new diagonal cell. This is structural to the representation, so
/// `neighbors(x)` includes `x` and `adjacent(x, x)` is always true.
#[derive(Debug, Clone)]
pub struct MatrixGraph<T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    nodes: Vec<T>,
    matrix: Vec<Vec<bool>>,
}

impl<T> MatrixGraph<T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            matrix: Vec::new(),
        }
    }

    /// Resolves a node value to its current matrix index.
    ///
    /// Indices shift on deletion, so they never escape this module; every
    /// public operation re-resolves from the value.
    fn index_of(&self, x: &T) -> Option<usize> {
        self.nodes.iter().position(|n| n == x)
    }

    fn edge_indices(&self, x: &T, y: &T) -> Result<(usize, usize)> {
        match (self.index_of(x), self.index_of(y)) {
            (Some(xi), Some(yi)) => Ok((xi, yi)),
            _ => Err(Error::invalid_edge(x, y)),
        }
    }

    /// Grows the matrix by one row and column and appends `x` to the node
    /// sequence, keeping the matrix exactly `|nodes| x |nodes|`.
    ///
    /// The new diagonal cell is set: a node is adjacent to itself.
    pub fn add_node(&mut self, x: T) -> Result<()> {
        if self.index_of(&x).is_some() {
            return Err(Error::duplicate_node(&x));
        }
        trace!(node = ?x, total = self.nodes.len() + 1, "add node");
        for row in &mut self.matrix {
            row.push(false);
        }
        let mut row = vec![false; self.nodes.len() + 1];
        row[self.nodes.len()] = true;
        self.matrix.push(row);
        self.nodes.push(x);
        Ok(())
    }

    /// The node sequence; position here is the matrix index.
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
        self.index_of(x).is_some()
    }

    /// Whether the direct edge `x -> y` exists. One cell read once the
    /// endpoints are resolved; `false` when either endpoint is absent.
    pub fn has_edge(&self, x: &T, y: &T) -> bool {
        self.edge_indices(x, y)
            .map(|(xi, yi)| self.matrix[xi][yi])
            .unwrap_or(false)
    }

    /// Read-only view of the flag matrix, row-major.
    pub fn matrix(&self) -> &[Vec<bool>] {
        &self.matrix
    }

    /// Sets `matrix[x][y]`. Both endpoints must be present.
    pub fn add_edge(&mut self, x: &T, y: &T) -> Result<()> {
        let (xi, yi) = self.edge_indices(x, y)?;
        self.matrix[xi][yi] = true;
        Ok(())
    }

    /// Clears `matrix[x][y]`; no-op when the edge was already absent. Both
    /// endpoints must be present.
    pub fn delete_edge(&mut self, x: &T, y: &T) -> Result<()> {
        let (xi, yi) = self.edge_indices(x, y)?;
        self.matrix[xi][yi] = false;
        Ok(())
    }

    /// Removes `x`, its matrix row and column, and hence every incident edge.
    ///
    /// Column `i` is dropped from every row first, while `i` is still a valid
    /// index everywhere; then row `i` and node `i` go together.
    pub fn delete_node(&mut self, x: &T) -> Result<()> {
        let Some(i) = self.index_of(x) else {
            return Err(Error::not_found(x));
        };
        for row in &mut self.matrix {
            row.remove(i);
        }
        self.matrix.remove(i);
        self.nodes.remove(i);
        trace!(node = ?x, remaining = self.nodes.len(), "delete node");
        Ok(())
    }

    /// Owned snapshot of `x`'s out-neighbors in ascending index order.
    /// Includes `x` itself via the diagonal unless that cell was cleared.
    pub fn neighbors(&self, x: &T) -> Result<Vec<T>> {
        let i = self.index_of(x).ok_or_else(|| Error::not_found(x))?;
        Ok(self.matrix[i]
            .iter()
            .enumerate()
            .filter(|&(_, &set)| set)
            .map(|(j, _)| self.nodes[j].clone())
            .collect())
    }

    /// Whether `y` is reachable from `x` over one or more edges.
    ///
    /// Same contract as the list variant, run over indices. The diagonal
    /// makes `adjacent(x, x)` unconditionally true here.
    pub fn adjacent(&self, x: &T, y: &T) -> Result<bool> {
        let xi = self.index_of(x).ok_or_else(|| Error::not_found(x))?;
        let Some(yi) = self.index_of(y) else {
            return Ok(false);
        };
        let n = self.nodes.len();
        let mut seen = vec![false; n];
        let mut frontier: VecDeque<usize> = VecDeque::new();
        seen[xi] = true;
        frontier.push_back(xi);
        while let Some(v) = frontier.pop_front() {
            for j in 0..n {
                if !self.matrix[v][j] {
                    continue;
                }
                if j == yi {
                    return Ok(true);
                }
                if !seen[j] {
                    seen[j] = true;
                    frontier.push_back(j);
                }
            }
        }
        Ok(false)
    }

    /// Breadth-first traversal from `start`; same contract as the list
    /// variant, expanding row cells in ascending index order.
    pub fn bfs<F>(&self, start: &T, mut visit: F) -> Result<()>
    where
        F: FnMut(&T),
    {
        let si = self.index_of(start).ok_or_else(|| Error::not_found(start))?;
        let n = self.nodes.len();
        let mut seen = vec![false; n];
        let mut frontier: VecDeque<usize> = VecDeque::new();
        seen[si] = true;
        frontier.push_back(si);
        while let Some(v) = frontier.pop_front() {
            visit(&self.nodes[v]);
            for j in 0..n {
                if self.matrix[v][j] && !seen[j] {
                    seen[j] = true;
                    frontier.push_back(j);
                }
            }
        }
        Ok(())
    }

    /// Depth-first traversal from `start`.
    ///
    /// Mirrors the list variant's reverse-before-push: neighbor indices are
    /// pushed onto the frontier front in descending order so the ascending
    /// index is explored first, and every visited index is purged from the
    /// whole frontier after each visit.
    pub fn dfs<F>(&self, start: &T, mut visit: F) -> Result<()>
    where
        F: FnMut(&T),
    {
        let si = self.index_of(start).ok_or_else(|| Error::not_found(start))?;
        let n = self.nodes.len();
        let mut visited = vec![false; n];
        let mut frontier: VecDeque<usize> = VecDeque::new();
        frontier.push_back(si);
        while let Some(v) = frontier.pop_front() {
            visit(&self.nodes[v]);
            visited[v] = true;
            for j in (0..n).rev() {
                if self.matrix[v][j] && !visited[j] {
                    frontier.push_front(j);
                }
            }
            frontier.retain(|&j| !visited[j]);
        }
        Ok(())
    }
}

impl<T> Default for MatrixGraph<T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> for MatrixGraph<T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    fn adjacent(&self, x: &T, y: &T) -> Result<bool> {
        MatrixGraph::adjacent(self, x, y)
    }

    fn neighbors(&self, x: &T) -> Result<Vec<T>> {
        MatrixGraph::neighbors(self, x)
    }

    fn add_edge(&mut self, x: &T, y: &T) -> Result<()> {
        MatrixGraph::add_edge(self, x, y)
    }

    fn delete_edge(&mut self, x: &T, y: &T) -> Result<()> {
        MatrixGraph::delete_edge(self, x, y)
    }

    fn delete_node(&mut self, x: &T) -> Result<()> {
        MatrixGraph::delete_node(self, x)
    }

    fn bfs(&self, start: &T, visit: &mut dyn FnMut(&T)) -> Result<()> {
        MatrixGraph::bfs(self, start, visit)
    }

    fn dfs(&self, start: &T, visit: &mut dyn FnMut(&T)) -> Result<()> {
        MatrixGraph::dfs(self, start, visit)
    }
}
