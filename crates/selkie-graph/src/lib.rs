//! Generic graph containers with two interchangeable internal representations.
//!
//! [`ListGraph`] backs edges with per-node out-neighbor lists and suits sparse
//! graphs. [`MatrixGraph`] backs them with a square boolean matrix and suits
//! dense graphs, or callers that want O(1) direct-edge tests. Both satisfy the
//! [`Graph`] capability trait: node/edge mutation, neighbor queries, transitive
//! reachability, and visitor-driven BFS/DFS.
//!
//! Edges are stored as ordered pairs. The containers have no directedness
//! policy of their own; a caller that wants symmetric edges issues both
//! directions.
//!
//! ```
//! use selkie_graph::ListGraph;
//!
//! let mut g = ListGraph::new();
//! g.add_node("a").unwrap();
//! g.add_node("b").unwrap();
//! g.add_edge(&"a", &"b").unwrap();
//!
//! assert_eq!(g.neighbors(&"a").unwrap(), vec!["b"]);
//! assert!(g.adjacent(&"a", &"b").unwrap());
//! ```

pub mod error;
mod graph;
mod list;
mod matrix;

pub use error::{Error, Result};
pub use graph::Graph;
pub use list::ListGraph;
pub use matrix::MatrixGraph;
