//! Small in-memory directed graphs that can be locked against further edits.
//!
//! [LockGraph](lockgraph::LockGraph) is a plain mutable directed graph built either from a
//! square 0/1 adjacency matrix or by adding nodes and edges one at a time. Once
//! [locked](graph::MutableGraph::lock) it only answers queries.
//! [BipartiteGraph](bipartite::BipartiteGraph) only agrees to be locked if its nodes can
//! be two-coloured, and then exposes the resulting left and right node sets.
//!
//! ```rust
//! use lockgraph::graph::*;
//! use lockgraph::bipartite::BipartiteGraph;
//! use lockgraph::matrix::MatrixKind;
//!
//! let mut graph = BipartiteGraph::new();
//! let u = graph.add_node().unwrap();
//! let v = graph.add_node().unwrap();
//! graph.add_edge(&u, &v).unwrap();
//! graph.add_edge(&v, &7).unwrap();
//!
//! println!("Graph has {} nodes and {} edges", graph.num_nodes(), graph.num_edges());
//!
//! graph.lock().unwrap();
//! assert_eq!(graph.right_set().unwrap(), &[0, 7]);
//! assert_eq!(graph.left_set().unwrap(), &[1]);
//! assert_eq!(graph.matrix(MatrixKind::Bipartite).unwrap(), vec![vec![1, 1]]);
//! ```
#![allow(non_snake_case)]

pub mod bipartite;
pub mod error;
pub mod graph;
pub mod iterators;
pub mod lockgraph;
pub mod matrix;
