//! Basic types and the traits shared by all graphs in this crate.
//!
//! Nodes carry two numbers. The *identifier* ([Node]) is the key callers use when
//! adding edges; it is what the edge list stores. The *index* ([NodeIndex]) is the
//! position of the node in insertion order, running from `0` to `n-1`; neighbour
//! lists, [Graph::nodes] and the rows and columns of [Graph::adjacency_matrix]
//! use indices. Both coincide for graphs built from a matrix or with
//! [MutableGraph::add_node] alone, but not in general: an edge between identifiers
//! the graph has not seen yet registers them under the next free indices.
use fxhash::FxHashMap;

use crate::error::GraphError;
use crate::iterators::*;
use crate::matrix::{self, Matrix};

pub type Node = u32;
pub type NodeIndex = usize;
pub type Edge = (Node, Node);
pub type NodeMap<T> = FxHashMap<Node, T>;

/// Read access to a directed graph. All queries are valid whether or not the
/// graph is locked.
pub trait Graph {
    fn num_nodes(&self) -> usize;
    fn num_edges(&self) -> usize;

    fn is_locked(&self) -> bool;

    /// Returns the index under which the identifier `u` is registered.
    fn index_of(&self, u:&Node) -> Option<NodeIndex>;

    /// Returns the identifier of the node stored at index `ix`.
    fn label(&self, ix:NodeIndex) -> Option<Node>;

    /// All node indices in insertion order.
    fn nodes(&self) -> std::ops::Range<NodeIndex> {
        0..self.num_nodes()
    }

    /// The edge list in insertion order, parallel edges included.
    fn edges(&self) -> &[Edge];

    /// Returns the out-neighbours of the node at index `ix`, or `None` if there
    /// is no such node.
    fn neighbours(&self, ix:NodeIndex) -> Option<&[NodeIndex]>;

    /// Lazy variant of [Graph::neighbours]. Unknown indices yield nothing.
    fn neighbours_iter<'a>(&'a self, ix:NodeIndex) -> NeighbourIterator<'a> {
        NeighbourIterator::new(self.neighbours(ix).unwrap_or(&[]))
    }

    /// Iterates over all nodes together with their out-neighbours.
    fn neighbourhoods<'a>(&'a self) -> NIterator<'a, Self> {
        NIterator::new(self)
    }

    fn contains(&self, u:&Node) -> bool {
        self.index_of(u).is_some()
    }

    /// Out-degree of the node at index `ix`, counting parallel edges.
    fn degree(&self, ix:NodeIndex) -> usize {
        self.neighbours(ix).map_or(0, |N| N.len())
    }

    /// Builds the `n` × `n` adjacency matrix with `1` in cell `[i,j]` whenever
    /// there is an edge from index `i` to index `j`.
    fn adjacency_matrix(&self) -> Matrix {
        let n = self.num_nodes();
        let mut res = matrix::zeros(n, n);
        for i in self.nodes() {
            for j in self.neighbours_iter(i) {
                res[i][j] = 1;
            }
        }
        res
    }
}

/// Mutation of a [Graph]. Every mutating operation fails with
/// [GraphError::LockedGraph] once [MutableGraph::lock] has succeeded.
pub trait MutableGraph: Graph {
    /// Adds a node and returns its identifier.
    fn add_node(&mut self) -> Result<Node, GraphError>;

    /// Adds the edge `(u,v)`, registering unknown endpoints first. Parallel edges
    /// and self-loops are kept.
    fn add_edge(&mut self, u:&Node, v:&Node) -> Result<(), GraphError>;

    /// Irreversibly forbids further mutation. Locking a locked graph does nothing.
    fn lock(&mut self) -> Result<(), GraphError>;

    fn add_nodes(&mut self, count:usize) -> Result<Vec<Node>, GraphError> {
        (0..count).map(|_| self.add_node()).collect()
    }

    /// Adds every edge of `it`. Stops at the first refused edge; edges added
    /// before it stay in the graph.
    fn add_edges<'a, I>(&mut self, it:I) -> Result<(), GraphError> where I: IntoIterator<Item=&'a Edge> {
        for (u,v) in it {
            self.add_edge(u, v)?;
        }
        Ok(())
    }
}
