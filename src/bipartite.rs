//! A lockable graph that only locks if it is bipartite.
//!
//! [BipartiteGraph] wraps a [LockGraph] and behaves exactly like it until it is locked.
//! Locking first two-colours the graph by breadth-first search. If some edge joins two
//! nodes of the same colour the graph contains an odd cycle, locking fails with
//! [GraphError::NotBipartite] and the graph stays mutable. Otherwise the nodes are split
//! into a left set (colour 1) and a right set (colour 0) and the graph is locked.
//!
//! ```rust
//! use lockgraph::graph::*;
//! use lockgraph::bipartite::BipartiteGraph;
//! use lockgraph::error::GraphError;
//!
//! let mut graph = BipartiteGraph::from_matrix(&[[0u8, 0, 1, 1],
//!                                               [0, 0, 1, 1],
//!                                               [1, 1, 0, 0],
//!                                               [1, 1, 0, 0]]).unwrap();
//! assert_eq!(graph.left_set(), Err(GraphError::NotLocked));
//!
//! graph.lock().unwrap();
//! assert_eq!(graph.left_set(), Ok(&[2, 3][..]));
//! assert_eq!(graph.right_set(), Ok(&[0, 1][..]));
//!
//! let mut triangle: BipartiteGraph = vec![(0,1), (1,2), (2,0)].into_iter().collect();
//! assert!(matches!(triangle.lock(), Err(GraphError::NotBipartite { .. })));
//! assert!(!triangle.is_locked());
//! ```
//!
//! Bipartiteness does not depend on edge direction, so the search follows edges both
//! ways. The colour each connected component starts with depends on the order in which
//! nodes were added; only the partition itself is meaningful.

use std::collections::VecDeque;

use itertools::{Either, Itertools};
use log::{debug, trace, warn};

use crate::error::GraphError;
use crate::graph::*;
use crate::lockgraph::LockGraph;
use crate::matrix::{self, Matrix, MatrixKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BipartiteGraph {
    graph: LockGraph,
    left_set: Vec<Node>,
    right_set: Vec<Node>,
    // Per index: partition side and position within that side's set.
    sides: Vec<(Side, usize)>,
}

impl Graph for BipartiteGraph {
    fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    fn is_locked(&self) -> bool {
        self.graph.is_locked()
    }

    fn index_of(&self, u:&Node) -> Option<NodeIndex> {
        self.graph.index_of(u)
    }

    fn label(&self, ix:NodeIndex) -> Option<Node> {
        self.graph.label(ix)
    }

    fn edges(&self) -> &[Edge] {
        self.graph.edges()
    }

    fn neighbours(&self, ix:NodeIndex) -> Option<&[NodeIndex]> {
        self.graph.neighbours(ix)
    }
}

impl MutableGraph for BipartiteGraph {
    fn add_node(&mut self) -> Result<Node, GraphError> {
        self.graph.add_node()
    }

    fn add_edge(&mut self, u:&Node, v:&Node) -> Result<(), GraphError> {
        self.graph.add_edge(u, v)
    }

    /// Locks the graph if it is bipartite and computes the partition. On
    /// [GraphError::NotBipartite] nothing changes and the graph stays mutable.
    fn lock(&mut self) -> Result<(), GraphError> {
        if self.graph.is_locked() {
            return Ok(())
        }

        self.partition()?;
        self.graph.lock()
    }
}

impl FromIterator<Edge> for BipartiteGraph {
    fn from_iter<T: IntoIterator<Item = Edge>>(iter: T) -> Self {
        BipartiteGraph::wrap(iter.into_iter().collect())
    }
}

impl TryFrom<LockGraph> for BipartiteGraph {
    type Error = GraphError;

    /// Wraps `graph`. A graph that is already locked is partitioned right away and
    /// refused if it is not bipartite.
    fn try_from(graph: LockGraph) -> Result<Self, Self::Error> {
        let mut res = BipartiteGraph::wrap(graph);
        if res.graph.is_locked() {
            res.partition()?;
        }
        Ok(res)
    }
}

impl BipartiteGraph {
    pub fn new() -> BipartiteGraph {
        BipartiteGraph::default()
    }

    pub fn with_capacity(n_guess:usize) -> BipartiteGraph {
        BipartiteGraph::wrap(LockGraph::with_capacity(n_guess))
    }

    /// See [LockGraph::from_matrix].
    pub fn from_matrix<R>(matrix:&[R]) -> Result<BipartiteGraph, GraphError> where R: AsRef<[u8]> {
        Ok(BipartiteGraph::wrap(LockGraph::from_matrix(matrix)?))
    }

    fn wrap(graph:LockGraph) -> BipartiteGraph {
        BipartiteGraph {
            graph,
            left_set: Vec::new(),
            right_set: Vec::new(),
            sides: Vec::new()
        }
    }

    pub fn as_graph(&self) -> &LockGraph {
        &self.graph
    }

    pub fn into_inner(self) -> LockGraph {
        self.graph
    }

    /// Identifiers of the nodes with colour 1, in index order.
    pub fn left_set(&self) -> Result<&[Node], GraphError> {
        if !self.is_locked() {
            return Err(GraphError::NotLocked)
        }
        Ok(&self.left_set)
    }

    /// Identifiers of the nodes with colour 0, in index order.
    pub fn right_set(&self) -> Result<&[Node], GraphError> {
        if !self.is_locked() {
            return Err(GraphError::NotLocked)
        }
        Ok(&self.right_set)
    }

    /// The side of the node at index `ix`, or `None` if the graph is not locked.
    pub fn side(&self, ix:NodeIndex) -> Option<Side> {
        self.sides.get(ix).map(|&(side, _)| side)
    }

    /// Returns the requested matrix view. [MatrixKind::Bipartite] on an unlocked graph
    /// falls back to the adjacency matrix; use [BipartiteGraph::biadjacency_matrix] to
    /// get an error instead.
    pub fn matrix(&self, kind:MatrixKind) -> Result<Matrix, GraphError> {
        match kind {
            MatrixKind::Adjacency => Ok(self.adjacency_matrix()),
            MatrixKind::Bipartite if !self.is_locked() => {
                warn!("Bipartite matrix requested on an unlocked graph, returning the adjacency matrix");
                Ok(self.adjacency_matrix())
            }
            MatrixKind::Bipartite => self.biadjacency_matrix()
        }
    }

    /// The `|left|` × `|right|` matrix with `1` in cell `[i,j]` if the `i`-th left node
    /// and the `j`-th right node are joined by an edge in either direction.
    pub fn biadjacency_matrix(&self) -> Result<Matrix, GraphError> {
        let mut res = matrix::zeros(self.left_set()?.len(), self.right_set()?.len());
        for (u, N) in self.neighbourhoods() {
            let (side_u, pos_u) = self.sides[u];
            for v in N {
                let (_, pos_v) = self.sides[v];
                match side_u {
                    Side::Left => res[pos_u][pos_v] = 1,
                    Side::Right => res[pos_v][pos_u] = 1,
                }
            }
        }
        Ok(res)
    }

    /*
        Colours the graph and, if that succeeds, stores the partition.
        Leaves `self` untouched otherwise.
    */
    fn partition(&mut self) -> Result<(), GraphError> {
        let colour = match self.two_colouring() {
            Ok(colour) => colour,
            Err((u, v)) => {
                let labels = self.graph.labels();
                let conflict = (labels[u], labels[v]);
                warn!("Graph is not bipartite, nodes {} and {} share a colour", conflict.0, conflict.1);
                return Err(GraphError::NotBipartite { conflict })
            }
        };

        let labels = self.graph.labels();
        let (left, right): (Vec<NodeIndex>, Vec<NodeIndex>) = self.graph.nodes()
                    .partition_map(|ix| if colour[ix] == 1 { Either::Left(ix) } else { Either::Right(ix) });

        let mut sides = vec![(Side::Right, 0); self.graph.num_nodes()];
        for (pos, &ix) in left.iter().enumerate() {
            sides[ix] = (Side::Left, pos);
        }
        for (pos, &ix) in right.iter().enumerate() {
            sides[ix] = (Side::Right, pos);
        }

        self.left_set = left.into_iter().map(|ix| labels[ix]).collect();
        self.right_set = right.into_iter().map(|ix| labels[ix]).collect();
        self.sides = sides;
        debug!("Partitioned graph into {} left and {} right nodes", self.left_set.len(), self.right_set.len());

        Ok(())
    }

    /*
        Breadth-first two-colouring, one search per connected component,
        started from the first uncoloured node in index order. Returns the
        colour of every index, or the pair of adjacent indices that
        received the same colour.
    */
    fn two_colouring(&self) -> Result<Vec<u8>, (NodeIndex, NodeIndex)> {
        let n = self.graph.num_nodes();

        let mut in_neighbours:Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
        for (u, N) in self.graph.neighbourhoods() {
            for v in N {
                in_neighbours[v].push(u);
            }
        }

        let mut colour:Vec<Option<u8>> = vec![None; n];
        let mut queue = VecDeque::new();
        for s in self.graph.nodes() {
            if colour[s].is_some() {
                continue;
            }

            trace!("Colouring component of node {}", self.graph.labels()[s]);
            colour[s] = Some(0);
            queue.push_back((s, 0));

            while let Some((u, c)) = queue.pop_front() {
                let N = self.graph.neighbours_iter(u).chain(in_neighbours[u].iter().copied());
                for v in N {
                    match colour[v] {
                        None => {
                            colour[v] = Some(1 - c);
                            queue.push_back((v, 1 - c));
                        }
                        Some(cv) if cv == c => return Err((u, v)),
                        Some(_) => {}
                    }
                }
            }
        }

        Ok(colour.into_iter().map(|c| c.unwrap_or(0)).collect())
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
