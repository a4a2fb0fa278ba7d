//! Dense 0/1 matrices used to build graphs and to export them.
//!
//! A [Matrix] is stored row-major as a vector of rows. Entries are indicator
//! bits: a cell is `1` if at least one edge connects the row node to the
//! column node and `0` otherwise, so parallel edges are not counted.
//!
//! ```rust
//! use lockgraph::graph::*;
//! use lockgraph::lockgraph::LockGraph;
//!
//! let matrix = vec![vec![0u8, 1, 0],
//!                   vec![0, 0, 1],
//!                   vec![1, 0, 0]];
//! let graph = LockGraph::from_matrix(&matrix).unwrap();
//! assert_eq!(graph.edges(), &[(0,1), (1,2), (2,0)]);
//! assert_eq!(graph.adjacency_matrix(), matrix);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::GraphError;

pub type Matrix = Vec<Vec<u8>>;

/// Creates a `rows` × `cols` matrix filled with zeroes.
pub fn zeros(rows:usize, cols:usize) -> Matrix {
    vec![vec![0; cols]; rows]
}

/// Checks that `matrix` is square and only contains `0` and `1`. Returns the
/// number of rows on success.
pub fn check_adjacency<R>(matrix:&[R]) -> Result<usize, GraphError> where R: AsRef<[u8]> {
    let n = matrix.len();
    for (i, row) in matrix.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != n {
            return Err(GraphError::InvalidArgument(
                format!("matrix is not square: row {} has {} entries, expected {}", i, row.len(), n)))
        }
        if let Some(j) = row.iter().position(|&x| x > 1) {
            return Err(GraphError::InvalidArgument(
                format!("matrix entry [{},{}] is {}, expected 0 or 1", i, j, row[j])))
        }
    }
    Ok(n)
}

/// Selects which matrix view [BipartiteGraph::matrix](crate::bipartite::BipartiteGraph::matrix)
/// returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixKind {
    /// The full `n` × `n` adjacency matrix.
    Adjacency,
    /// The `|left|` × `|right|` biadjacency matrix of a locked bipartite graph.
    Bipartite,
}

impl FromStr for MatrixKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adjacency" => Ok(MatrixKind::Adjacency),
            "bipartite" => Ok(MatrixKind::Bipartite),
            _ => Err(GraphError::InvalidArgument(
                format!("unknown matrix kind '{}', expected 'adjacency' or 'bipartite'", s)))
        }
    }
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixKind::Adjacency => write!(f, "adjacency"),
            MatrixKind::Bipartite => write!(f, "bipartite"),
        }
    }
}
