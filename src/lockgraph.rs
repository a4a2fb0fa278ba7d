//!
//! A mutable directed graph that can be *locked*. Locking is irreversible: once
//! [MutableGraph::lock] has been called, every attempt to add nodes or edges fails with
//! [GraphError::LockedGraph] and leaves the graph untouched. All read access keeps working.
//!
//! Graphs are either built from a square 0/1 adjacency matrix or incrementally by adding
//! nodes and edges. The struct also offers a few constructors for named graphs:
//!
//! ```rust
//! use lockgraph::graph::*;
//! use lockgraph::lockgraph::LockGraph;
//!
//! let graph = LockGraph::path(4);
//! assert_eq!(graph.edges(), &[(0,1),(1,2),(2,3)]);
//!
//! let graph = LockGraph::cycle(3);
//! assert_eq!(graph.edges(), &[(0,1),(1,2),(2,0)]);
//!
//! let graph = LockGraph::biclique(1,2);
//! assert_eq!(graph.edges(), &[(0,1),(0,2)]);
//! ```
//!
//! ## Identifiers and indices
//!
//! Edges are added between node *identifiers*. An identifier the graph has not seen yet
//! is registered under the next free *index*, which need not be equal to the identifier:
//!
//! ```rust
//! use lockgraph::graph::*;
//! use lockgraph::lockgraph::LockGraph;
//!
//! let mut graph = LockGraph::new();
//! graph.add_edge(&7, &3).unwrap();
//! assert_eq!(graph.index_of(&7), Some(0));
//! assert_eq!(graph.index_of(&3), Some(1));
//! assert_eq!(graph.neighbours(0), Some(&[1][..]));
//!
//! graph.lock().unwrap();
//! assert!(graph.add_node().is_err());
//! ```

use log::debug;

use crate::error::GraphError;
use crate::graph::*;
use crate::matrix::check_adjacency;

/// The base implementation of the [MutableGraph] trait. Neighbour lists are plain vectors,
/// so edge queries are linear in the degree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LockGraph {
    nodes: NodeMap<NodeIndex>,
    labels: Vec<Node>,
    edges: Vec<Edge>,
    neighbours: Vec<Vec<NodeIndex>>,
    locked: bool,
}

impl Graph for LockGraph {
    fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn is_locked(&self) -> bool {
        self.locked
    }

    fn index_of(&self, u:&Node) -> Option<NodeIndex> {
        self.nodes.get(u).copied()
    }

    fn label(&self, ix:NodeIndex) -> Option<Node> {
        self.labels.get(ix).copied()
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn neighbours(&self, ix:NodeIndex) -> Option<&[NodeIndex]> {
        self.neighbours.get(ix).map(|N| N.as_slice())
    }
}

impl MutableGraph for LockGraph {
    fn add_node(&mut self) -> Result<Node, GraphError> {
        if self.locked {
            return Err(GraphError::LockedGraph { operation: "add node" })
        }

        // The identifier matching the new index may already be taken by
        // an endpoint that `add_edge` registered.
        let mut u = self.labels.len() as Node;
        while self.nodes.contains_key(&u) {
            u += 1;
        }
        self.register(u);

        Ok(u)
    }

    fn add_edge(&mut self, u:&Node, v:&Node) -> Result<(), GraphError> {
        if self.locked {
            return Err(GraphError::LockedGraph { operation: "add edge" })
        }

        self.insert_edge(u, v);
        Ok(())
    }

    fn lock(&mut self) -> Result<(), GraphError> {
        if !self.locked {
            self.locked = true;
            debug!("Locked graph with {} nodes and {} edges", self.num_nodes(), self.num_edges());
        }
        Ok(())
    }
}

impl FromIterator<Edge> for LockGraph {
    fn from_iter<T: IntoIterator<Item = Edge>>(iter: T) -> Self {
        let mut res = LockGraph::new();
        for (u,v) in iter {
            res.insert_edge(&u, &v);
        }
        res
    }
}

impl LockGraph {
    pub fn new() -> LockGraph {
        LockGraph::default()
    }

    pub fn with_capacity(n_guess:usize) -> LockGraph {
        LockGraph {
            nodes: NodeMap::with_capacity_and_hasher(n_guess, Default::default()),
            labels: Vec::with_capacity(n_guess),
            edges: Vec::new(),
            neighbours: Vec::with_capacity(n_guess),
            locked: false
        }
    }

    /// Builds a graph from a square 0/1 adjacency matrix. Nodes `0..n` keep their row
    /// number as identifier and index, and edges are inserted in row-major order.
    pub fn from_matrix<R>(matrix:&[R]) -> Result<LockGraph, GraphError> where R: AsRef<[u8]> {
        let n = check_adjacency(matrix)?;

        let mut res = LockGraph::independent(n as Node);
        for (i, row) in matrix.iter().enumerate() {
            for (j, &x) in row.as_ref().iter().enumerate() {
                if x == 1 {
                    res.insert_edge(&(i as Node), &(j as Node));
                }
            }
        }

        Ok(res)
    }

    /// Generates `n` nodes without edges.
    pub fn independent(n:Node) -> LockGraph {
        let mut res = LockGraph::with_capacity(n as usize);
        for u in 0..n {
            res.register(u);
        }
        res
    }

    /// Generates a directed path on `n` vertices.
    pub fn path(n:Node) -> LockGraph {
        let mut res = LockGraph::independent(n);
        for v in 1..n {
            res.insert_edge(&(v-1), &v);
        }
        res
    }

    /// Generates a directed cycle on `n` vertices.
    pub fn cycle(n:Node) -> LockGraph {
        let mut res = LockGraph::independent(n);
        for u in 0..n {
            res.insert_edge(&u, &((u+1) % n));
        }
        res
    }

    /// Generates a complete bipartite graph (biclique) on `s`+`t` vertices.
    /// Arcs go from the s-side to the t-side.
    pub fn biclique(s:Node, t:Node) -> LockGraph {
        let mut res = LockGraph::independent(s+t);
        for u in 0..s {
            for v in s..(s+t) {
                res.insert_edge(&u, &v);
            }
        }
        res
    }

    /// Node identifiers in index order, so `labels()[ix]` is the identifier of index `ix`.
    pub fn labels(&self) -> &[Node] {
        &self.labels
    }

    fn register(&mut self, u:Node) -> NodeIndex {
        let ix = self.labels.len();
        self.nodes.insert(u, ix);
        self.labels.push(u);
        self.neighbours.push(Vec::new());
        ix
    }

    fn insert_edge(&mut self, u:&Node, v:&Node) {
        let i = match self.index_of(u) {
            Some(i) => i,
            None => self.register(*u)
        };
        let j = match self.index_of(v) {
            Some(j) => j,
            None => self.register(*v)
        };

        self.edges.push((*u, *v));
        self.neighbours[i].push(j);
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####


#[cfg(test)]
mod test {
    use super::*;
    use crate::matrix::Matrix;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn random_matrix(rng:&mut ChaCha8Rng, n:usize, p:f64) -> Matrix {
        (0..n).map(|_| (0..n).map(|_| rng.gen_bool(p) as u8).collect()).collect()
    }

    #[test]
    fn from_matrix() {
        let matrix:Matrix = vec![vec![0, 1, 0],
                                 vec![0, 0, 1],
                                 vec![1, 0, 0]];
        let G = LockGraph::from_matrix(&matrix).unwrap();

        assert_eq!(G.num_nodes(), 3);
        assert_eq!(G.nodes().collect::<Vec<_>>(), vec![0, 1, 2]);
        for u in 0..3 {
            assert_eq!(G.index_of(&u), Some(u as NodeIndex));
        }
        assert_eq!(G.edges(), &[(0,1), (1,2), (2,0)]);
        assert_eq!(G.adjacency_matrix(), matrix);
        assert!(!G.is_locked());
    }

    #[test]
    fn row_major_order() {
        let G = LockGraph::from_matrix(&[[1u8, 0, 1], [1, 0, 0], [0, 1, 1]]).unwrap();
        assert_eq!(G.edges(), &[(0,0), (0,2), (1,0), (2,1), (2,2)]);
    }

    #[test]
    fn malformed_matrix() {
        let matrix:Matrix = vec![vec![0, 1, 0], vec![0, 0, 1]];
        assert!(matches!(LockGraph::from_matrix(&matrix), Err(GraphError::InvalidArgument(_))));

        let matrix:Matrix = vec![vec![0, 3], vec![0, 0]];
        assert!(matches!(LockGraph::from_matrix(&matrix), Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn empty() {
        let G = LockGraph::new();
        assert_eq!(G.num_nodes(), 0);
        assert_eq!(G.num_edges(), 0);
        assert_eq!(G.nodes().count(), 0);
        assert_eq!(G.adjacency_matrix(), Matrix::new());

        let empty:Vec<Vec<u8>> = Vec::new();
        assert_eq!(LockGraph::from_matrix(&empty).unwrap(), G);
    }

    #[test]
    fn add_node() {
        let mut G = LockGraph::new();
        assert_eq!(G.add_node(), Ok(0));
        assert_eq!(G.num_nodes(), 1);
        assert_eq!(G.index_of(&0), Some(0));
        assert_eq!(G.neighbours(0), Some(&[][..]));

        assert_eq!(G.add_nodes(2), Ok(vec![1, 2]));
        assert_eq!(G.num_nodes(), 3);
    }

    #[test]
    fn add_edge() {
        let mut G = LockGraph::new();
        G.add_node().unwrap();
        G.add_node().unwrap();
        G.add_edge(&0, &1).unwrap();

        assert_eq!(G.edges(), &[(0,1)]);
        assert_eq!(G.neighbours(0), Some(&[1][..]));
        assert_eq!(G.neighbours(1), Some(&[][..]));
        assert_eq!(G.neighbours_iter(0).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn parallel_edges_and_loops() {
        let mut G = LockGraph::new();
        G.add_edges(&[(0,1), (0,1), (1,1)]).unwrap();

        assert_eq!(G.num_nodes(), 2);
        assert_eq!(G.num_edges(), 3);
        assert_eq!(G.neighbours(0), Some(&[1, 1][..]));
        assert_eq!(G.neighbours(1), Some(&[1][..]));
        assert_eq!(G.degree(0), 2);
        assert_eq!(G.adjacency_matrix(), vec![vec![0, 1], vec![0, 1]]);
    }

    #[test]
    fn grow_matrix_graph() {
        let matrix:Matrix = vec![vec![0, 1, 0],
                                 vec![0, 0, 1],
                                 vec![1, 0, 0]];
        let mut G = LockGraph::from_matrix(&matrix).unwrap();

        let u = G.add_node().unwrap();
        G.add_edge(&2, &u).unwrap();

        assert_eq!(u, 3);
        assert_eq!(G.num_nodes(), 4);
        assert!(G.contains(&u));
        assert_eq!(G.edges(), &[(0,1), (1,2), (2,0), (2,3)]);
        assert_eq!(G.adjacency_matrix(), vec![vec![0, 1, 0, 0],
                                              vec![0, 0, 1, 0],
                                              vec![1, 0, 0, 1],
                                              vec![0, 0, 0, 0]]);
    }

    #[test]
    fn identifiers_are_not_indices() {
        let mut G = LockGraph::new();
        G.add_edge(&5, &9).unwrap();
        G.add_edge(&9, &2).unwrap();
        G.add_edge(&3, &3).unwrap();

        assert_eq!(G.num_nodes(), 4);
        assert_eq!(G.index_of(&5), Some(0));
        assert_eq!(G.index_of(&9), Some(1));
        assert_eq!(G.index_of(&2), Some(2));
        assert_eq!(G.index_of(&3), Some(3));
        assert_eq!(G.label(2), Some(2));
        assert_eq!(G.label(1), Some(9));

        // Edges keep identifiers, neighbour lists hold indices
        assert_eq!(G.edges(), &[(5,9), (9,2), (3,3)]);
        assert_eq!(G.neighbours(0), Some(&[1][..]));
        assert_eq!(G.neighbours(1), Some(&[2][..]));
        assert_eq!(G.neighbours(3), Some(&[3][..]));
        assert_eq!(G.neighbours(5), None);

        // Identifier 4 is free, so the fifth node gets identifier 4 and index 4
        assert_eq!(G.add_node(), Ok(4));
        assert_eq!(G.index_of(&4), Some(4));

        assert_eq!(G.adjacency_matrix(), vec![vec![0, 1, 0, 0, 0],
                                              vec![0, 0, 1, 0, 0],
                                              vec![0, 0, 0, 0, 0],
                                              vec![0, 0, 0, 1, 0],
                                              vec![0, 0, 0, 0, 0]]);
    }

    #[test]
    fn add_node_skips_taken_identifiers() {
        let mut G = LockGraph::new();
        G.add_edge(&1, &2).unwrap();

        // Index 2 is free but identifier 2 already names index 1
        assert_eq!(G.add_node(), Ok(3));
        assert_eq!(G.index_of(&3), Some(2));
        assert_eq!(G.label(2), Some(3));
        assert_eq!(G.add_node(), Ok(4));
        assert_eq!(G.index_of(&4), Some(3));
    }

    #[test]
    fn unknown_node_queries() {
        let G = LockGraph::path(3);
        assert_eq!(G.neighbours(3), None);
        assert_eq!(G.neighbours_iter(3).count(), 0);
        assert_eq!(G.label(3), None);
        assert_eq!(G.index_of(&3), None);
        assert_eq!(G.degree(3), 0);
    }

    #[test]
    fn lock() {
        let mut G = LockGraph::cycle(4);
        G.lock().unwrap();
        assert!(G.is_locked());

        let before = G.clone();
        assert_eq!(G.add_node(), Err(GraphError::LockedGraph { operation: "add node" }));
        assert_eq!(G.add_edge(&0, &2), Err(GraphError::LockedGraph { operation: "add edge" }));
        assert_eq!(G.add_edge(&10, &11), Err(GraphError::LockedGraph { operation: "add edge" }));
        assert_eq!(G, before);

        // Locking twice is the same as locking once
        G.lock().unwrap();
        assert_eq!(G, before);

        // Reads keep working
        assert_eq!(G.neighbours(3), Some(&[0][..]));
        assert_eq!(G.adjacency_matrix().len(), 4);
    }

    #[test]
    fn generators() {
        assert_eq!(LockGraph::path(0).num_nodes(), 0);
        assert_eq!(LockGraph::path(1).num_nodes(), 1);
        assert_eq!(LockGraph::path(1).num_edges(), 0);
        assert_eq!(LockGraph::cycle(0).num_nodes(), 0);
        assert_eq!(LockGraph::cycle(1).edges(), &[(0,0)]);

        let G = LockGraph::biclique(2, 3);
        assert_eq!(G.num_nodes(), 5);
        assert_eq!(G.num_edges(), 6);
        assert_eq!(G.neighbours(0), Some(&[2, 3, 4][..]));

        let G = LockGraph::independent(4);
        assert_eq!(G.num_nodes(), 4);
        assert_eq!(G.adjacency_matrix(), vec![vec![0; 4]; 4]);
    }

    #[test]
    fn from_edges() {
        let G:LockGraph = vec![(0,1), (1,2), (2,0)].into_iter().collect();
        assert_eq!(G, LockGraph::cycle(3));
    }

    #[test]
    fn matrix_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x10c6);
        for _ in 0..200 {
            let n = rng.gen_range(0..12);
            let p = rng.gen_range(0.0..1.0);
            let matrix = random_matrix(&mut rng, n, p);

            let G = LockGraph::from_matrix(&matrix).unwrap();
            assert_eq!(G.num_nodes(), n);
            assert_eq!(G.num_edges(), matrix.iter().flatten().filter(|&&x| x == 1).count());
            assert_eq!(G.adjacency_matrix(), matrix);
        }
    }

    #[test]
    fn refused_mutation_keeps_state() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let n = rng.gen_range(1..10);
            let matrix = random_matrix(&mut rng, n, 0.3);
            let mut G = LockGraph::from_matrix(&matrix).unwrap();
            G.lock().unwrap();

            let before = G.clone();
            let u = rng.gen_range(0..20);
            let v = rng.gen_range(0..20);
            assert!(matches!(G.add_edge(&u, &v), Err(GraphError::LockedGraph { .. })));
            assert!(matches!(G.add_node(), Err(GraphError::LockedGraph { .. })));
            assert_eq!(G, before);
            assert_eq!(G.adjacency_matrix(), matrix);
        }
    }
}
