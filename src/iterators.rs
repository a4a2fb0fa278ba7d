use crate::graph::{Graph, NodeIndex};

/*
    Forward cursor over a single neighbour list. Calling
    `neighbours_iter` again starts a fresh cursor over the same data.
*/
#[derive(Debug, Clone)]
pub struct NeighbourIterator<'a> {
    it: std::slice::Iter<'a, NodeIndex>,
}

impl<'a> NeighbourIterator<'a> {
    pub fn new(N: &'a [NodeIndex]) -> NeighbourIterator<'a> {
        NeighbourIterator { it: N.iter() }
    }
}

impl<'a> Iterator for NeighbourIterator<'a> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a> ExactSizeIterator for NeighbourIterator<'a> {}

/*
    Neighbourhood iterator. At each step the iterator
    returns a pair (v,N(v)) in insertion order of v.
*/
pub struct NIterator<'a, G: Graph + ?Sized> {
    G: &'a G,
    v_it: std::ops::Range<NodeIndex>,
}

impl<'a, G: Graph + ?Sized> NIterator<'a, G> {
    pub fn new(G: &'a G) -> NIterator<'a, G> {
        NIterator {
            G,
            v_it: G.nodes(),
        }
    }
}

impl<'a, G: Graph + ?Sized> Iterator for NIterator<'a, G> {
    type Item = (NodeIndex, NeighbourIterator<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.v_it.next()?;
        let N = self.G.neighbours_iter(v);

        Some((v, N))
    }
}
