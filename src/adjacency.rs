use std::{iter::Rev, slice};

use crate::graph::{VertexId, Weight};

/// One entry in a vertex's adjacency list.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Adjacent {
    pub vertex: VertexId,
    pub weight: Weight,
}

/// Per-vertex neighbor lists for an undirected graph.
///
/// Every edge is stored twice, once at each endpoint, with the same weight.
/// Lists are kept in insertion order and read back newest first.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyStore {
    lists: Vec<Vec<Adjacent>>,
}

impl AdjacencyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty list for a new vertex and returns its id.
    pub fn push_vertex(&mut self) -> VertexId {
        self.lists.push(Vec::new());
        self.lists.len() - 1
    }

    /// Records the edge at both endpoints. Callers validate `u` and `v`
    /// first; this panics on an out-of-range id.
    pub fn insert(&mut self, u: VertexId, v: VertexId, weight: Weight) {
        assert!(u < self.lists.len() && v < self.lists.len());
        self.lists[u].push(Adjacent { vertex: v, weight });
        self.lists[v].push(Adjacent { vertex: u, weight });
    }

    /// Neighbors of `u`, most recently added first.
    pub fn neighbors(&self, u: VertexId) -> Neighbors<'_> {
        Neighbors {
            inner: self.lists[u].iter().rev(),
        }
    }

    pub fn degree(&self, u: VertexId) -> usize {
        self.lists[u].len()
    }

    /// Number of undirected edges, counting parallel edges separately.
    pub fn num_edges(&self) -> usize {
        self.lists.iter().map(Vec::len).sum::<usize>() / 2
    }
}

/// Iterator over a vertex's neighbors, most recently added first.
///
/// A clone resumes from the same position as the original.
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    inner: Rev<slice::Iter<'a, Adjacent>>,
}

impl Iterator for Neighbors<'_> {
    type Item = Adjacent;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Neighbors<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
