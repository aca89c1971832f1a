//! Breadth-first and depth-first traversal.
//!
//! The iterators are lazy and visit each reachable vertex exactly once.
//! Neighbors are expanded in adjacency order (most recently added edge
//! first), which makes the visiting order fully deterministic.

use std::collections::VecDeque;

use crate::{
    error::Result,
    graph::{Graph, VertexId},
    tracing_support::{info_span, trace},
    visit_set::VisitSet,
};

/// Breadth-first traversal yielding each vertex with its hop count from the
/// start vertex.
///
/// A vertex is marked when it is first discovered, so its depth is the
/// length of a shortest (fewest-edges) path from the start.
pub struct BfsWithDepth<'g> {
    graph: &'g Graph,
    visited: VisitSet,
    queue: VecDeque<(VertexId, usize)>,
}

impl<'g> BfsWithDepth<'g> {
    fn new(graph: &'g Graph, start: VertexId) -> Self {
        let mut visited = VisitSet::new(graph.vertex_count());
        visited.insert(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from([(start, 0)]),
        }
    }
}

impl Iterator for BfsWithDepth<'_> {
    type Item = (VertexId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (current, depth) = self.queue.pop_front()?;
        trace!(vertex = current, depth, "visit");
        for adjacent in self.graph.adjacency().neighbors(current) {
            if self.visited.insert(adjacent.vertex) {
                self.queue.push_back((adjacent.vertex, depth + 1));
            }
        }
        Some((current, depth))
    }
}

/// Breadth-first traversal yielding vertex ids.
pub struct Bfs<'g>(BfsWithDepth<'g>);

impl Iterator for Bfs<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(vertex, _)| vertex)
    }
}

/// Depth-first pre-order traversal.
///
/// Uses an explicit stack but visits vertices in the same order as the
/// recursive formulation: a vertex is emitted, then each of its unvisited
/// neighbors is explored fully, in adjacency order, before the next.
pub struct Dfs<'g> {
    graph: &'g Graph,
    visited: VisitSet,
    stack: Vec<VertexId>,
}

impl<'g> Dfs<'g> {
    fn new(graph: &'g Graph, start: VertexId) -> Self {
        Self {
            graph,
            visited: VisitSet::new(graph.vertex_count()),
            stack: vec![start],
        }
    }
}

impl Iterator for Dfs<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vertex) = self.stack.pop() {
            if self.visited.insert(vertex) {
                trace!(vertex, "visit");
                // Pushed in reverse so the first neighbor is popped first.
                for adjacent in self.graph.adjacency().neighbors(vertex).rev() {
                    if !self.visited.contains(adjacent.vertex) {
                        self.stack.push(adjacent.vertex);
                    }
                }
                return Some(vertex);
            }
        }
        None
    }
}

impl Graph {
    /// Lazy breadth-first traversal from `start`.
    pub fn bfs_iter(&self, start: VertexId) -> Result<Bfs<'_>> {
        Ok(Bfs(self.bfs_with_depth(start)?))
    }

    /// Lazy breadth-first traversal from `start` that also reports each
    /// vertex's hop count.
    pub fn bfs_with_depth(&self, start: VertexId) -> Result<BfsWithDepth<'_>> {
        self.check_vertex(start)?;
        Ok(BfsWithDepth::new(self, start))
    }

    /// Lazy depth-first traversal from `start`.
    pub fn dfs_iter(&self, start: VertexId) -> Result<Dfs<'_>> {
        self.check_vertex(start)?;
        Ok(Dfs::new(self, start))
    }

    /// Vertices reachable from `start` in breadth-first order, starting with
    /// `start` itself.
    pub fn bfs(&self, start: VertexId) -> Result<Vec<VertexId>> {
        let _span = info_span!("bfs", start).entered();
        let order: Vec<_> = self.bfs_iter(start)?.collect();
        trace!(?order, "bfs finished");
        Ok(order)
    }

    /// Vertices reachable from `start` in depth-first pre-order, starting
    /// with `start` itself.
    pub fn dfs(&self, start: VertexId) -> Result<Vec<VertexId>> {
        let _span = info_span!("dfs", start).entered();
        let order: Vec<_> = self.dfs_iter(start)?.collect();
        trace!(?order, "dfs finished");
        Ok(order)
    }
}
