//! Single-source shortest paths (Dijkstra) over non-negative edge weights.
//!
//! The default [`PathStrategy::Dense`] settles vertices by scanning every
//! unsettled vertex for the smallest tentative distance, which is O(V²) and
//! the right trade-off for graphs of a few hundred vertices. With the
//! `pathfinding` feature, [`PathStrategy::BinaryHeap`] hands the search to
//! `pathfinding::prelude::dijkstra` instead. Both report the same distance;
//! when several paths share the minimum cost they may report different ones.

use crate::{
    config::PathStrategy,
    error::{GraphError, Result},
    graph::{Distance, Graph, VertexId},
    tracing_support::{debug, info_span, trace},
    visit_set::VisitSet,
};

/// A cheapest route between two vertices.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ShortestPath {
    /// Sum of the edge weights along `path`.
    pub distance: Distance,
    /// Vertices from source to target inclusive. A path from a vertex to
    /// itself is just that vertex.
    pub path: Vec<VertexId>,
}

impl ShortestPath {
    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Settled distances and predecessor links from one source.
struct DijkstraTable {
    distance: Vec<Option<Distance>>,
    previous: Vec<Option<VertexId>>,
}

impl DijkstraTable {
    fn compute(graph: &Graph, source: VertexId) -> Self {
        let n = graph.vertex_count();
        let mut distance = vec![None; n];
        let mut previous = vec![None; n];
        let mut settled = VisitSet::new(n);
        distance[source] = Some(0);

        for _ in 0..n.saturating_sub(1) {
            // Nearest unsettled vertex; the lowest id wins a tie.
            let Some((u, du)) = (0..n)
                .filter(|&v| !settled.contains(v))
                .filter_map(|v| distance[v].map(|d| (v, d)))
                .min_by_key(|&(v, d)| (d, v))
            else {
                break;
            };
            settled.insert(u);
            trace!(vertex = u, distance = du, "settled");

            for adjacent in graph.adjacency().neighbors(u) {
                let v = adjacent.vertex;
                if settled.contains(v) {
                    continue;
                }
                let candidate = du + Distance::from(adjacent.weight);
                if distance[v].is_none_or(|current| candidate < current) {
                    distance[v] = Some(candidate);
                    previous[v] = Some(u);
                }
            }
        }

        Self { distance, previous }
    }

    fn path_to(&self, target: VertexId) -> Option<ShortestPath> {
        let distance = self.distance[target]?;
        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.previous[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(ShortestPath { distance, path })
    }
}

#[cfg(feature = "pathfinding")]
fn heap_shortest_path(graph: &Graph, source: VertexId, target: VertexId) -> Option<ShortestPath> {
    use pathfinding::prelude::dijkstra;

    dijkstra(
        &source,
        |&u| {
            graph
                .adjacency()
                .neighbors(u)
                .map(|adjacent| (adjacent.vertex, Distance::from(adjacent.weight)))
        },
        |&v| v == target,
    )
    .map(|(path, distance)| ShortestPath { distance, path })
}

impl Graph {
    /// Cheapest path from `source` to `target` using the configured
    /// [`PathStrategy`].
    pub fn shortest_path(&self, source: VertexId, target: VertexId) -> Result<ShortestPath> {
        self.shortest_path_with(source, target, self.config().path_strategy)
    }

    /// Cheapest path from `source` to `target` using an explicit strategy.
    pub fn shortest_path_with(
        &self,
        source: VertexId,
        target: VertexId,
        strategy: PathStrategy,
    ) -> Result<ShortestPath> {
        let _span = info_span!("shortest_path", source, target, ?strategy).entered();
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        let found = match strategy {
            PathStrategy::Dense => DijkstraTable::compute(self, source).path_to(target),
            #[cfg(feature = "pathfinding")]
            PathStrategy::BinaryHeap => heap_shortest_path(self, source, target),
        };
        match found {
            Some(found) => {
                debug!(distance = found.distance, hops = found.hops(), "path found");
                Ok(found)
            }
            None => {
                debug!("no path");
                Err(GraphError::NoPath {
                    from: source,
                    to: target,
                })
            }
        }
    }

    /// Like [`shortest_path`](Self::shortest_path), with both endpoints
    /// given by label.
    pub fn shortest_path_by_label(&self, source: &str, target: &str) -> Result<ShortestPath> {
        let source = self.resolve_label(source)?;
        let target = self.resolve_label(target)?;
        self.shortest_path(source, target)
    }

    /// Distance from `source` to every vertex, indexed by vertex id. `None`
    /// marks vertices that cannot be reached.
    pub fn distances_from(&self, source: VertexId) -> Result<Vec<Option<Distance>>> {
        let _span = info_span!("distances_from", source).entered();
        self.check_vertex(source)?;
        Ok(DijkstraTable::compute(self, source).distance)
    }
}
