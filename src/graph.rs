//! [`Graph`] is the undirected, optionally weighted graph at the center of
//! this crate. It owns a [`VertexRegistry`] (ids and labels) and an
//! [`AdjacencyStore`] (neighbor lists), and keeps the two the same length.
//!
//! This module provides construction and mutation. The query engines live
//! in their own modules and extend `Graph` with further methods:
//!
//! - [`traversal`](crate::traversal): `bfs`, `dfs` and their lazy iterators
//! - [`shortest_path`](crate::shortest_path): Dijkstra with path
//!   reconstruction
//! - [`suggestion`](crate::suggestion): vertices exactly two hops away
//!
//! Vertices and edges can only be added. Every fallible operation validates
//! its arguments before touching any state, so an `Err` means the graph is
//! unchanged.

use crate::{
    adjacency::{AdjacencyStore, Neighbors},
    config::GraphConfig,
    error::{GraphError, Result},
    registry::VertexRegistry,
    tracing_support::debug,
};

/// Dense, zero-based vertex index.
pub type VertexId = usize;

/// Non-negative edge weight.
pub type Weight = u32;

/// Sum of edge weights along a path.
pub type Distance = u64;

/// The weight given to every edge of an unweighted graph.
pub const UNIT_WEIGHT: Weight = 1;

/// An undirected edge as reported by [`Graph::list_edges`]. `low` is never
/// greater than `high`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct EdgeRecord {
    pub low: VertexId,
    pub high: VertexId,
    pub weight: Weight,
}

#[derive(Clone, Debug)]
pub struct Graph {
    config: GraphConfig,
    vertices: VertexRegistry,
    adjacency: AdjacencyStore,
}

impl Graph {
    /// An empty graph with the default (friendship) settings.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: VertexRegistry::new(config.max_vertices, config.unique_labels),
            adjacency: AdjacencyStore::new(),
            config,
        }
    }

    /// An empty social network graph.
    pub fn friendship() -> Self {
        Self::with_config(GraphConfig::friendship())
    }

    /// An empty city route graph.
    pub fn routes() -> Self {
        Self::with_config(GraphConfig::routes())
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// # Vertices

    /// Adds a vertex and returns its id, which is the number of vertices
    /// that existed before the call.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> Result<VertexId> {
        let label = label.into();
        let id = match self.vertices.add(label.clone()) {
            Ok(id) => id,
            Err(err) => {
                debug!(label = %label, %err, "vertex rejected");
                return Err(err);
            }
        };
        let slot = self.adjacency.push_vertex();
        debug_assert_eq!(id, slot);
        debug!(id, label = %label, "vertex added");
        Ok(id)
    }

    /// Finds the first vertex with exactly this label.
    pub fn find_by_label(&self, label: &str) -> Option<VertexId> {
        self.vertices.find(label)
    }

    /// Like [`find_by_label`](Self::find_by_label), but an unknown label is
    /// an error.
    pub fn resolve_label(&self, label: &str) -> Result<VertexId> {
        self.find_by_label(label)
            .ok_or_else(|| GraphError::UnknownLabel(label.to_string()))
    }

    pub fn label_of(&self, id: VertexId) -> Result<&str> {
        self.vertices.label(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices with their labels, in id order.
    pub fn list_vertices(&self) -> impl Iterator<Item = (VertexId, &str)> + '_ {
        self.vertices.iter()
    }

    /// # Edges

    /// Connects `u` and `v` with an edge of the given weight. Adding the
    /// same pair again creates a parallel edge.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<()> {
        if let Err(err) = self.check_edge(u, v) {
            debug!(u, v, weight, %err, "edge rejected");
            return Err(err);
        }
        self.adjacency.insert(u, v, weight);
        debug!(u, v, weight, "edge added");
        Ok(())
    }

    /// Connects `u` and `v` with an edge of weight [`UNIT_WEIGHT`].
    pub fn add_unit_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.add_edge(u, v, UNIT_WEIGHT)
    }

    /// Connects the vertices labelled `a` and `b`. Both labels are resolved
    /// before anything is added.
    pub fn add_edge_by_label(&mut self, a: &str, b: &str, weight: Weight) -> Result<()> {
        let u = self.resolve_label(a)?;
        let v = self.resolve_label(b)?;
        self.add_edge(u, v, weight)
    }

    fn check_edge(&self, u: VertexId, v: VertexId) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        Ok(())
    }

    /// Neighbors of `u` with edge weights, most recently added first.
    pub fn neighbors_of(&self, u: VertexId) -> Result<Neighbors<'_>> {
        self.check_vertex(u)?;
        Ok(self.adjacency.neighbors(u))
    }

    /// Number of edge ends at `u`, counting parallel edges separately.
    pub fn degree(&self, u: VertexId) -> Result<usize> {
        self.check_vertex(u)?;
        Ok(self.adjacency.degree(u))
    }

    /// Number of undirected edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.adjacency.num_edges()
    }

    /// Every undirected edge once, lower endpoint first, grouped by lower
    /// endpoint in id order. Parallel edges are each reported.
    pub fn list_edges(&self) -> Vec<EdgeRecord> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for low in 0..self.vertex_count() {
            for adjacent in self.adjacency.neighbors(low) {
                if low < adjacent.vertex {
                    edges.push(EdgeRecord {
                        low,
                        high: adjacent.vertex,
                        weight: adjacent.weight,
                    });
                }
            }
        }
        edges
    }

    pub(crate) fn check_vertex(&self, id: VertexId) -> Result<()> {
        self.vertices.check(id)
    }

    pub(crate) fn adjacency(&self) -> &AdjacencyStore {
        &self.adjacency
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::Adjacent;

    fn named(labels: &[&str]) -> Graph {
        let mut graph = Graph::new();
        for label in labels {
            graph.add_vertex(*label).unwrap();
        }
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.list_edges().is_empty());
    }

    #[test]
    fn test_add_vertex_assigns_sequential_ids() {
        let mut graph = Graph::new();
        assert_eq!(graph.add_vertex("Alice"), Ok(0));
        assert_eq!(graph.add_vertex("Bob"), Ok(1));
        assert_eq!(graph.add_vertex("Alice"), Ok(2));
        assert_eq!(graph.label_of(1), Ok("Bob"));
        assert_eq!(
            graph.list_vertices().collect::<Vec<_>>(),
            vec![(0, "Alice"), (1, "Bob"), (2, "Alice")]
        );
    }

    #[test]
    fn test_routes_reject_duplicate_city() {
        let mut graph = Graph::routes();
        graph.add_vertex("Recife").unwrap();
        assert_eq!(
            graph.add_vertex("Recife"),
            Err(GraphError::DuplicateLabel("Recife".to_string()))
        );
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_capacity_from_config() {
        let mut graph = Graph::with_config(GraphConfig::default().with_max_vertices(Some(1)));
        graph.add_vertex("a").unwrap();
        assert_eq!(graph.add_vertex("b"), Err(GraphError::CapacityExceeded(1)));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_default_capacity_is_100() {
        let mut graph = Graph::new();
        for i in 0..100 {
            graph.add_vertex(format!("user{i}")).unwrap();
        }
        assert_eq!(
            graph.add_vertex("one too many"),
            Err(GraphError::CapacityExceeded(100))
        );
    }

    #[test]
    fn test_unbounded() {
        let mut graph = Graph::with_config(GraphConfig::default().with_max_vertices(None));
        for i in 0..250 {
            graph.add_vertex(format!("v{i}")).unwrap();
        }
        assert_eq!(graph.vertex_count(), 250);
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = named(&["a", "b"]);
        graph.add_edge(0, 1, 12).unwrap();
        assert_eq!(
            graph.neighbors_of(0).unwrap().collect::<Vec<_>>(),
            vec![Adjacent { vertex: 1, weight: 12 }]
        );
        assert_eq!(
            graph.neighbors_of(1).unwrap().collect::<Vec<_>>(),
            vec![Adjacent { vertex: 0, weight: 12 }]
        );
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_invalid_vertex_leaves_graph_unchanged() {
        let mut graph = named(&["a", "b"]);
        graph.add_unit_edge(0, 1).unwrap();
        assert_eq!(
            graph.add_unit_edge(0, 2),
            Err(GraphError::InvalidVertex { id: 2, count: 2 })
        );
        assert_eq!(
            graph.add_unit_edge(5, 1),
            Err(GraphError::InvalidVertex { id: 5, count: 2 })
        );
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(0), Ok(1));
        assert_eq!(graph.degree(1), Ok(1));
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut graph = named(&["a"]);
        assert_eq!(graph.add_unit_edge(0, 0), Err(GraphError::SelfLoop(0)));
        assert_eq!(graph.degree(0), Ok(0));
    }

    #[test]
    fn test_parallel_edges_allowed() {
        let mut graph = named(&["a", "b"]);
        graph.add_edge(0, 1, 4).unwrap();
        graph.add_edge(1, 0, 9).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree(0), Ok(2));
    }

    #[test]
    fn test_neighbors_of_invalid() {
        let graph = named(&["a"]);
        assert!(graph.neighbors_of(1).is_err());
        assert!(graph.degree(1).is_err());
    }

    #[test]
    fn test_list_edges_reports_each_edge_once() {
        let mut graph = named(&["a", "b", "c"]);
        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(2, 0, 5).unwrap();
        graph.add_edge(1, 2, 1).unwrap();
        assert_eq!(
            graph.list_edges(),
            vec![
                EdgeRecord { low: 0, high: 2, weight: 5 },
                EdgeRecord { low: 0, high: 1, weight: 3 },
                EdgeRecord { low: 1, high: 2, weight: 1 },
            ]
        );
    }

    #[test]
    fn test_list_edges_reports_parallel_edges_twice() {
        let mut graph = named(&["a", "b"]);
        graph.add_edge(0, 1, 2).unwrap();
        graph.add_edge(0, 1, 2).unwrap();
        assert_eq!(
            graph.list_edges(),
            vec![
                EdgeRecord { low: 0, high: 1, weight: 2 },
                EdgeRecord { low: 0, high: 1, weight: 2 },
            ]
        );
    }

    #[test]
    fn test_labels() {
        let mut graph = Graph::routes();
        graph.add_vertex("Natal").unwrap();
        graph.add_vertex("Recife").unwrap();
        assert_eq!(graph.find_by_label("Recife"), Some(1));
        assert_eq!(graph.find_by_label("recife"), None);
        assert_eq!(
            graph.resolve_label("Olinda"),
            Err(GraphError::UnknownLabel("Olinda".to_string()))
        );
        assert_eq!(
            graph.label_of(2),
            Err(GraphError::InvalidVertex { id: 2, count: 2 })
        );
    }

    #[test]
    fn test_add_edge_by_label() {
        let mut graph = Graph::routes();
        graph.add_vertex("Natal").unwrap();
        graph.add_vertex("Recife").unwrap();
        graph.add_edge_by_label("Natal", "Recife", 286).unwrap();
        assert_eq!(
            graph.list_edges(),
            vec![EdgeRecord { low: 0, high: 1, weight: 286 }]
        );
        assert_eq!(
            graph.add_edge_by_label("Natal", "Olinda", 10),
            Err(GraphError::UnknownLabel("Olinda".to_string()))
        );
        assert_eq!(graph.edge_count(), 1);
    }
}
