#![allow(dead_code)]

use hopgraph::{Graph, GraphConfig, VertexId};
use quickcheck::{Arbitrary, Gen};

/// A random weighted graph for property tests. Always has at least one
/// vertex, may contain parallel edges and zero weights, never self-loops.
#[derive(Clone, Debug)]
pub struct ArbGraph {
    pub graph: Graph,
}

impl ArbGraph {
    /// Maps an arbitrary index onto a valid vertex id.
    pub fn vertex(&self, raw: usize) -> VertexId {
        raw % self.graph.vertex_count()
    }
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20 + 1; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;
        let num_extra_parallel_edges = usize::arbitrary(g) % 5;

        let mut graph = Graph::with_config(GraphConfig::default().with_max_vertices(None));
        for i in 0..num_vertices {
            graph.add_vertex(format!("v{i}")).unwrap();
        }

        for i in 0..num_edges {
            let u = usize::arbitrary(g) % num_vertices;
            let v = usize::arbitrary(g) % num_vertices;
            if u == v {
                continue;
            }
            let weight = u32::arbitrary(g) % 100;
            graph.add_edge(u, v, weight).unwrap();
            if i < num_extra_parallel_edges {
                graph.add_edge(v, u, u32::arbitrary(g) % 100).unwrap();
            }
        }

        ArbGraph { graph }
    }
}

/// Builds a graph with labels `v0..vN` and the given weighted edges.
pub fn weighted_graph(n: usize, edges: &[(VertexId, VertexId, u32)]) -> Graph {
    let mut graph = Graph::with_config(GraphConfig::default().with_max_vertices(None));
    for i in 0..n {
        graph.add_vertex(format!("v{i}")).unwrap();
    }
    for &(u, v, w) in edges {
        graph.add_edge(u, v, w).unwrap();
    }
    graph
}
