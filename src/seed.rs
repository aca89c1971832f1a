//! The small social network every friendship session starts from.

use crate::{
    config::GraphConfig,
    error::Result,
    graph::{Graph, VertexId},
};

/// Seed users, in id order.
pub const SOCIAL_USERS: [&str; 5] = ["Alice", "Bob", "Carlos", "Diana", "Eva"];

/// Seed friendships, in insertion order.
pub const SOCIAL_FRIENDSHIPS: [(VertexId, VertexId); 5] = [(0, 1), (0, 2), (0, 4), (1, 3), (3, 4)];

/// Builds the seeded friendship graph.
pub fn social_network() -> Result<Graph> {
    social_network_with(GraphConfig::friendship())
}

/// Builds the seeded friendship graph with custom settings. Fails if the
/// settings cannot hold the seed, e.g. a vertex limit below five.
pub fn social_network_with(config: GraphConfig) -> Result<Graph> {
    let mut graph = Graph::with_config(config);
    for user in SOCIAL_USERS {
        graph.add_vertex(user)?;
    }
    for (u, v) in SOCIAL_FRIENDSHIPS {
        graph.add_unit_edge(u, v)?;
    }
    Ok(graph)
}
