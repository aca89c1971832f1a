//! Small undirected graphs for two kinds of console tools: a social network
//! (unweighted friendships, traversal and friend suggestion) and a city
//! route map (weighted roads, cheapest route).
//!
//! A [`Graph`] owns its vertices and adjacency lists. Queries are methods on
//! `Graph`, grouped by module: [`traversal`], [`shortest_path`] and
//! [`suggestion`]. All fallible operations return [`GraphError`] and leave
//! the graph unchanged on failure.

pub(crate) mod adjacency;
pub mod config;
pub mod error;
pub mod graph;
pub(crate) mod registry;
pub mod seed;
pub mod shortest_path;
pub mod suggestion;
pub mod tracing_support;
pub mod traversal;

mod visit_set;

pub use crate::adjacency::{Adjacent, Neighbors};
pub use crate::config::{GraphConfig, PathStrategy, Verbosity};
pub use crate::error::{GraphError, Result};
pub use crate::graph::{Distance, EdgeRecord, Graph, UNIT_WEIGHT, VertexId, Weight};
pub use crate::shortest_path::ShortestPath;
