use std::collections::BTreeSet;

use crate::{
    error::Result,
    graph::{Graph, VertexId},
    tracing_support::{debug, info_span},
};

/// Hop count at which a vertex counts as a suggestion.
const SUGGESTION_DEPTH: usize = 2;

impl Graph {
    /// Vertices exactly two hops from `start`: neighbors of neighbors that
    /// are neither `start` nor one of its neighbors. In a friendship graph
    /// these are the friends of friends worth suggesting.
    ///
    /// The depth is the breadth-first discovery depth, so a vertex reachable
    /// both in one hop and in two is never included. An empty set is a
    /// normal result.
    pub fn suggest(&self, start: VertexId) -> Result<BTreeSet<VertexId>> {
        let _span = info_span!("suggest", start).entered();
        let suggestions: BTreeSet<_> = self
            .bfs_with_depth(start)?
            .take_while(|&(_, depth)| depth <= SUGGESTION_DEPTH)
            .filter(|&(_, depth)| depth == SUGGESTION_DEPTH)
            .map(|(vertex, _)| vertex)
            .collect();
        debug!(count = suggestions.len(), "suggestions found");
        Ok(suggestions)
    }
}
