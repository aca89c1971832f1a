//! Construction-time settings for a [`Graph`](crate::Graph).
//!
//! The two presets match the two kinds of graph this crate is built for:
//! [`GraphConfig::friendship`] (labels may repeat, every edge has weight 1)
//! and [`GraphConfig::routes`] (labels are unique city names, edges carry
//! distances).

use derivative::Derivative;

/// Default upper bound on the number of vertices in a graph.
pub const DEFAULT_MAX_VERTICES: usize = 100;

/// How [`Graph::shortest_path`](crate::Graph::shortest_path) selects the
/// next vertex to settle.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum PathStrategy {
    /// Linear scan over all unsettled vertices, O(V²). Ties go to the lowest
    /// vertex index.
    #[default]
    Dense,
    /// Binary-heap frontier from the `pathfinding` crate, O(E log V). Reports
    /// the same distances as `Dense`; among several paths of equal cost it
    /// may report a different one.
    #[cfg(feature = "pathfinding")]
    BinaryHeap,
}

/// Limits and policies fixed when a graph is created.
///
/// The default allows [`DEFAULT_MAX_VERTICES`] vertices with repeatable
/// labels and uses [`PathStrategy::Dense`].
#[derive(Derivative, Clone, Debug, Eq, PartialEq)]
#[derivative(Default)]
pub struct GraphConfig {
    /// Maximum number of vertices, or `None` for no limit.
    #[derivative(Default(value = "Some(DEFAULT_MAX_VERTICES)"))]
    pub max_vertices: Option<usize>,
    /// Reject a new vertex whose label is already in use.
    pub unique_labels: bool,
    pub path_strategy: PathStrategy,
}

impl GraphConfig {
    /// Settings for a social network: repeated names are allowed.
    pub fn friendship() -> Self {
        Self::default()
    }

    /// Settings for a city route map: every city name is unique.
    pub fn routes() -> Self {
        Self {
            unique_labels: true,
            ..Self::default()
        }
    }

    pub fn with_max_vertices(mut self, max_vertices: Option<usize>) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    pub fn with_path_strategy(mut self, path_strategy: PathStrategy) -> Self {
        self.path_strategy = path_strategy;
        self
    }
}

/// How much diagnostic output [`init_tracing`](crate::tracing_support::init_tracing)
/// lets through.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Verbosity {
    /// Nothing at all.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Adds mutations and query results.
    Verbose,
    /// Adds every traversal step.
    Trace,
}

impl Verbosity {
    /// Maps a repeat count of a `-v` style flag to a verbosity.
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }

    /// Like [`from_occurrences`](Self::from_occurrences), but a set `quiet`
    /// flag wins over any number of `-v`.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            Verbosity::Quiet
        } else {
            Self::from_occurrences(verbose)
        }
    }
}
