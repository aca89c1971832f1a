use crate::{
    error::{GraphError, Result},
    graph::VertexId,
};

/// Vertex identities and their display labels.
///
/// Ids are dense and zero-based: the n-th vertex added gets id `n - 1`.
/// Vertices are never removed.
#[derive(Clone, Debug)]
pub struct VertexRegistry {
    labels: Vec<String>,
    max_vertices: Option<usize>,
    unique_labels: bool,
}

impl VertexRegistry {
    pub fn new(max_vertices: Option<usize>, unique_labels: bool) -> Self {
        Self {
            labels: Vec::new(),
            max_vertices,
            unique_labels,
        }
    }

    /// Appends a vertex and returns its id.
    pub fn add(&mut self, label: impl Into<String>) -> Result<VertexId> {
        let label = label.into();
        if let Some(max) = self.max_vertices {
            if self.labels.len() >= max {
                return Err(GraphError::CapacityExceeded(max));
            }
        }
        if self.unique_labels && self.find(&label).is_some() {
            return Err(GraphError::DuplicateLabel(label));
        }
        self.labels.push(label);
        Ok(self.labels.len() - 1)
    }

    /// Id of the first vertex whose label is exactly `label`.
    pub fn find(&self, label: &str) -> Option<VertexId> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn label(&self, id: VertexId) -> Result<&str> {
        self.labels
            .get(id)
            .map(String::as_str)
            .ok_or(GraphError::InvalidVertex {
                id,
                count: self.labels.len(),
            })
    }

    pub fn check(&self, id: VertexId) -> Result<()> {
        if id < self.labels.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                id,
                count: self.labels.len(),
            })
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All vertices in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &str)> + '_ {
        self.labels.iter().map(String::as_str).enumerate()
    }
}
