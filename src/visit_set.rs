//! Dense "already seen" marks indexed by vertex id.

#[cfg(feature = "bitvec")]
use bitvec::vec::BitVec;

use crate::graph::VertexId;

/// A fixed-size set of vertex ids, sized to the graph it is used on.
#[derive(Clone, Debug)]
pub(crate) struct VisitSet {
    #[cfg(feature = "bitvec")]
    marks: BitVec,
    #[cfg(not(feature = "bitvec"))]
    marks: Vec<bool>,
}

impl VisitSet {
    pub fn new(len: usize) -> Self {
        Self {
            #[cfg(feature = "bitvec")]
            marks: BitVec::repeat(false, len),
            #[cfg(not(feature = "bitvec"))]
            marks: vec![false; len],
        }
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.marks[vertex]
    }

    /// Marks `vertex`, returning `true` if it was not marked before.
    pub fn insert(&mut self, vertex: VertexId) -> bool {
        #[cfg(feature = "bitvec")]
        {
            !self.marks.replace(vertex, true)
        }
        #[cfg(not(feature = "bitvec"))]
        {
            !std::mem::replace(&mut self.marks[vertex], true)
        }
    }
}
