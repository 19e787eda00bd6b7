use super::face::FaceId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the mesh.
    pub struct EdgeId;
}

/// One of the two directed uses of an edge.
///
/// The `F1` use traverses `v1 → v2` and belongs to the boundary walk of
/// the face in slot `f1`; the `F2` use traverses `v2 → v1` for slot `f2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    F1,
    F2,
}

impl Side {
    /// The opposite side.
    #[must_use]
    pub fn other(self) -> Side {
        match self {
            Side::F1 => Side::F2,
            Side::F2 => Side::F1,
        }
    }
}

/// Data associated with a winged edge.
///
/// The four wing links tie the edge into the boundary cycles of the faces
/// in its two slots: `f1_prev`'s use on the `f1` side ends at `v1`,
/// `f1_next`'s use starts at `v2`, and `f2_prev` / `f2_next` mirror this
/// for the `f2` side (which runs `v2 → v1`). An edge whose two slots name
/// the same face is a spur and appears in that face's walk once per
/// direction.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Numeric id, unique per mesh, never reused.
    pub id: u64,
    /// Start vertex of the edge.
    pub v1: VertexId,
    /// End vertex of the edge; always distinct from `v1`.
    pub v2: VertexId,
    /// Face bordered by the `v1 → v2` use.
    pub f1: Option<FaceId>,
    /// Face bordered by the `v2 → v1` use.
    pub f2: Option<FaceId>,
    /// Previous edge in the `f1`-side boundary walk.
    pub f1_prev: EdgeId,
    /// Next edge in the `f1`-side boundary walk.
    pub f1_next: EdgeId,
    /// Previous edge in the `f2`-side boundary walk.
    pub f2_prev: EdgeId,
    /// Next edge in the `f2`-side boundary walk.
    pub f2_next: EdgeId,
}

impl EdgeData {
    /// The vertex a directed use starts from.
    #[must_use]
    pub fn start(&self, side: Side) -> VertexId {
        match side {
            Side::F1 => self.v1,
            Side::F2 => self.v2,
        }
    }

    /// The vertex a directed use arrives at.
    #[must_use]
    pub fn end(&self, side: Side) -> VertexId {
        match side {
            Side::F1 => self.v2,
            Side::F2 => self.v1,
        }
    }

    /// The face slot on the given side.
    #[must_use]
    pub fn face(&self, side: Side) -> Option<FaceId> {
        match side {
            Side::F1 => self.f1,
            Side::F2 => self.f2,
        }
    }

    /// The wing carrying the following use on the given side.
    #[must_use]
    pub fn next(&self, side: Side) -> EdgeId {
        match side {
            Side::F1 => self.f1_next,
            Side::F2 => self.f2_next,
        }
    }

    /// The wing carrying the preceding use on the given side.
    #[must_use]
    pub fn prev(&self, side: Side) -> EdgeId {
        match side {
            Side::F1 => self.f1_prev,
            Side::F2 => self.f2_prev,
        }
    }

    /// The other endpoint of the edge.
    #[must_use]
    pub fn other_vertex(&self, v: VertexId) -> VertexId {
        if v == self.v1 {
            self.v2
        } else {
            self.v1
        }
    }

    /// True if `v` is one of the edge's endpoints.
    #[must_use]
    pub fn has_endpoint(&self, v: VertexId) -> bool {
        v == self.v1 || v == self.v2
    }

    pub(crate) fn set_face(&mut self, side: Side, f: Option<FaceId>) {
        match side {
            Side::F1 => self.f1 = f,
            Side::F2 => self.f2 = f,
        }
    }

    pub(crate) fn set_next(&mut self, side: Side, e: EdgeId) {
        match side {
            Side::F1 => self.f1_next = e,
            Side::F2 => self.f2_next = e,
        }
    }

    pub(crate) fn set_prev(&mut self, side: Side, e: EdgeId) {
        match side {
            Side::F1 => self.f1_prev = e,
            Side::F2 => self.f2_prev = e,
        }
    }
}
