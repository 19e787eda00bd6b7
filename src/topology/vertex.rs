use crate::math::Point3;

use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the mesh.
    pub struct VertexId;
}

/// Data associated with a topological vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// Numeric id, unique per mesh, never reused.
    pub id: u64,
    /// The 3D position of the vertex.
    pub point: Point3,
    /// One incident edge, absent while the vertex is isolated.
    pub edge: Option<EdgeId>,
}

impl VertexData {
    /// Creates an isolated vertex at the given point.
    #[must_use]
    pub fn new(id: u64, point: Point3) -> Self {
        Self {
            id,
            point,
            edge: None,
        }
    }
}
