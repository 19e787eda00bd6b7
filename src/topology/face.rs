use crate::math::Vector3;

use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the mesh.
    pub struct FaceId;
}

/// Data associated with a topological face.
///
/// The cached normal is derived state: it is recomputed by every operator
/// that modifies the face's boundary and is the zero vector while the
/// boundary is empty or degenerate.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Numeric id, unique per mesh, never reused.
    pub id: u64,
    /// One edge on the boundary, absent for a freshly seeded face.
    pub edge: Option<EdgeId>,
    /// Cached outward normal (right-hand rule of the boundary walk).
    pub normal: Vector3,
}

impl FaceData {
    /// Creates a face with no boundary yet.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            edge: None,
            normal: Vector3::zeros(),
        }
    }
}
