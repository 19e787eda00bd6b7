use crate::error::Result;
use crate::topology::walk;
use crate::topology::{EdgeId, FaceId, Mesh};

/// Collects the ordered boundary cycle of a face.
///
/// The result lists one entry per directed use, so a spur edge appears
/// twice. A face with no boundary yet yields an empty cycle.
pub struct FaceBoundary {
    face: FaceId,
}

impl FaceBoundary {
    /// Creates a new `FaceBoundary` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::KernelError::StaleHandle`] for a dead face
    /// and [`crate::error::KernelError::Inconsistency`] if the walk does
    /// not close.
    pub fn execute(&self, mesh: &Mesh) -> Result<Vec<EdgeId>> {
        Ok(walk::walk_face(mesh, self.face)?
            .into_iter()
            .map(|u| u.edge)
            .collect())
    }
}
