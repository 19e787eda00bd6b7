use crate::error::Result;
use crate::topology::walk;
use crate::topology::{FaceId, Mesh, VertexId};

/// Collects the ordered boundary vertices of a face.
///
/// Each directed use contributes the vertex it starts from, so the list
/// follows the face's walk direction and has the same length as the
/// boundary cycle.
pub struct FaceVertices {
    face: FaceId,
}

impl FaceVertices {
    /// Creates a new `FaceVertices` query.
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
    pub fn execute(&self, mesh: &Mesh) -> Result<Vec<VertexId>> {
        let cycle = walk::walk_face(mesh, self.face)?;
        let mut vertices = Vec::with_capacity(cycle.len());
        for u in cycle {
            vertices.push(mesh.edge(u.edge)?.start(u.side));
        }
        Ok(vertices)
    }
}
