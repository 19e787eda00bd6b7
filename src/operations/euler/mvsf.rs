use crate::error::Result;
use crate::math::Point3;
use crate::topology::{FaceId, Mesh, VertexId};

/// MVSF — Make Vertex, Shell, Face.
///
/// Bootstraps a new shell: one isolated vertex and one face with an empty
/// boundary. The empty boundary is the legal starting state before MEV
/// grows the shell.
pub struct Mvsf {
    position: Point3,
}

impl Mvsf {
    /// Creates a new `Mvsf` operation.
    #[must_use]
    pub fn new(position: Point3) -> Self {
        Self { position }
    }

    /// Executes the operation. Legal on an empty mesh or alongside
    /// existing shells.
    ///
    /// Deltas: vertices +1, faces +1.
    ///
    /// # Errors
    ///
    /// Infallible today; returns `Result` like every operator so call
    /// sites compose uniformly.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<(VertexId, FaceId)> {
        let vertex = mesh.add_vertex(self.position);
        let face = mesh.add_face();
        Ok((vertex, face))
    }
}
