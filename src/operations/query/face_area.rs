use crate::error::Result;
use crate::math::polygon_3d;
use crate::topology::walk;
use crate::topology::{FaceId, Mesh};

/// Area of a face, by fan triangulation of its boundary walk.
pub struct FaceArea {
    face: FaceId,
}

impl FaceArea {
    /// Creates a new `FaceArea` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query. Faces with degenerate boundaries (including a
    /// pure spur chain, whose walk doubles back on itself) report 0.0.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::KernelError::StaleHandle`] for a dead face
    /// and [`crate::error::KernelError::Inconsistency`] if the walk does
    /// not close.
    pub fn execute(&self, mesh: &Mesh) -> Result<f64> {
        let points = walk::face_points(mesh, self.face)?;
        Ok(polygon_3d::fan_area(&points))
    }
}
