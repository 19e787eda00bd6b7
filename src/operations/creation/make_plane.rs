use crate::error::{KernelError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::operations::euler::{Mef, Mev, Mvsf};
use crate::topology::{FaceId, Mesh, VertexId};

/// Creates a rectangular quad in the XY plane, centered at the origin.
pub struct MakePlane {
    width: f64,
    height: f64,
}

impl MakePlane {
    /// Creates a new `MakePlane` operation.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Executes the operation, returning the quad face whose normal is
    /// `+Z`. Like every Euler-built disk, the mesh also holds the
    /// opposite-facing complement face.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::BadArgument`] for a degenerate extent.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<FaceId> {
        if self.width < TOLERANCE || self.height < TOLERANCE {
            return Err(KernelError::BadArgument(
                "plane extents must be positive".into(),
            ));
        }
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;

        // Counter-clockwise ring, viewed from +Z.
        let corners = [
            Point3::new(-hw, -hh, 0.0),
            Point3::new(hw, -hh, 0.0),
            Point3::new(hw, hh, 0.0),
            Point3::new(-hw, hh, 0.0),
        ];
        let (v0, face) = Mvsf::new(corners[0]).execute(mesh)?;
        let mut ring: Vec<VertexId> = vec![v0];
        for corner in &corners[1..] {
            let e = Mev::new(ring[ring.len() - 1], *corner, face).execute(mesh)?;
            ring.push(mesh.edge(e)?.v2);
        }
        Mef::new(ring[3], v0, face).execute(mesh)?;
        Ok(face)
    }
}
