use crate::error::{KernelError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::euler::{Mef, Mev, Mvsf};
use crate::topology::{Mesh, VertexId};

/// Creates an axis-aligned cube centered at the origin, built purely from
/// Euler operators.
///
/// The construction grows a closed shell: bottom ring and bottom face,
/// one vertical spur per corner, then four side chords. The seed face is
/// whittled down until it remains as the top.
pub struct MakeCube {
    side: f64,
}

impl MakeCube {
    /// Creates a new `MakeCube` operation.
    #[must_use]
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    /// Executes the operation: 8 vertices, 12 edges, 6 faces, closed and
    /// manifold, with outward axis-aligned normals.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::BadArgument`] for a degenerate side length.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<()> {
        if self.side < TOLERANCE {
            return Err(KernelError::BadArgument(
                "cube side must be positive".into(),
            ));
        }
        let h = self.side / 2.0;

        // Bottom ring, counter-clockwise viewed from above.
        let bottom = [
            Point3::new(-h, -h, -h),
            Point3::new(h, -h, -h),
            Point3::new(h, h, -h),
            Point3::new(-h, h, -h),
        ];
        let lift = Vector3::new(0.0, 0.0, self.side);

        let (v0, face) = Mvsf::new(bottom[0]).execute(mesh)?;
        let mut ring: Vec<VertexId> = vec![v0];
        for corner in &bottom[1..] {
            let prev = ring[ring.len() - 1];
            let e = Mev::new(prev, *corner, face).execute(mesh)?;
            ring.push(mesh.edge(e)?.v2);
        }
        // Closing the ring splits off the bottom face (downward normal);
        // the seed face keeps the upward side and stays the working face.
        Mef::new(ring[3], ring[0], face).execute(mesh)?;

        // One vertical spur per corner.
        let mut tops: Vec<VertexId> = Vec::with_capacity(4);
        for (i, corner) in bottom.iter().enumerate() {
            let e = Mev::new(ring[i], *corner + lift, face).execute(mesh)?;
            tops.push(mesh.edge(e)?.v2);
        }

        // Four side chords; the last leaves the seed face as the top.
        for i in 0..4 {
            Mef::new(tops[i], tops[(i + 1) % 4], face).execute(mesh)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::{FaceArea, FaceVertices, IncidentEdges, IsManifold, Validate};

    /// cube(2.0): exact counts, manifoldness, per-face area, and
    /// axis-aligned unit normals.
    #[test]
    fn cube_counts_and_geometry() {
        let mut mesh = Mesh::new();
        MakeCube::new(2.0).execute(&mut mesh).unwrap();

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.edge_count(), 12);
        assert_eq!(mesh.face_count(), 6);
        Validate::new().execute(&mesh).unwrap();
        assert!(IsManifold::new().execute(&mesh).unwrap());

        for f in mesh.faces() {
            let area = FaceArea::new(f).execute(&mesh).unwrap();
            assert!((area - 4.0).abs() < 1e-9);

            let n = mesh.face(f).unwrap().normal;
            assert!((n.norm() - 1.0).abs() < 1e-9);
            let axis_aligned = [n.x.abs(), n.y.abs(), n.z.abs()]
                .iter()
                .filter(|c| (**c - 1.0).abs() < 1e-9)
                .count();
            assert_eq!(axis_aligned, 1);
        }
    }

    #[test]
    fn cube_normals_point_outward() {
        let mut mesh = Mesh::new();
        MakeCube::new(2.0).execute(&mut mesh).unwrap();

        for f in mesh.faces() {
            let verts = FaceVertices::new(f).execute(&mesh).unwrap();
            assert_eq!(verts.len(), 4);
            let mut centroid = Vector3::zeros();
            for v in &verts {
                centroid += mesh.vertex(*v).unwrap().point.coords;
            }
            centroid /= verts.len() as f64;
            // The cube is centered at the origin, so the face centroid
            // points outward from the solid's center.
            let n = mesh.face(f).unwrap().normal;
            assert!(n.dot(&centroid) > 0.0);
        }
    }

    #[test]
    fn every_cube_edge_separates_two_faces() {
        let mut mesh = Mesh::new();
        MakeCube::new(1.0).execute(&mut mesh).unwrap();
        for e in mesh.edges() {
            let data = mesh.edge(e).unwrap();
            assert!(data.f1.is_some());
            assert!(data.f2.is_some());
            assert_ne!(data.f1, data.f2);
        }
    }

    #[test]
    fn every_cube_vertex_has_degree_three() {
        let mut mesh = Mesh::new();
        MakeCube::new(1.0).execute(&mut mesh).unwrap();
        for v in mesh.vertices() {
            assert_eq!(IncidentEdges::new(v).execute(&mesh).unwrap().len(), 3);
        }
    }

    #[test]
    fn degenerate_side_is_rejected() {
        let mut mesh = Mesh::new();
        assert!(matches!(
            MakeCube::new(-1.0).execute(&mut mesh),
            Err(KernelError::BadArgument(_))
        ));
        assert_eq!(mesh.vertex_count(), 0);
    }
}
