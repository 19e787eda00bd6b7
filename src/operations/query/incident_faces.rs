use crate::error::Result;
use crate::topology::{FaceId, Mesh, VertexId};

use super::IncidentEdges;

/// Collects the faces around a vertex, deduplicated, in first-seen order
/// along the edge ring.
pub struct IncidentFaces {
    vertex: VertexId,
}

impl IncidentFaces {
    /// Creates a new `IncidentFaces` query.
    #[must_use]
    pub fn new(vertex: VertexId) -> Self {
        Self { vertex }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Propagates the failures of [`IncidentEdges`].
    pub fn execute(&self, mesh: &Mesh) -> Result<Vec<FaceId>> {
        let mut faces = Vec::new();
        for e in IncidentEdges::new(self.vertex).execute(mesh)? {
            let data = mesh.edge(e)?;
            for slot in [data.f1, data.f2] {
                if let Some(f) = slot {
                    if !faces.contains(&f) {
                        faces.push(f);
                    }
                }
            }
        }
        Ok(faces)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeCube;
    use crate::operations::euler::{Mef, Mev, Mvsf};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn triangle_corner_sees_both_faces() {
        let mut mesh = Mesh::new();
        let (v1, face) = Mvsf::new(p(0.0, 0.0, 0.0)).execute(&mut mesh).unwrap();
        let e1 = Mev::new(v1, p(1.0, 0.0, 0.0), face).execute(&mut mesh).unwrap();
        let v2 = mesh.edge(e1).unwrap().v2;
        let e2 = Mev::new(v2, p(0.5, 1.0, 0.0), face).execute(&mut mesh).unwrap();
        let v3 = mesh.edge(e2).unwrap().v2;
        let e3 = Mef::new(v3, v1, face).execute(&mut mesh).unwrap();
        let other = mesh.edge(e3).unwrap().f2.unwrap();

        let mut faces = IncidentFaces::new(v1).execute(&mesh).unwrap();
        faces.sort();
        let mut expected = vec![face, other];
        expected.sort();
        assert_eq!(faces, expected);
    }

    #[test]
    fn cube_corner_sees_three_faces() {
        let mut mesh = Mesh::new();
        MakeCube::new(1.0).execute(&mut mesh).unwrap();
        for v in mesh.vertices() {
            assert_eq!(IncidentFaces::new(v).execute(&mesh).unwrap().len(), 3);
        }
    }

    #[test]
    fn spur_sees_one_face() {
        let mut mesh = Mesh::new();
        let (v, face) = Mvsf::new(p(0.0, 0.0, 0.0)).execute(&mut mesh).unwrap();
        Mev::new(v, p(1.0, 0.0, 0.0), face).execute(&mut mesh).unwrap();
        assert_eq!(IncidentFaces::new(v).execute(&mesh).unwrap(), vec![face]);
    }
}
