use crate::error::{KernelError, Result};
use crate::topology::{FaceId, Mesh};

/// KFMRH — Kill Face, Make Ring Hole.
///
/// Dissolves an inner face so its boundary loop becomes a second (ring)
/// loop of the outer face. The only operator that changes genus.
pub struct Kfmrh {
    hole: FaceId,
    outer: FaceId,
}

impl Kfmrh {
    /// Creates a new `Kfmrh` operation.
    #[must_use]
    pub fn new(hole: FaceId, outer: FaceId) -> Self {
        Self { hole, outer }
    }

    /// Executes the operation. Every edge slot naming the hole face is
    /// rewritten to the outer face; the hole face is removed.
    ///
    /// Deltas: faces -1, genus +1.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::BadArgument`] if both handles name the same
    /// face, [`KernelError::StaleHandle`] for dead faces, and
    /// [`KernelError::TopologyViolation`] if the two faces share an edge
    /// (the hole must be disjoint from the outer boundary).
    pub fn execute(&self, mesh: &mut Mesh) -> Result<()> {
        if self.hole == self.outer {
            return Err(KernelError::BadArgument(
                "hole and outer face must be distinct".into(),
            ));
        }
        mesh.face(self.hole)?;
        mesh.face(self.outer)?;

        for e in mesh.edges() {
            let data = mesh.edge(e)?;
            let slots = (data.f1, data.f2);
            if slots == (Some(self.hole), Some(self.outer))
                || slots == (Some(self.outer), Some(self.hole))
            {
                return Err(KernelError::TopologyViolation(
                    "hole face shares an edge with the outer face".into(),
                ));
            }
        }

        mesh.replace_face_refs(self.hole, Some(self.outer));
        mesh.remove_face(self.hole);
        mesh.refresh_normal(self.outer)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeCube;
    use crate::operations::query::FaceBoundary;

    /// A cube's top and bottom faces are edge-disjoint; absorbing one
    /// into the other drops the face count and leaves every edge
    /// two-sided.
    #[test]
    fn absorbing_an_opposite_face_makes_a_ring() {
        let mut mesh = Mesh::new();
        MakeCube::new(2.0).execute(&mut mesh).unwrap();
        // Creation order: the seed face ends as the top, the first split
        // face is the bottom; they are edge-disjoint opposites.
        let faces = mesh.faces();
        let top = faces[0];
        let bottom = faces[1];

        Kfmrh::new(top, bottom).execute(&mut mesh).unwrap();

        assert!(mesh.face(top).is_err());

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.edge_count(), 12);
        assert_eq!(mesh.face_count(), 5);

        // Eight edge slots now reference the ringed face: its own quad
        // plus the absorbed loop.
        let mut slots = 0;
        for e in mesh.edges() {
            let data = mesh.edge(e).unwrap();
            assert!(data.f1.is_some());
            assert!(data.f2.is_some());
            if data.f1 == Some(bottom) {
                slots += 1;
            }
            if data.f2 == Some(bottom) {
                slots += 1;
            }
        }
        assert_eq!(slots, 8);

        // The walk from the face's handle still closes over its own loop.
        assert_eq!(FaceBoundary::new(bottom).execute(&mesh).unwrap().len(), 4);
    }

    #[test]
    fn same_face_is_a_bad_argument() {
        let mut mesh = Mesh::new();
        MakeCube::new(1.0).execute(&mut mesh).unwrap();
        let f = mesh.faces()[0];
        let result = Kfmrh::new(f, f).execute(&mut mesh);
        assert!(matches!(result, Err(KernelError::BadArgument(_))));
        assert_eq!(mesh.face_count(), 6);
    }

    #[test]
    fn adjacent_faces_are_a_topology_violation() {
        let mut mesh = Mesh::new();
        MakeCube::new(1.0).execute(&mut mesh).unwrap();
        let faces = mesh.faces();
        // The top face and any side face share a top-ring edge.
        let result = Kfmrh::new(faces[0], faces[2]).execute(&mut mesh);
        assert!(matches!(result, Err(KernelError::TopologyViolation(_))));
        assert_eq!(mesh.face_count(), 6);
    }
}
