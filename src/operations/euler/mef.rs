use crate::error::{KernelError, Result};
use crate::topology::walk::{self, EdgeUse};
use crate::topology::{EdgeId, FaceId, Mesh, VertexId};

/// MEF — Make Edge, Face.
///
/// Splits `face` with a chord between two vertices on its boundary. The
/// chord's `f1` slot keeps the host face, its `f2` slot carries the new
/// face, and the boundary uses between the two split corners move to the
/// new face.
pub struct Mef {
    v1: VertexId,
    v2: VertexId,
    face: FaceId,
}

impl Mef {
    /// Creates a new `Mef` operation.
    #[must_use]
    pub fn new(v1: VertexId, v2: VertexId, face: FaceId) -> Self {
        Self { v1, v2, face }
    }

    /// Executes the operation, returning the chord edge. The new face is
    /// the chord's `f2` slot.
    ///
    /// The split is canonical: walking from the face's boundary-edge
    /// handle, the first corner found at each endpoint is used, and the
    /// sub-cycle reached first from the handle stays with the host face.
    ///
    /// Deltas: edges +1, faces +1.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::BadArgument`] for identical endpoints,
    /// [`KernelError::StaleHandle`] for dead inputs, and
    /// [`KernelError::TopologyViolation`] if either vertex is missing
    /// from the face's boundary walk.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<EdgeId> {
        if self.v1 == self.v2 {
            return Err(KernelError::BadArgument(
                "chord endpoints must be distinct".into(),
            ));
        }
        mesh.vertex(self.v1)?;
        mesh.vertex(self.v2)?;
        mesh.face(self.face)?;

        let cycle = walk::walk_face(mesh, self.face)?;
        if cycle.is_empty() {
            return Err(KernelError::TopologyViolation(
                "face has no boundary to split".into(),
            ));
        }
        let n = cycle.len();
        let idx_a = self.corner_index(mesh, &cycle, self.v1)?;
        let idx_b = self.corner_index(mesh, &cycle, self.v2)?;

        // Corners at both endpoints: the use arriving and the use leaving.
        let outgoing_a = cycle[idx_a];
        let incoming_a = cycle[(idx_a + n - 1) % n];
        let outgoing_b = cycle[idx_b];
        let incoming_b = cycle[(idx_b + n - 1) % n];

        // The uses from a's outgoing corner up to b's incoming one form
        // the sub-cycle handed to the new face.
        let mut arc: Vec<EdgeUse> = Vec::new();
        let mut i = idx_a;
        while i != idx_b {
            arc.push(cycle[i]);
            i = (i + 1) % n;
        }

        let new_face = mesh.add_face();
        let e = mesh.add_edge(self.v1, self.v2, Some(self.face), Some(new_face));

        {
            let data = mesh.edge_mut(e)?;
            data.f1_prev = incoming_a.edge;
            data.f1_next = outgoing_b.edge;
            data.f2_prev = incoming_b.edge;
            data.f2_next = outgoing_a.edge;
        }
        mesh.edge_mut(incoming_a.edge)?.set_next(incoming_a.side, e);
        mesh.edge_mut(outgoing_b.edge)?.set_prev(outgoing_b.side, e);
        mesh.edge_mut(incoming_b.edge)?.set_next(incoming_b.side, e);
        mesh.edge_mut(outgoing_a.edge)?.set_prev(outgoing_a.side, e);

        for u in arc {
            mesh.edge_mut(u.edge)?.set_face(u.side, Some(new_face));
        }

        mesh.face_mut(self.face)?.edge = Some(e);
        mesh.face_mut(new_face)?.edge = Some(e);
        mesh.refresh_normal(self.face)?;
        mesh.refresh_normal(new_face)?;
        Ok(e)
    }

    fn corner_index(&self, mesh: &Mesh, cycle: &[EdgeUse], v: VertexId) -> Result<usize> {
        cycle
            .iter()
            .position(|u| mesh.edge(u.edge).map_or(false, |d| d.start(u.side) == v))
            .ok_or_else(|| {
                KernelError::TopologyViolation("vertex is not on the face boundary".into())
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::euler::{Mev, Mvsf};
    use crate::operations::query::{FaceBoundary, FaceVertices, Validate};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    /// MVSF + two MEVs + a closing MEF build a triangle with two faces.
    #[test]
    fn closing_a_triangle_splits_the_face() {
        let mut mesh = Mesh::new();
        let (v1, face) = Mvsf::new(p(0.0, 0.0, 0.0)).execute(&mut mesh).unwrap();
        let e1 = Mev::new(v1, p(1.0, 0.0, 0.0), face).execute(&mut mesh).unwrap();
        let v2 = mesh.edge(e1).unwrap().v2;
        let e2 = Mev::new(v2, p(0.5, 1.0, 0.0), face).execute(&mut mesh).unwrap();
        let v3 = mesh.edge(e2).unwrap().v2;

        let e3 = Mef::new(v3, v1, face).execute(&mut mesh).unwrap();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.edge_count(), 3);
        assert_eq!(mesh.face_count(), 2);
        Validate::new().execute(&mesh).unwrap();

        let chord = mesh.edge(e3).unwrap();
        assert_eq!(chord.v1, v3);
        assert_eq!(chord.v2, v1);
        assert!(chord.f1.is_some());
        assert!(chord.f2.is_some());
        assert_ne!(chord.f1, chord.f2);
    }

    /// Both faces of the triangle walk three edges, in opposite senses.
    #[test]
    fn split_faces_walk_opposite_directions() {
        let mut mesh = Mesh::new();
        let (v1, face) = Mvsf::new(p(0.0, 0.0, 0.0)).execute(&mut mesh).unwrap();
        let e1 = Mev::new(v1, p(1.0, 0.0, 0.0), face).execute(&mut mesh).unwrap();
        let v2 = mesh.edge(e1).unwrap().v2;
        let e2 = Mev::new(v2, p(0.5, 1.0, 0.0), face).execute(&mut mesh).unwrap();
        let v3 = mesh.edge(e2).unwrap().v2;
        let e3 = Mef::new(v3, v1, face).execute(&mut mesh).unwrap();

        let other = mesh.edge(e3).unwrap().f2.unwrap();
        let kept = FaceVertices::new(face).execute(&mesh).unwrap();
        let split = FaceVertices::new(other).execute(&mesh).unwrap();
        assert_eq!(kept.len(), 3);
        assert_eq!(split.len(), 3);

        // Same vertex set, opposite cyclic order.
        assert_eq!(kept, vec![v3, v1, v2]);
        assert_eq!(split, vec![v1, v3, v2]);

        // Every edge appears once in each walk.
        let kept_edges = FaceBoundary::new(face).execute(&mesh).unwrap();
        let split_edges = FaceBoundary::new(other).execute(&mesh).unwrap();
        for e in [e1, e2, e3] {
            assert_eq!(kept_edges.iter().filter(|x| **x == e).count(), 1);
            assert_eq!(split_edges.iter().filter(|x| **x == e).count(), 1);
        }
    }

    #[test]
    fn identical_endpoints_are_a_bad_argument() {
        let mut mesh = Mesh::new();
        let (v1, face) = Mvsf::new(p(0.0, 0.0, 0.0)).execute(&mut mesh).unwrap();
        Mev::new(v1, p(1.0, 0.0, 0.0), face).execute(&mut mesh).unwrap();

        let result = Mef::new(v1, v1, face).execute(&mut mesh);
        assert!(matches!(result, Err(KernelError::BadArgument(_))));
        assert_eq!(mesh.edge_count(), 1);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn vertex_off_the_face_is_a_topology_violation() {
        let mut mesh = Mesh::new();
        let (v1, face) = Mvsf::new(p(0.0, 0.0, 0.0)).execute(&mut mesh).unwrap();
        let e1 = Mev::new(v1, p(1.0, 0.0, 0.0), face).execute(&mut mesh).unwrap();
        let v2 = mesh.edge(e1).unwrap().v2;
        let (v_other, _) = Mvsf::new(p(9.0, 9.0, 9.0)).execute(&mut mesh).unwrap();

        let result = Mef::new(v2, v_other, face).execute(&mut mesh);
        assert!(matches!(result, Err(KernelError::TopologyViolation(_))));
        assert_eq!(mesh.edge_count(), 1);
        assert_eq!(mesh.face_count(), 2);
    }

    /// Chords can subdivide repeatedly: a quad plus its diagonal.
    #[test]
    fn diagonal_subdivides_a_quad() {
        let mut mesh = Mesh::new();
        let (v0, face) = Mvsf::new(p(0.0, 0.0, 0.0)).execute(&mut mesh).unwrap();
        let e1 = Mev::new(v0, p(1.0, 0.0, 0.0), face).execute(&mut mesh).unwrap();
        let v1 = mesh.edge(e1).unwrap().v2;
        let e2 = Mev::new(v1, p(1.0, 1.0, 0.0), face).execute(&mut mesh).unwrap();
        let v2 = mesh.edge(e2).unwrap().v2;
        let e3 = Mev::new(v2, p(0.0, 1.0, 0.0), face).execute(&mut mesh).unwrap();
        let v3 = mesh.edge(e3).unwrap().v2;
        Mef::new(v3, v0, face).execute(&mut mesh).unwrap();

        let diag = Mef::new(v0, v2, face).execute(&mut mesh).unwrap();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.edge_count(), 5);
        assert_eq!(mesh.face_count(), 3);
        Validate::new().execute(&mesh).unwrap();

        let split = mesh.edge(diag).unwrap().f2.unwrap();
        assert_eq!(FaceVertices::new(face).execute(&mesh).unwrap().len(), 3);
        assert_eq!(FaceVertices::new(split).execute(&mesh).unwrap().len(), 3);
    }
}
