use crate::error::{KernelError, Result};
use crate::math::Point3;
use crate::topology::walk;
use crate::topology::{EdgeId, FaceId, Mesh, VertexId};

/// MEV — Make Edge, Vertex.
///
/// Extends the boundary of `face` with a dangling spur from `vertex` to a
/// new vertex at `position`. Both face slots of the new edge reference
/// `face`; the face's walk traverses the spur outbound then inbound.
pub struct Mev {
    vertex: VertexId,
    position: Point3,
    face: FaceId,
}

impl Mev {
    /// Creates a new `Mev` operation.
    #[must_use]
    pub fn new(vertex: VertexId, position: Point3, face: FaceId) -> Self {
        Self {
            vertex,
            position,
            face,
        }
    }

    /// Executes the operation, returning the new edge. The new vertex is
    /// the edge's `v2`.
    ///
    /// Deltas: vertices +1, edges +1.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::StaleHandle`] if the vertex or face is dead,
    /// and [`KernelError::TopologyViolation`] if the vertex is not on the
    /// face's boundary walk (an isolated vertex may only extend a face
    /// whose boundary is still empty).
    pub fn execute(&self, mesh: &mut Mesh) -> Result<EdgeId> {
        let anchored = mesh.vertex(self.vertex)?.edge.is_some();
        mesh.face(self.face)?;

        if !anchored {
            if mesh.face(self.face)?.edge.is_some() {
                return Err(KernelError::TopologyViolation(
                    "isolated vertex is not on the face boundary".into(),
                ));
            }
            let w = mesh.add_vertex(self.position);
            let e = mesh.add_edge(self.vertex, w, Some(self.face), Some(self.face));
            mesh.vertex_mut(self.vertex)?.edge = Some(e);
            mesh.vertex_mut(w)?.edge = Some(e);
            mesh.face_mut(self.face)?.edge = Some(e);
            mesh.refresh_normal(self.face)?;
            return Ok(e);
        }

        // Locate the corner of the face at the anchor vertex: the walk use
        // arriving there and the use leaving it. The spur is spliced in
        // between the two.
        let cycle = walk::walk_face(mesh, self.face)?;
        let n = cycle.len();
        let Some(idx) = cycle
            .iter()
            .position(|u| mesh.edge(u.edge).map_or(false, |d| d.start(u.side) == self.vertex))
        else {
            return Err(KernelError::TopologyViolation(
                "vertex is not on the face boundary".into(),
            ));
        };
        let outgoing = cycle[idx];
        let incoming = cycle[(idx + n - 1) % n];

        let w = mesh.add_vertex(self.position);
        let e = mesh.add_edge(self.vertex, w, Some(self.face), Some(self.face));

        // The spur's outbound use follows `incoming` and is followed by its
        // own inbound use, which rejoins the old cycle at `outgoing`.
        {
            let data = mesh.edge_mut(e)?;
            data.f1_prev = incoming.edge;
            data.f2_next = outgoing.edge;
        }
        mesh.edge_mut(incoming.edge)?.set_next(incoming.side, e);
        mesh.edge_mut(outgoing.edge)?.set_prev(outgoing.side, e);
        mesh.vertex_mut(w)?.edge = Some(e);
        mesh.refresh_normal(self.face)?;
        Ok(e)
    }
}
