use crate::error::{KernelError, Result};
use crate::topology::walk;
use crate::topology::{EdgeData, EdgeId, FaceId, Mesh, Side};

/// What a KEF did: merged two faces or removed a boundary face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KefOutcome {
    /// The edge separated two faces; the second was merged into the
    /// returned survivor.
    Merged(FaceId),
    /// The edge bordered a single face; both edge and face were removed.
    /// The handle is stale and serves only for inspection of the id.
    Removed(FaceId),
}

/// KEF — Kill Edge, Face.
///
/// Removes an edge together with one face. For an interior edge the
/// second face is merged into the first; for an edge with a single
/// occupied face slot (a true boundary edge) the remaining face is
/// dissolved and its surviving edges become boundary edges. The inverse
/// of MEF, and of the MEV + MEF sequence respectively.
pub struct Kef {
    edge: EdgeId,
}

impl Kef {
    /// Creates a new `Kef` operation.
    #[must_use]
    pub fn new(edge: EdgeId) -> Self {
        Self { edge }
    }

    /// Executes the operation.
    ///
    /// Deltas: edges -1, faces -1.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::StaleHandle`] if the edge is dead and
    /// [`KernelError::TopologyViolation`] for a dangling spur (both slots
    /// naming the same face) or an edge bordering no face at all.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<KefOutcome> {
        let data = mesh.edge(self.edge)?.clone();
        match (data.f1, data.f2) {
            (Some(a), Some(b)) if a == b => Err(KernelError::TopologyViolation(
                "cannot kill a dangling spur; it borders a single face twice".into(),
            )),
            (Some(survivor), Some(merged)) => self.merge(mesh, &data, survivor, merged),
            (Some(face), None) => self.dissolve(mesh, &data, face, Side::F1),
            (None, Some(face)) => self.dissolve(mesh, &data, face, Side::F2),
            (None, None) => Err(KernelError::TopologyViolation(
                "edge borders no face".into(),
            )),
        }
    }

    /// Interior variant: `merged` is folded into `survivor`.
    fn merge(
        &self,
        mesh: &mut Mesh,
        data: &EdgeData,
        survivor: FaceId,
        merged: FaceId,
    ) -> Result<KefOutcome> {
        mesh.face(survivor)?;
        mesh.face(merged)?;

        // Neighboring uses around both endpoints, resolved before any
        // mutation so a corrupt mesh fails atomically.
        let incoming_a = walk::use_ending_at(mesh, Some(survivor), data.f1_prev, data.v1)?;
        let outgoing_b = walk::use_starting_at(mesh, Some(survivor), data.f1_next, data.v2)?;
        let incoming_b = walk::use_ending_at(mesh, Some(merged), data.f2_prev, data.v2)?;
        let outgoing_a = walk::use_starting_at(mesh, Some(merged), data.f2_next, data.v1)?;

        // Bridge the two cycles around each endpoint.
        mesh.edge_mut(incoming_a.edge)?.set_next(incoming_a.side, outgoing_a.edge);
        mesh.edge_mut(outgoing_a.edge)?.set_prev(outgoing_a.side, incoming_a.edge);
        mesh.edge_mut(incoming_b.edge)?.set_next(incoming_b.side, outgoing_b.edge);
        mesh.edge_mut(outgoing_b.edge)?.set_prev(outgoing_b.side, incoming_b.edge);

        mesh.replace_face_refs(merged, Some(survivor));

        if mesh.vertex(data.v1)?.edge == Some(self.edge) {
            mesh.vertex_mut(data.v1)?.edge = Some(incoming_a.edge);
        }
        if mesh.vertex(data.v2)?.edge == Some(self.edge) {
            mesh.vertex_mut(data.v2)?.edge = Some(incoming_b.edge);
        }
        if mesh.face(survivor)?.edge == Some(self.edge) {
            mesh.face_mut(survivor)?.edge = Some(outgoing_b.edge);
        }

        mesh.remove_edge(self.edge);
        mesh.remove_face(merged);
        mesh.refresh_normal(survivor)?;
        Ok(KefOutcome::Merged(survivor))
    }

    /// Boundary variant: the single face is dissolved with the edge, and
    /// its other edges lose that slot.
    fn dissolve(
        &self,
        mesh: &mut Mesh,
        data: &EdgeData,
        face: FaceId,
        present: Side,
    ) -> Result<KefOutcome> {
        mesh.face(face)?;
        let absent = present.other();

        // At each endpoint either stitch the neighbors together or, for a
        // valence-one endpoint, leave the vertex isolated.
        let v_start = data.start(present);
        let v_end = data.end(present);
        let start_stitch = if data.prev(present) == self.edge && data.next(absent) == self.edge {
            None
        } else {
            let incoming = walk::use_ending_at(mesh, Some(face), data.prev(present), v_start)?;
            let outgoing = walk::use_starting_at(mesh, None, data.next(absent), v_start)?;
            Some((incoming, outgoing))
        };
        let end_stitch = if data.next(present) == self.edge && data.prev(absent) == self.edge {
            None
        } else {
            let incoming = walk::use_ending_at(mesh, None, data.prev(absent), v_end)?;
            let outgoing = walk::use_starting_at(mesh, Some(face), data.next(present), v_end)?;
            Some((incoming, outgoing))
        };

        for (incoming, outgoing) in [start_stitch, end_stitch].into_iter().flatten() {
            mesh.edge_mut(incoming.edge)?.set_next(incoming.side, outgoing.edge);
            mesh.edge_mut(outgoing.edge)?.set_prev(outgoing.side, incoming.edge);
        }

        if mesh.vertex(v_start)?.edge == Some(self.edge) {
            mesh.vertex_mut(v_start)?.edge = start_stitch.map(|(incoming, _)| incoming.edge);
        }
        if mesh.vertex(v_end)?.edge == Some(self.edge) {
            mesh.vertex_mut(v_end)?.edge = end_stitch.map(|(_, outgoing)| outgoing.edge);
        }

        mesh.replace_face_refs(face, None);
        mesh.remove_edge(self.edge);
        mesh.remove_face(face);
        Ok(KefOutcome::Removed(face))
    }
}
