use crate::error::{EntityKind, KernelError, Result};
use crate::topology::walk;
use crate::topology::{EdgeId, Mesh, VertexId};

/// Collects the ring of edges around a vertex, in rotation order.
pub struct IncidentEdges {
    vertex: VertexId,
}

impl IncidentEdges {
    /// Creates a new `IncidentEdges` query.
    #[must_use]
    pub fn new(vertex: VertexId) -> Self {
        Self { vertex }
    }

    /// Executes the query. An isolated vertex yields an empty ring.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::StaleHandle`] for a dead vertex and
    /// [`KernelError::Inconsistency`] if the ring revisits an edge
    /// before closing; the walk never loops forever.
    pub fn execute(&self, mesh: &Mesh) -> Result<Vec<EdgeId>> {
        let Some(start) = mesh.vertex(self.vertex)?.edge else {
            return Ok(Vec::new());
        };
        let bound = mesh.edge_count() + 1;
        let mut ring = Vec::new();
        let mut current = start;
        loop {
            if ring.contains(&current) || ring.len() > bound {
                return Err(KernelError::Inconsistency {
                    kind: EntityKind::Vertex,
                    id: mesh.vertex(self.vertex)?.id,
                    detail: "incident edge ring does not close".into(),
                });
            }
            ring.push(current);
            current = walk::ring_next(mesh, self.vertex, current)?;
            if current == start {
                return Ok(ring);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::euler::{Mef, Mev, Mvsf};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn isolated_vertex_has_no_ring() {
        let mut mesh = Mesh::new();
        let (v, _) = Mvsf::new(p(0.0, 0.0, 0.0)).execute(&mut mesh).unwrap();
        assert!(IncidentEdges::new(v).execute(&mesh).unwrap().is_empty());
    }

    #[test]
    fn spur_tip_has_one_edge() {
        let mut mesh = Mesh::new();
        let (v, face) = Mvsf::new(p(0.0, 0.0, 0.0)).execute(&mut mesh).unwrap();
        let e = Mev::new(v, p(1.0, 0.0, 0.0), face).execute(&mut mesh).unwrap();
        let w = mesh.edge(e).unwrap().v2;
        assert_eq!(IncidentEdges::new(w).execute(&mesh).unwrap(), vec![e]);
    }

    #[test]
    fn every_triangle_corner_sees_two_edges() {
        let mut mesh = Mesh::new();
        let (v1, face) = Mvsf::new(p(0.0, 0.0, 0.0)).execute(&mut mesh).unwrap();
        let e1 = Mev::new(v1, p(1.0, 0.0, 0.0), face).execute(&mut mesh).unwrap();
        let v2 = mesh.edge(e1).unwrap().v2;
        let e2 = Mev::new(v2, p(0.5, 1.0, 0.0), face).execute(&mut mesh).unwrap();
        let v3 = mesh.edge(e2).unwrap().v2;
        let e3 = Mef::new(v3, v1, face).execute(&mut mesh).unwrap();

        let mut ring = IncidentEdges::new(v1).execute(&mesh).unwrap();
        ring.sort();
        let mut expected = vec![e1, e3];
        expected.sort();
        assert_eq!(ring, expected);

        assert_eq!(IncidentEdges::new(v2).execute(&mesh).unwrap().len(), 2);
        assert_eq!(IncidentEdges::new(v3).execute(&mesh).unwrap().len(), 2);
    }

    #[test]
    fn stale_vertex_is_rejected() {
        let mut mesh = Mesh::new();
        let (v, _) = Mvsf::new(p(0.0, 0.0, 0.0)).execute(&mut mesh).unwrap();
        mesh.remove_vertex(v);
        assert!(matches!(
            IncidentEdges::new(v).execute(&mesh),
            Err(KernelError::StaleHandle { .. })
        ));
    }
}
