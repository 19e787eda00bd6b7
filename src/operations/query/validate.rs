use crate::error::{EntityKind, KernelError, Result};
use crate::topology::walk;
use crate::topology::Mesh;

/// Structural validation of the whole mesh.
///
/// A read-only O(V + E + F) pass over the kernel invariants: referential
/// closure of every stored handle, endpoint consistency, and closure of
/// every face's boundary walk in both directions. Intended for test
/// suites and debug builds; it reports the first offender and never
/// repairs anything.
#[derive(Default)]
pub struct Validate {}

impl Validate {
    /// Creates a new `Validate` query.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Executes the validation.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::Inconsistency`] naming the first offending
    /// entity and the invariant it breaks.
    pub fn execute(&self, mesh: &Mesh) -> Result<()> {
        self.check_vertices(mesh)?;
        self.check_edges(mesh)?;
        self.check_faces(mesh)
    }

    fn check_vertices(&self, mesh: &Mesh) -> Result<()> {
        for v in mesh.vertices() {
            let data = mesh.vertex(v)?;
            if let Some(e) = data.edge {
                let Ok(edge) = mesh.edge(e) else {
                    return Err(self.broken(EntityKind::Vertex, data.id, "incident edge is dead"));
                };
                if !edge.has_endpoint(v) {
                    return Err(self.broken(
                        EntityKind::Vertex,
                        data.id,
                        "vertex is not an endpoint of its incident edge",
                    ));
                }
            }
        }
        Ok(())
    }

    fn check_edges(&self, mesh: &Mesh) -> Result<()> {
        for e in mesh.edges() {
            let data = mesh.edge(e)?;
            if mesh.vertex(data.v1).is_err() || mesh.vertex(data.v2).is_err() {
                return Err(self.broken(EntityKind::Edge, data.id, "endpoint vertex is dead"));
            }
            if data.v1 == data.v2 {
                return Err(self.broken(EntityKind::Edge, data.id, "edge endpoints coincide"));
            }
            for slot in [data.f1, data.f2] {
                if let Some(f) = slot {
                    if mesh.face(f).is_err() {
                        return Err(self.broken(EntityKind::Edge, data.id, "face slot is dead"));
                    }
                }
            }
            for wing in [data.f1_prev, data.f1_next, data.f2_prev, data.f2_next] {
                if mesh.edge(wing).is_err() {
                    return Err(self.broken(EntityKind::Edge, data.id, "wing edge is dead"));
                }
            }
        }
        Ok(())
    }

    fn check_faces(&self, mesh: &Mesh) -> Result<()> {
        for f in mesh.faces() {
            let cycle = walk::walk_face(mesh, f)?;
            let n = cycle.len();
            for i in 0..n {
                let next = cycle[(i + 1) % n];
                if walk::prev_use(mesh, f, next)? != cycle[i] {
                    return Err(self.broken(
                        EntityKind::Face,
                        mesh.face(f)?.id,
                        "forward and reverse boundary walks disagree",
                    ));
                }
            }
        }
        Ok(())
    }

    fn broken(&self, kind: EntityKind, id: u64, detail: &str) -> KernelError {
        KernelError::Inconsistency {
            kind,
            id,
            detail: detail.to_string(),
        }
    }
}
