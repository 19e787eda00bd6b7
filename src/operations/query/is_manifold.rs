use slotmap::SecondaryMap;

use crate::error::Result;
use crate::topology::{Mesh, VertexId};

use super::IncidentEdges;

/// The strict 2-manifold predicate.
///
/// Every edge with both slots occupied must separate two distinct faces
/// (a spur is not manifold), and every vertex's ring walk must close into
/// a single cycle covering all of its incident edges (a bow-tie vertex
/// closes early and fails). Non-manifold configurations are reported, not
/// repaired.
#[derive(Default)]
pub struct IsManifold {}

impl IsManifold {
    /// Creates a new `IsManifold` query.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Executes the predicate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::KernelError::Inconsistency`] when a ring
    /// walk uncovers corruption rather than a clean non-manifold shape.
    pub fn execute(&self, mesh: &Mesh) -> Result<bool> {
        for e in mesh.edges() {
            let data = mesh.edge(e)?;
            if let (Some(a), Some(b)) = (data.f1, data.f2) {
                if a == b {
                    return Ok(false);
                }
            }
        }

        let mut degrees: SecondaryMap<VertexId, usize> = SecondaryMap::new();
        for e in mesh.edges() {
            let data = mesh.edge(e)?;
            for v in [data.v1, data.v2] {
                let count = degrees.get(v).copied().unwrap_or(0);
                degrees.insert(v, count + 1);
            }
        }

        for v in mesh.vertices() {
            let degree = degrees.get(v).copied().unwrap_or(0);
            let ring = IncidentEdges::new(v).execute(mesh)?;
            if ring.len() != degree {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
