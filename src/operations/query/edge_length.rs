use crate::error::Result;
use crate::topology::{EdgeId, Mesh};

/// Euclidean length of an edge.
pub struct EdgeLength {
    edge: EdgeId,
}

impl EdgeLength {
    /// Creates a new `EdgeLength` query.
    #[must_use]
    pub fn new(edge: EdgeId) -> Self {
        Self { edge }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::KernelError::StaleHandle`] if the edge or
    /// an endpoint is dead.
    pub fn execute(&self, mesh: &Mesh) -> Result<f64> {
        let data = mesh.edge(self.edge)?;
        let a = mesh.vertex(data.v1)?.point;
        let b = mesh.vertex(data.v2)?.point;
        Ok((b - a).norm())
    }
}
