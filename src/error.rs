use thiserror::Error;

/// The entity kind named by an error, for offending-entity reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Vertex,
    Edge,
    Face,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Vertex => write!(f, "vertex"),
            EntityKind::Edge => write!(f, "edge"),
            EntityKind::Face => write!(f, "face"),
        }
    }
}

/// Top-level error type for the winged-edge kernel.
///
/// Every operator either completes and leaves the invariants holding, or
/// returns one of these and leaves the mesh untouched.
#[derive(Debug, Error)]
pub enum KernelError {
    /// A precondition on input values failed (identical endpoints,
    /// too few vertices for a face, mismatched winding, ...).
    #[error("bad argument: {0}")]
    BadArgument(String),

    /// A handle refers to an entity that no longer exists in the mesh.
    #[error("stale {kind} handle")]
    StaleHandle {
        /// Kind of the dead entity.
        kind: EntityKind,
    },

    /// An operator's adjacency preconditions are unmet (vertex not on the
    /// named face's boundary, KEF on a dangling spur, ...).
    #[error("topology violation: {0}")]
    TopologyViolation(String),

    /// A navigation or validation routine found a broken invariant.
    /// This indicates kernel corruption, not caller error.
    #[error("inconsistent topology at {kind} {id}: {detail}")]
    Inconsistency {
        /// Kind of the offending entity.
        kind: EntityKind,
        /// Numeric id of the offending entity.
        id: u64,
        /// Which invariant broke.
        detail: String,
    },
}

/// Convenience type alias for results using [`KernelError`].
pub type Result<T> = std::result::Result<T, KernelError>;
