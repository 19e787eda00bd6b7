//! Euler operators: the only entry points that create or destroy
//! topological entities.
//!
//! Each operator is atomic (it validates before its first mutation) and
//! changes the vertex, edge, and face counts by fixed deltas, preserving
//! the Euler-Poincare relationship for the topology class it targets.

mod kef;
mod kfmrh;
mod mef;
mod mev;
mod mvsf;

pub use kef::{Kef, KefOutcome};
pub use kfmrh::Kfmrh;
pub use mef::Mef;
pub use mev::Mev;
pub use mvsf::Mvsf;
