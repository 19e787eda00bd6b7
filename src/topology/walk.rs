//! Directed-use traversal of face boundaries and vertex rings.
//!
//! A face's boundary is a cycle of directed edge uses. Walking proceeds
//! through the `next` wing of the current side; the side of the following
//! edge is fixed by which of its endpoints the walk arrived at. All walks
//! are bounded and report an inconsistency instead of looping forever.

use crate::error::{EntityKind, KernelError, Result};
use crate::math::Point3;

use super::edge::{EdgeId, Side};
use super::face::FaceId;
use super::vertex::VertexId;
use super::Mesh;

/// One directed use of an edge within a boundary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EdgeUse {
    pub edge: EdgeId,
    pub side: Side,
}

impl EdgeUse {
    pub(crate) fn new(edge: EdgeId, side: Side) -> Self {
        Self { edge, side }
    }
}

fn inconsistent(mesh: &Mesh, e: EdgeId, detail: &str) -> KernelError {
    KernelError::Inconsistency {
        kind: EntityKind::Edge,
        id: mesh.edge(e).map(|d| d.id).unwrap_or(0),
        detail: detail.to_string(),
    }
}

/// The use of `f`'s boundary-edge handle that the face walk starts from.
///
/// Returns `None` for a face with no boundary yet.
pub(crate) fn start_use(mesh: &Mesh, f: FaceId) -> Result<Option<EdgeUse>> {
    let Some(e) = mesh.face(f)?.edge else {
        return Ok(None);
    };
    let data = mesh.edge(e)?;
    if data.f1 == Some(f) {
        Ok(Some(EdgeUse::new(e, Side::F1)))
    } else if data.f2 == Some(f) {
        Ok(Some(EdgeUse::new(e, Side::F2)))
    } else {
        Err(inconsistent(mesh, e, "face boundary edge does not border the face"))
    }
}

/// The use following `u` in the boundary cycle of face `f`.
pub(crate) fn next_use(mesh: &Mesh, f: FaceId, u: EdgeUse) -> Result<EdgeUse> {
    let data = mesh.edge(u.edge)?;
    let arrive = data.end(u.side);
    let next = data.next(u.side);
    let n = mesh
        .edge(next)
        .map_err(|_| inconsistent(mesh, u.edge, "wing refers to a dead edge"))?;
    if n.v1 == arrive && n.f1 == Some(f) {
        Ok(EdgeUse::new(next, Side::F1))
    } else if n.v2 == arrive && n.f2 == Some(f) {
        Ok(EdgeUse::new(next, Side::F2))
    } else {
        Err(inconsistent(mesh, next, "wing does not continue the boundary walk"))
    }
}

/// The use preceding `u` in the boundary cycle of face `f`.
pub(crate) fn prev_use(mesh: &Mesh, f: FaceId, u: EdgeUse) -> Result<EdgeUse> {
    let data = mesh.edge(u.edge)?;
    let depart = data.start(u.side);
    let prev = data.prev(u.side);
    let p = mesh
        .edge(prev)
        .map_err(|_| inconsistent(mesh, u.edge, "wing refers to a dead edge"))?;
    if p.v2 == depart && p.f1 == Some(f) {
        Ok(EdgeUse::new(prev, Side::F1))
    } else if p.v1 == depart && p.f2 == Some(f) {
        Ok(EdgeUse::new(prev, Side::F2))
    } else {
        Err(inconsistent(mesh, prev, "wing does not continue the reverse walk"))
    }
}

/// Collects the full boundary cycle of `f`, one entry per directed use.
///
/// A spur edge appears twice, once per direction. An empty vector means
/// the face has no boundary yet. The walk is bounded by the total number
/// of uses in the mesh; exceeding it, or revisiting a use before closing
/// the cycle, is an inconsistency.
pub(crate) fn walk_face(mesh: &Mesh, f: FaceId) -> Result<Vec<EdgeUse>> {
    let Some(start) = start_use(mesh, f)? else {
        return Ok(Vec::new());
    };
    let bound = mesh.edge_count() * 2 + 1;
    let mut cycle = Vec::new();
    let mut current = start;
    loop {
        if cycle.contains(&current) {
            return Err(inconsistent(
                mesh,
                current.edge,
                "boundary walk revisits a use before closing",
            ));
        }
        cycle.push(current);
        if cycle.len() > bound {
            return Err(inconsistent(mesh, current.edge, "boundary walk does not close"));
        }
        current = next_use(mesh, f, current)?;
        if current == start {
            return Ok(cycle);
        }
    }
}

/// Start-vertex positions of `f`'s boundary walk, in walk order.
pub(crate) fn face_points(mesh: &Mesh, f: FaceId) -> Result<Vec<Point3>> {
    let cycle = walk_face(mesh, f)?;
    let mut points = Vec::with_capacity(cycle.len());
    for u in cycle {
        let v = mesh.edge(u.edge)?.start(u.side);
        points.push(mesh.vertex(v)?.point);
    }
    Ok(points)
}

/// The use of edge `e` that ends at `v` on a side whose face slot is
/// `face` (`None` matches an unoccupied slot).
pub(crate) fn use_ending_at(
    mesh: &Mesh,
    face: Option<FaceId>,
    e: EdgeId,
    v: VertexId,
) -> Result<EdgeUse> {
    let data = mesh.edge(e)?;
    if data.v2 == v && data.f1 == face {
        Ok(EdgeUse::new(e, Side::F1))
    } else if data.v1 == v && data.f2 == face {
        Ok(EdgeUse::new(e, Side::F2))
    } else {
        Err(inconsistent(mesh, e, "no matching use ends at the vertex"))
    }
}

/// The use of edge `e` that starts at `v` on a side whose face slot is
/// `face`.
pub(crate) fn use_starting_at(
    mesh: &Mesh,
    face: Option<FaceId>,
    e: EdgeId,
    v: VertexId,
) -> Result<EdgeUse> {
    let data = mesh.edge(e)?;
    if data.v1 == v && data.f1 == face {
        Ok(EdgeUse::new(e, Side::F1))
    } else if data.v2 == v && data.f2 == face {
        Ok(EdgeUse::new(e, Side::F2))
    } else {
        Err(inconsistent(mesh, e, "no matching use starts at the vertex"))
    }
}

/// The edge following `e` in the ring of edges around `v`.
///
/// The face whose walk enters `v` through `e` leaves `v` through exactly
/// one other use; its edge is the ring successor. This visits every edge
/// incident to a disk vertex exactly once per revolution.
pub(crate) fn ring_next(mesh: &Mesh, v: VertexId, e: EdgeId) -> Result<EdgeId> {
    let data = mesh.edge(e)?;
    if data.v1 == v {
        Ok(data.f2_next)
    } else if data.v2 == v {
        Ok(data.f1_next)
    } else {
        Err(inconsistent(mesh, e, "ring edge is not incident to the vertex"))
    }
}
