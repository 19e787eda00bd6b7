pub mod edge;
pub mod face;
pub(crate) mod walk;
pub mod vertex;

pub use edge::{EdgeData, EdgeId, Side};
pub use face::{FaceData, FaceId};
pub use vertex::{VertexData, VertexId};

use slotmap::SlotMap;

use crate::error::{EntityKind, KernelError, Result};
use crate::math::{polygon_3d, Point3};

/// Central arena that owns all topological entities of one model.
///
/// Entities reference each other via typed ids (generational indices),
/// avoiding self-referential structures and enabling safe mutation. A
/// mesh is a single-owner resource: entities are created and destroyed
/// only by the Euler operators, and dropping the mesh reclaims everything.
///
/// Besides its slotmap key, every entity carries a numeric id assigned
/// from a per-kind counter starting at 1. Numeric ids are never reused
/// within a mesh's lifetime, so external systems may cache them.
#[derive(Debug)]
pub struct Mesh {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    faces: SlotMap<FaceId, FaceData>,
    next_vertex_id: u64,
    next_edge_id: u64,
    next_face_id: u64,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates a new, empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: SlotMap::with_key(),
            edges: SlotMap::with_key(),
            faces: SlotMap::with_key(),
            next_vertex_id: 1,
            next_edge_id: 1,
            next_face_id: 1,
        }
    }

    // --- Vertex access ---

    /// Returns a reference to the vertex data.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::StaleHandle`] if the vertex no longer exists.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData> {
        self.vertices.get(id).ok_or(KernelError::StaleHandle {
            kind: EntityKind::Vertex,
        })
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData> {
        self.vertices.get_mut(id).ok_or(KernelError::StaleHandle {
            kind: EntityKind::Vertex,
        })
    }

    /// Moves a vertex without topological side effects.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::StaleHandle`] if the vertex no longer exists.
    pub fn set_position(&mut self, id: VertexId, point: Point3) -> Result<()> {
        self.vertex_mut(id)?.point = point;
        Ok(())
    }

    // --- Edge access ---

    /// Returns a reference to the edge data.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::StaleHandle`] if the edge no longer exists.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData> {
        self.edges.get(id).ok_or(KernelError::StaleHandle {
            kind: EntityKind::Edge,
        })
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> Result<&mut EdgeData> {
        self.edges.get_mut(id).ok_or(KernelError::StaleHandle {
            kind: EntityKind::Edge,
        })
    }

    // --- Face access ---

    /// Returns a reference to the face data.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::StaleHandle`] if the face no longer exists.
    pub fn face(&self, id: FaceId) -> Result<&FaceData> {
        self.faces.get(id).ok_or(KernelError::StaleHandle {
            kind: EntityKind::Face,
        })
    }

    pub(crate) fn face_mut(&mut self, id: FaceId) -> Result<&mut FaceData> {
        self.faces.get_mut(id).ok_or(KernelError::StaleHandle {
            kind: EntityKind::Face,
        })
    }

    // --- Counts ---

    /// Number of live vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of live edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of live faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    // --- Iteration, in creation order ---

    /// All live vertex handles, ordered by creation.
    #[must_use]
    pub fn vertices(&self) -> Vec<VertexId> {
        let mut keys: Vec<VertexId> = self.vertices.keys().collect();
        keys.sort_by_key(|k| self.vertices[*k].id);
        keys
    }

    /// All live edge handles, ordered by creation.
    #[must_use]
    pub fn edges(&self) -> Vec<EdgeId> {
        let mut keys: Vec<EdgeId> = self.edges.keys().collect();
        keys.sort_by_key(|k| self.edges[*k].id);
        keys
    }

    /// All live face handles, ordered by creation.
    #[must_use]
    pub fn faces(&self) -> Vec<FaceId> {
        let mut keys: Vec<FaceId> = self.faces.keys().collect();
        keys.sort_by_key(|k| self.faces[*k].id);
        keys
    }

    // --- Lookup by numeric id ---

    /// Finds the live vertex carrying the given numeric id.
    #[must_use]
    pub fn find_vertex_by_id(&self, id: u64) -> Option<VertexId> {
        self.vertices.iter().find(|(_, v)| v.id == id).map(|(k, _)| k)
    }

    /// Finds the live edge carrying the given numeric id.
    #[must_use]
    pub fn find_edge_by_id(&self, id: u64) -> Option<EdgeId> {
        self.edges.iter().find(|(_, e)| e.id == id).map(|(k, _)| k)
    }

    /// Finds the live face carrying the given numeric id.
    #[must_use]
    pub fn find_face_by_id(&self, id: u64) -> Option<FaceId> {
        self.faces.iter().find(|(_, f)| f.id == id).map(|(k, _)| k)
    }

    // --- Entity lifecycle (Euler operators only) ---

    pub(crate) fn add_vertex(&mut self, point: Point3) -> VertexId {
        let id = self.next_vertex_id;
        self.next_vertex_id += 1;
        self.vertices.insert(VertexData::new(id, point))
    }

    /// Inserts an edge whose four wings initially point to itself.
    pub(crate) fn add_edge(
        &mut self,
        v1: VertexId,
        v2: VertexId,
        f1: Option<FaceId>,
        f2: Option<FaceId>,
    ) -> EdgeId {
        let id = self.next_edge_id;
        self.next_edge_id += 1;
        self.edges.insert_with_key(|k| EdgeData {
            id,
            v1,
            v2,
            f1,
            f2,
            f1_prev: k,
            f1_next: k,
            f2_prev: k,
            f2_next: k,
        })
    }

    pub(crate) fn add_face(&mut self) -> FaceId {
        let id = self.next_face_id;
        self.next_face_id += 1;
        self.faces.insert(FaceData::new(id))
    }

    pub(crate) fn remove_vertex(&mut self, id: VertexId) -> Option<VertexData> {
        self.vertices.remove(id)
    }

    pub(crate) fn remove_edge(&mut self, id: EdgeId) -> Option<EdgeData> {
        self.edges.remove(id)
    }

    pub(crate) fn remove_face(&mut self, id: FaceId) -> Option<FaceData> {
        self.faces.remove(id)
    }

    /// Rewrites every edge face slot naming `from` to `to`. Used by the
    /// operators that merge or dissolve faces; O(E).
    pub(crate) fn replace_face_refs(&mut self, from: FaceId, to: Option<FaceId>) {
        for edge in self.edges.values_mut() {
            if edge.f1 == Some(from) {
                edge.f1 = to;
            }
            if edge.f2 == Some(from) {
                edge.f2 = to;
            }
        }
    }

    // --- Derived state ---

    /// Recomputes a face's cached Newell normal from its boundary walk.
    ///
    /// Faces with no boundary, or whose walk cancels out, get the zero
    /// sentinel.
    pub(crate) fn refresh_normal(&mut self, f: FaceId) -> Result<()> {
        let points = walk::face_points(self, f)?;
        let normal = polygon_3d::newell_normal(&points);
        self.face_mut(f)?.normal = normal;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_mesh_has_zero_counts() {
        let mesh = Mesh::new();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.edge_count(), 0);
        assert_eq!(mesh.face_count(), 0);
        assert!(mesh.vertices().is_empty());
        assert!(mesh.edges().is_empty());
        assert!(mesh.faces().is_empty());
    }

    #[test]
    fn numeric_ids_start_at_one_and_increase() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        assert_eq!(mesh.vertex(a).unwrap().id, 1);
        assert_eq!(mesh.vertex(b).unwrap().id, 2);
        assert_eq!(mesh.vertices(), vec![a, b]);
    }

    #[test]
    fn numeric_ids_are_never_reused() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.remove_vertex(a);
        let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        assert_eq!(mesh.vertex(b).unwrap().id, 2);
        assert!(mesh.find_vertex_by_id(1).is_none());
        assert_eq!(mesh.find_vertex_by_id(2), Some(b));
    }

    #[test]
    fn stale_vertex_handle_is_rejected() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.remove_vertex(a);
        assert!(matches!(
            mesh.vertex(a),
            Err(KernelError::StaleHandle {
                kind: EntityKind::Vertex
            })
        ));
    }

    #[test]
    fn set_position_moves_vertex() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.set_position(a, Point3::new(3.0, 4.0, 5.0)).unwrap();
        let p = mesh.vertex(a).unwrap().point;
        assert_eq!((p.x, p.y, p.z), (3.0, 4.0, 5.0));
    }
}
