use crate::error::{EntityKind, KernelError, Result};
use crate::math::Point3;
use crate::operations::euler::{Mef, Mev, Mvsf};
use crate::operations::query::{FaceBoundary, FaceVertices};
use crate::topology::{EdgeId, FaceId, Mesh, VertexId};

/// Builds a mesh from a polygon soup: one ordered vertex-position loop
/// per face, all loops wound consistently (counter-clockwise seen from
/// outside).
///
/// Vertices are reused by position identity within the tolerance, and an
/// edge is shared when a later face names an existing pair in the
/// opposite direction. Construction is pure Euler sequencing: the first
/// face of each shell is MVSF + MEV chain + MEF, and every further face
/// must attach to the shell's open working face along one contiguous
/// chain of existing edges (new-vertex runs become MEV chains, the single
/// remaining edge becomes the closing MEF, and a face whose edges all
/// exist absorbs the working face itself).
pub struct MakePolyhedron {
    faces: Vec<Vec<Point3>>,
    tolerance: f64,
}

impl MakePolyhedron {
    /// Creates a new `MakePolyhedron` operation.
    #[must_use]
    pub fn new(faces: Vec<Vec<Point3>>, tolerance: f64) -> Self {
        Self { faces, tolerance }
    }

    /// Executes the build, returning one realized face per input loop, in
    /// input order.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::BadArgument`] for a negative tolerance, a
    /// loop with fewer than three vertices, or coincident consecutive
    /// positions, and [`KernelError::TopologyViolation`] when a face
    /// reuses an edge in the same direction (winding conflict or
    /// non-manifold sharing) or cannot attach along a contiguous chain.
    /// On error the mesh may retain the shells built so far.
    pub fn execute(&self, mesh: &mut Mesh) -> Result<Vec<FaceId>> {
        if self.tolerance < 0.0 {
            return Err(KernelError::BadArgument(
                "position tolerance must be non-negative".into(),
            ));
        }
        let mut created: Vec<VertexId> = Vec::new();
        let mut open: Vec<FaceId> = Vec::new();
        let mut result: Vec<FaceId> = Vec::new();

        for points in &self.faces {
            let n = points.len();
            if n < 3 {
                return Err(KernelError::BadArgument(
                    "a face needs at least three vertices".into(),
                ));
            }
            for i in 0..n {
                let next = points[(i + 1) % n];
                if (next - points[i]).norm() <= self.tolerance {
                    return Err(KernelError::BadArgument(
                        "coincident consecutive vertices".into(),
                    ));
                }
            }

            let ids: Vec<Option<VertexId>> = points
                .iter()
                .map(|p| self.resolve(mesh, &created, *p))
                .collect::<Result<_>>()?;

            if ids.iter().all(Option::is_none) {
                let face = self.seed_shell(mesh, points, &mut created, &mut open)?;
                result.push(face);
            } else {
                let face = self.attach_face(mesh, points, ids, &mut created, &mut open)?;
                result.push(face);
            }
        }
        Ok(result)
    }

    /// Starts a new shell from a loop with no known vertices. The seed
    /// face keeps the loop's winding; its complement becomes the shell's
    /// working face.
    fn seed_shell(
        &self,
        mesh: &mut Mesh,
        points: &[Point3],
        created: &mut Vec<VertexId>,
        open: &mut Vec<FaceId>,
    ) -> Result<FaceId> {
        let (v0, face) = Mvsf::new(points[0]).execute(mesh)?;
        created.push(v0);
        let mut ring = vec![v0];
        for p in &points[1..] {
            let e = Mev::new(ring[ring.len() - 1], *p, face).execute(mesh)?;
            let w = mesh.edge(e)?.v2;
            created.push(w);
            ring.push(w);
        }
        let chord = Mef::new(ring[ring.len() - 1], v0, face).execute(mesh)?;
        open.push(self.split_face(mesh, chord)?);
        Ok(face)
    }

    /// Attaches one loop to the working face holding its known vertices.
    fn attach_face(
        &self,
        mesh: &mut Mesh,
        points: &[Point3],
        ids: Vec<Option<VertexId>>,
        created: &mut Vec<VertexId>,
        open: &mut Vec<FaceId>,
    ) -> Result<FaceId> {
        let n = points.len();
        let first = ids
            .iter()
            .position(Option::is_some)
            .unwrap_or(0);
        let anchor = ids[first].ok_or_else(|| {
            KernelError::TopologyViolation("face has no resolvable vertex".into())
        })?;
        let host = self.find_host(mesh, open, anchor)?;

        // Rotate so the loop starts on a known vertex, then realize each
        // run of new vertices as a MEV chain from its predecessor.
        let mut vids: Vec<VertexId> = Vec::with_capacity(n);
        for i in 0..n {
            let idx = (first + i) % n;
            match ids[idx] {
                Some(v) => vids.push(v),
                None => {
                    let prev = vids[i - 1];
                    let e = Mev::new(prev, points[idx], host).execute(mesh)?;
                    let w = mesh.edge(e)?.v2;
                    created.push(w);
                    vids.push(w);
                }
            }
        }

        // Every named pair must either be missing (to be chorded) or
        // offer a use in this loop's direction on the working face.
        let mut missing = Vec::new();
        for i in 0..n {
            let a = vids[i];
            let b = vids[(i + 1) % n];
            match self.find_edge(mesh, a, b)? {
                Some(e) => {
                    let data = mesh.edge(e)?;
                    let available = (data.v1 == a && data.f1 == Some(host))
                        || (data.v2 == a && data.f2 == Some(host));
                    if !available {
                        return Err(KernelError::TopologyViolation(
                            "edge already used in this direction; inconsistent winding or non-manifold sharing".into(),
                        ));
                    }
                }
                None => missing.push(i),
            }
        }

        match missing.len() {
            0 => {
                // The loop closes the shell: it is the working face itself.
                if FaceBoundary::new(host).execute(mesh)?.len() != n {
                    return Err(KernelError::TopologyViolation(
                        "closing face does not match the remaining boundary".into(),
                    ));
                }
                open.retain(|f| *f != host);
                Ok(host)
            }
            1 => {
                let k = missing[0];
                let chord = Mef::new(vids[(k + 1) % n], vids[k], host).execute(mesh)?;
                self.split_face(mesh, chord)
            }
            _ => Err(KernelError::TopologyViolation(
                "face does not attach along a contiguous edge chain".into(),
            )),
        }
    }

    /// The working face whose boundary carries `vertex`.
    fn find_host(&self, mesh: &Mesh, open: &[FaceId], vertex: VertexId) -> Result<FaceId> {
        for f in open {
            if FaceVertices::new(*f).execute(mesh)?.contains(&vertex) {
                return Ok(*f);
            }
        }
        Err(KernelError::TopologyViolation(
            "face does not attach to an open shell boundary".into(),
        ))
    }

    fn find_edge(&self, mesh: &Mesh, a: VertexId, b: VertexId) -> Result<Option<EdgeId>> {
        for e in mesh.edges() {
            let data = mesh.edge(e)?;
            if (data.v1 == a && data.v2 == b) || (data.v1 == b && data.v2 == a) {
                return Ok(Some(e));
            }
        }
        Ok(None)
    }

    /// The face a MEF chord split off (its `f2` slot).
    fn split_face(&self, mesh: &Mesh, chord: EdgeId) -> Result<FaceId> {
        let data = mesh.edge(chord)?;
        data.f2.ok_or(KernelError::Inconsistency {
            kind: EntityKind::Edge,
            id: data.id,
            detail: "chord has no split face".into(),
        })
    }

    /// The known vertex within tolerance of `p`, if any.
    fn resolve(
        &self,
        mesh: &Mesh,
        created: &[VertexId],
        p: Point3,
    ) -> Result<Option<VertexId>> {
        for v in created {
            if (mesh.vertex(*v)?.point - p).norm() <= self.tolerance {
                return Ok(Some(*v));
            }
        }
        Ok(None)
    }
}
