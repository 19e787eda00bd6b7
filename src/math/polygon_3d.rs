use super::{Point3, Vector3, TOLERANCE};

/// Computes the normal of a 3D polygon using Newell's method.
///
/// Robust on non-planar polygons; the result follows the right-hand rule
/// of the vertex ordering. Returns the zero vector for degenerate input
/// (fewer than three points, collinear points, or a walk that cancels
/// itself such as a doubled-back spur).
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Vector3 {
    let n = points.len();
    if n < 3 {
        return Vector3::zeros();
    }
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    let len = normal.norm();
    if len < TOLERANCE {
        return Vector3::zeros();
    }
    normal / len
}

/// Computes the area of a 3D polygon by fan triangulation from its first
/// vertex.
///
/// Exact for convex polygons and planar simple polygons; degenerate input
/// (fewer than three points) yields 0.0.
#[must_use]
pub fn fan_area(points: &[Point3]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let p0 = &points[0];
    let mut total = 0.0;
    for i in 1..points.len() - 1 {
        let a = points[i] - p0;
        let b = points[i + 1] - p0;
        total += a.cross(&b).norm() * 0.5;
    }
    total
}
