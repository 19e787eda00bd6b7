mod make_cube;
mod make_plane;
mod make_polyhedron;

pub use make_cube::MakeCube;
pub use make_plane::MakePlane;
pub use make_polyhedron::MakePolyhedron;
