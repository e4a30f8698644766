//! # Primitives
//!
//! Small closed meshes used by demos and tests (box, tetrahedron,
//! octahedron). Every primitive is a consistently wound 2-manifold.

pub mod polyhedra;

pub use polyhedra::{create_cube, create_octahedron, create_tetrahedron};
