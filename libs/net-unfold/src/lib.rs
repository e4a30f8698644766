//! # Net Unfold
//!
//! Flattens a triangulated 3D surface into a planar net: every triangle is
//! laid out with its exact 3D edge lengths, neighbors stay joined along the
//! edges they were unfolded across, and no two triangles overlap.
//!
//! ## Architecture
//!
//! ```text
//! Mesh → MeshGraph → Unfolder ─┬─ solver  (third-vertex candidates)
//!                              └─ overlap (candidate rejection)
//!                            → UnfoldedNet
//! ```
//!
//! ## Components
//!
//! - **Graph**: face/edge topology and adjacency, built once per mesh
//! - **Solver**: closed-form side-side-side triangle placement
//! - **Overlap**: point-in-triangle and segment-crossing predicates
//! - **Unfolder**: breadth-first traversal producing the net
//!
//! Faces that cannot be placed are reported, not dropped; see
//! [`UnfoldedNet::unflattened`].
//!
//! ## Usage
//!
//! ```rust
//! use net_unfold::{primitives::create_cube, unfold_mesh, UnfoldParams};
//! use glam::DVec3;
//!
//! let mesh = create_cube(DVec3::splat(1.0), true).unwrap();
//! let net = unfold_mesh(&mesh, &UnfoldParams::default()).unwrap();
//! assert_eq!(net.face_count(), 12);
//! assert!(net.is_complete());
//! ```

pub mod error;
pub mod graph;
pub mod mesh;
pub mod net;
pub mod overlap;
pub mod primitives;
pub mod solver;
pub mod unfolder;

pub use error::{Result, UnfoldError};
pub use graph::{EdgeKey, FaceId, MeshGraph};
pub use mesh::Mesh;
pub use net::{Hinge, UnfoldedNet, UnflattenedFace, UnflattenedReason};
pub use unfolder::{UnfoldParams, Unfolder};

/// Builds the graph for `mesh` and unfolds it.
///
/// # Errors
///
/// Any graph construction error (non-manifold edge, bad index) or an
/// invalid seed/tolerance in `params`.
pub fn unfold_mesh(mesh: &Mesh, params: &UnfoldParams) -> Result<UnfoldedNet> {
    let graph = MeshGraph::from_mesh(mesh)?;
    Unfolder::new(&graph, *params).run()
}
