//! # Unfolded Net
//!
//! Result of one unfolding run: a planar triangle per flattened face, the
//! hinge tree that connects them, and the faces that could not be placed.

use glam::DVec2;
use serde::Serialize;

use crate::graph::{EdgeKey, FaceId, MeshGraph};

/// A fold line of the net: `child` was placed across `edge` of `parent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hinge {
    pub parent: FaceId,
    pub child: FaceId,
    pub edge: EdgeKey,
}

/// Why a face has no planar position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnflattenedReason {
    /// Not connected to the seed face at all.
    Unreached,
    /// Connected to the seed, but only through faces that were never placed,
    /// so no placed neighbor ever tried it.
    Blocked,
    /// Every attempt from a placed neighbor overlapped the net.
    Rejected { attempts: u32 },
}

/// A face missing from the net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnflattenedFace {
    pub face: FaceId,
    pub reason: UnflattenedReason,
}

/// Planar layout produced by [`crate::Unfolder`].
///
/// Positions are stored per face, in the face's own vertex order. The two
/// endpoints of every hinge are bit-identical in parent and child; a vertex
/// reached through different hinge paths may appear at several planar
/// positions, one per side of a cut.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnfoldedNet {
    positions: Vec<Option<[DVec2; 3]>>,
    vertices: Vec<[u32; 3]>,
    order: Vec<FaceId>,
    hinges: Vec<Hinge>,
    unflattened: Vec<UnflattenedFace>,
}

impl UnfoldedNet {
    pub(crate) fn new(
        positions: Vec<Option<[DVec2; 3]>>,
        vertices: Vec<[u32; 3]>,
        order: Vec<FaceId>,
        hinges: Vec<Hinge>,
        unflattened: Vec<UnflattenedFace>,
    ) -> Self {
        Self {
            positions,
            vertices,
            order,
            hinges,
            unflattened,
        }
    }

    /// Number of faces in the source mesh.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of faces with a planar position.
    #[inline]
    pub fn flattened_count(&self) -> usize {
        self.order.len()
    }

    /// Returns true if every face was flattened.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.unflattened.is_empty()
    }

    /// Planar triangle of a face, if it was flattened.
    pub fn face(&self, id: FaceId) -> Option<&[DVec2; 3]> {
        self.positions.get(id.index()).and_then(Option::as_ref)
    }

    /// Flattened faces in face-id order.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &[DVec2; 3])> + '_ {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(index, tri)| tri.as_ref().map(|tri| (FaceId(index as u32), tri)))
    }

    /// Faces in the order they were placed, seed first.
    #[inline]
    pub fn placement_order(&self) -> &[FaceId] {
        &self.order
    }

    #[inline]
    pub fn hinges(&self) -> &[Hinge] {
        &self.hinges
    }

    /// Faces without a planar position, in face-id order.
    #[inline]
    pub fn unflattened(&self) -> &[UnflattenedFace] {
        &self.unflattened
    }

    /// Planar position of `vertex` as seen by `face`.
    pub fn planar_position(&self, face: FaceId, vertex: u32) -> Option<DVec2> {
        let tri = self.face(face)?;
        let slot = self.vertices.get(face.index())?.iter().position(|&v| v == vertex)?;
        Some(tri[slot])
    }

    /// Edges the net folds along, in placement order.
    pub fn fold_edges(&self) -> Vec<EdgeKey> {
        self.hinges.iter().map(|hinge| hinge.edge).collect()
    }

    /// Interior edges of `graph` that are not fold lines.
    pub fn cut_edges(&self, graph: &MeshGraph) -> Vec<EdgeKey> {
        let folds = self.fold_edges();
        graph
            .edges()
            .iter()
            .filter(|edge| !edge.is_boundary() && !folds.contains(&edge.key))
            .map(|edge| edge.key)
            .collect()
    }

    /// Axis-aligned bounds `(min, max)` of the net, or `None` when empty.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let mut points = self.faces().flat_map(|(_, tri)| tri.iter().copied());
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }

    /// Largest absolute difference between a planar edge and its 3D length.
    ///
    /// Zero for an empty net.
    pub fn max_edge_error(&self, graph: &MeshGraph) -> f64 {
        let mut worst: f64 = 0.0;
        for (id, tri) in self.faces() {
            let face = graph.face(id);
            for (edge, length) in face.edges.iter().zip(face.lengths) {
                let (Some(a), Some(b)) = (face.slot_of(edge.a), face.slot_of(edge.b)) else {
                    continue;
                };
                worst = worst.max((tri[a].distance(tri[b]) - length).abs());
            }
        }
        worst
    }

    /// Renderer-ready buffers: non-indexed `[x, y]` pairs, six floats per
    /// flattened face, plus the face id of each triangle.
    pub fn to_buffers(&self) -> (Vec<f32>, Vec<u32>) {
        let mut positions = Vec::with_capacity(self.flattened_count() * 6);
        let mut face_ids = Vec::with_capacity(self.flattened_count());
        for (id, tri) in self.faces() {
            for p in tri {
                positions.push(p.x as f32);
                positions.push(p.y as f32);
            }
            face_ids.push(id.0);
        }
        (positions, face_ids)
    }
}
