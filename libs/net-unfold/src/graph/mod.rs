//! # Mesh Graph
//!
//! Triangle/edge topology of a mesh, built once at load time.
//! Uses index-based references instead of pointers: faces live in a dense
//! array and adjacency is stored as (face index, shared edge) pairs.
//!
//! ## Structure
//!
//! - **Face**: vertex triple plus its 3D side lengths and area
//! - **Edge**: unordered vertex pair, 3D length, incident faces
//! - **Neighbor**: another face reachable across a shared edge
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use net_unfold::graph::{FaceId, MeshGraph};
//!
//! let vertices = [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
//! let graph = MeshGraph::build(&vertices, &[[0, 1, 2], [0, 3, 1]]).unwrap();
//! assert_eq!(graph.face_count(), 2);
//! assert_eq!(graph.neighbors(FaceId(0)).len(), 1);
//! ```

use std::collections::HashMap;

use config::constants::{MAX_TRIANGLES, MAX_VERTICES};
use glam::DVec3;
use serde::Serialize;
use tracing::info;

use crate::error::{Result, UnfoldError};
use crate::mesh::Mesh;
use crate::solver::TriangleSides;

/// Index type for faces in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct FaceId(pub u32);

impl FaceId {
    /// Position of this face in the graph's face array.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unordered vertex pair identifying an edge; `a < b` always holds.
///
/// # Example
///
/// ```rust
/// use net_unfold::graph::EdgeKey;
///
/// assert_eq!(EdgeKey::new(5, 2), EdgeKey::new(2, 5));
/// assert_eq!(EdgeKey::new(5, 2).a, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeKey {
    /// Smaller vertex id
    pub a: u32,
    /// Larger vertex id
    pub b: u32,
}

impl EdgeKey {
    /// Creates the canonical key for the edge between `v1` and `v2`.
    pub fn new(v1: u32, v2: u32) -> Self {
        if v1 < v2 {
            Self { a: v1, b: v2 }
        } else {
            Self { a: v2, b: v1 }
        }
    }

    /// Returns true if `vertex` is one of the endpoints.
    #[inline]
    pub fn contains(&self, vertex: u32) -> bool {
        self.a == vertex || self.b == vertex
    }
}

/// A triangle of the mesh with its derived 3D measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Identity (position in the face array)
    pub id: FaceId,
    /// Vertex ids in input order
    pub vertices: [u32; 3],
    /// Edges in registration order: (v0,v1), (v1,v2), (v0,v2)
    pub edges: [EdgeKey; 3],
    /// 3D lengths of `edges`, same order
    pub lengths: [f64; 3],
    /// 3D area
    pub area: f64,
}

impl Face {
    /// Returns the slot (0..3) of `vertex` in this face, if present.
    #[inline]
    pub fn slot_of(&self, vertex: u32) -> Option<usize> {
        self.vertices.iter().position(|&v| v == vertex)
    }

    /// Returns the vertex of this face that is not on `edge`.
    pub fn opposite_vertex(&self, edge: EdgeKey) -> Option<u32> {
        if self.slot_of(edge.a).is_none() || self.slot_of(edge.b).is_none() {
            return None;
        }
        self.vertices.iter().copied().find(|&v| !edge.contains(v))
    }

    /// Returns the 3D length of the edge between `v1` and `v2`.
    pub fn edge_length(&self, v1: u32, v2: u32) -> Option<f64> {
        let key = EdgeKey::new(v1, v2);
        self.edges
            .iter()
            .position(|edge| *edge == key)
            .map(|slot| self.lengths[slot])
    }

    /// Side lengths with `v0` and `v1` as the fixed pair and `v2` solved.
    #[inline]
    pub fn sides(&self) -> TriangleSides {
        TriangleSides {
            v1v2: self.lengths[0],
            v1v3: self.lengths[2],
            v2v3: self.lengths[1],
            area: self.area,
        }
    }

    /// Side lengths and area for solving the vertex opposite `v1`-`v2`,
    /// with `v1` and `v2` playing the roles of the two fixed vertices.
    pub fn sides_from(&self, v1: u32, v2: u32) -> Option<TriangleSides> {
        let v3 = self.opposite_vertex(EdgeKey::new(v1, v2))?;
        Some(TriangleSides {
            v1v2: self.edge_length(v1, v2)?,
            v1v3: self.edge_length(v1, v3)?,
            v2v3: self.edge_length(v2, v3)?,
            area: self.area,
        })
    }
}

/// An edge with its 3D length and the faces that use it.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub key: EdgeKey,
    /// 3D Euclidean length, recorded on first insertion
    pub length: f64,
    /// Incident faces in registration order
    pub faces: Vec<FaceId>,
}

impl Edge {
    /// Returns true if only one face uses this edge.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.faces.len() == 1
    }
}

/// A face reachable across a shared edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub face: FaceId,
    pub edge: EdgeKey,
}

/// Face adjacency of a triangle mesh.
///
/// Immutable once built. Edge order and neighbor order follow registration
/// order, so every traversal over the graph is deterministic.
#[derive(Debug, Clone)]
pub struct MeshGraph {
    positions: Vec<DVec3>,
    faces: Vec<Face>,
    edges: Vec<Edge>,
    edge_index: HashMap<EdgeKey, usize>,
    neighbors: Vec<Vec<Neighbor>>,
}

impl MeshGraph {
    /// Builds the graph from vertex positions and vertex-id triples.
    ///
    /// Boundary edges (a single incident face) are accepted; faces along a
    /// boundary simply have fewer than three neighbors.
    ///
    /// # Errors
    ///
    /// - [`UnfoldError::NonManifoldEdge`] if an edge has more than two faces
    /// - [`UnfoldError::IndexOutOfRange`] / [`UnfoldError::RepeatedVertex`]
    ///   for malformed triangles
    /// - size-limit errors from the configured maximums
    pub fn build(vertices: &[DVec3], triangles: &[[u32; 3]]) -> Result<Self> {
        if vertices.len() > MAX_VERTICES {
            return Err(UnfoldError::TooManyVertices {
                count: vertices.len(),
                max: MAX_VERTICES,
            });
        }
        if triangles.len() > MAX_TRIANGLES {
            return Err(UnfoldError::TooManyTriangles {
                count: triangles.len(),
                max: MAX_TRIANGLES,
            });
        }

        let mut graph = Self {
            positions: vertices.to_vec(),
            faces: Vec::with_capacity(triangles.len()),
            edges: Vec::with_capacity(triangles.len() * 3 / 2),
            edge_index: HashMap::with_capacity(triangles.len() * 3 / 2),
            neighbors: Vec::new(),
        };

        for (index, tri) in triangles.iter().enumerate() {
            graph.register_face(index, *tri)?;
        }

        if let Some(edge) = graph.edges.iter().find(|edge| edge.faces.len() > 2) {
            return Err(UnfoldError::non_manifold(
                edge.key.a,
                edge.key.b,
                edge.faces.len(),
            ));
        }

        let neighbors = graph
            .faces
            .iter()
            .map(|face| graph.collect_neighbors(face))
            .collect();
        graph.neighbors = neighbors;

        info!(
            faces = graph.faces.len(),
            edges = graph.edges.len(),
            boundary_edges = graph.boundary_edge_count(),
            "Built mesh graph"
        );

        Ok(graph)
    }

    /// Builds the graph for a [`Mesh`].
    pub fn from_mesh(mesh: &Mesh) -> Result<Self> {
        Self::build(mesh.vertices(), mesh.triangles())
    }

    fn register_face(&mut self, index: usize, tri: [u32; 3]) -> Result<()> {
        let vertex_count = self.positions.len();
        for &vertex in &tri {
            if vertex as usize >= vertex_count {
                return Err(UnfoldError::IndexOutOfRange {
                    face: index,
                    vertex,
                    vertex_count,
                });
            }
        }
        if tri[0] == tri[1] || tri[0] == tri[2] || tri[1] == tri[2] {
            let vertex = if tri[0] == tri[1] || tri[0] == tri[2] {
                tri[0]
            } else {
                tri[1]
            };
            return Err(UnfoldError::RepeatedVertex {
                face: index,
                vertex,
            });
        }

        let id = FaceId(index as u32);
        let [v0, v1, v2] = tri;
        let pairs = [(v0, v1), (v1, v2), (v0, v2)];
        let edges = pairs.map(|(x, y)| EdgeKey::new(x, y));
        let lengths = pairs.map(|(x, y)| self.distance(x, y));

        let p0 = self.positions[v0 as usize];
        let area = 0.5
            * (self.positions[v1 as usize] - p0)
                .cross(self.positions[v2 as usize] - p0)
                .length();

        for (key, length) in edges.iter().zip(lengths) {
            self.insert_edge(*key, length, id);
        }

        self.faces.push(Face {
            id,
            vertices: tri,
            edges,
            lengths,
            area,
        });
        Ok(())
    }

    fn insert_edge(&mut self, key: EdgeKey, length: f64, face: FaceId) {
        match self.edge_index.get(&key) {
            Some(&slot) => self.edges[slot].faces.push(face),
            None => {
                self.edge_index.insert(key, self.edges.len());
                self.edges.push(Edge {
                    key,
                    length,
                    faces: vec![face],
                });
            }
        }
    }

    fn collect_neighbors(&self, face: &Face) -> Vec<Neighbor> {
        let mut result = Vec::with_capacity(3);
        for key in &face.edges {
            let Some(edge) = self.edge(*key) else {
                continue;
            };
            for &other in &edge.faces {
                if other != face.id {
                    result.push(Neighbor {
                        face: other,
                        edge: *key,
                    });
                }
            }
        }
        result
    }

    #[inline]
    fn distance(&self, v1: u32, v2: u32) -> f64 {
        self.positions[v1 as usize].distance(self.positions[v2 as usize])
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the graph has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns the face with the given id.
    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    /// Returns all faces in input order.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns all edges in registration order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up an edge by key.
    pub fn edge(&self, key: EdgeKey) -> Option<&Edge> {
        self.edge_index.get(&key).map(|&slot| &self.edges[slot])
    }

    /// Returns the 3D position of a vertex.
    #[inline]
    pub fn position(&self, vertex: u32) -> DVec3 {
        self.positions[vertex as usize]
    }

    /// Returns the neighbors of a face, ordered by the face's own edge order
    /// and then by the order faces were registered on each edge.
    #[inline]
    pub fn neighbors(&self, id: FaceId) -> &[Neighbor] {
        &self.neighbors[id.index()]
    }

    /// Counts edges with a single incident face.
    pub fn boundary_edge_count(&self) -> usize {
        self.edges.iter().filter(|edge| edge.is_boundary()).count()
    }

    /// Returns true if the mesh has faces and no boundary edges.
    pub fn is_closed(&self) -> bool {
        !self.faces.is_empty() && self.boundary_edge_count() == 0
    }
}
