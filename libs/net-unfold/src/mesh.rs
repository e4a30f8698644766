//! # Mesh Data Structure
//!
//! Input triangle soup: 3D vertex positions and vertex-index triples.

use config::constants::{DEGENERATE_AREA_EPSILON, MAX_TRIANGLES, MAX_VERTICES};
use glam::DVec3;

use crate::error::{Result, UnfoldError};

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. The renderer hands over
/// f32 buffers, which [`Mesh::from_buffers`] widens once at load time.
///
/// # Example
///
/// ```rust
/// use net_unfold::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Creates a mesh from flat GPU-style buffers.
    ///
    /// `positions` is `[x, y, z, x, y, z, ...]` and `indices` is
    /// `[i0, i1, i2, i0, i1, i2, ...]`. Index ranges are not checked here;
    /// see [`Mesh::validate`] and [`crate::MeshGraph::build`].
    ///
    /// # Errors
    ///
    /// Returns [`UnfoldError::InvalidBuffer`] when either buffer length is
    /// not a multiple of 3, and the size-limit errors when a buffer exceeds
    /// the configured maximums.
    ///
    /// # Example
    ///
    /// ```rust
    /// use net_unfold::Mesh;
    ///
    /// let mesh = Mesh::from_buffers(
    ///     &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    ///     &[0, 1, 2],
    /// ).unwrap();
    /// assert_eq!(mesh.triangle_count(), 1);
    /// ```
    pub fn from_buffers(positions: &[f32], indices: &[u32]) -> Result<Self> {
        if positions.len() % 3 != 0 {
            return Err(UnfoldError::InvalidBuffer {
                len: positions.len(),
                stride: 3,
            });
        }
        if indices.len() % 3 != 0 {
            return Err(UnfoldError::InvalidBuffer {
                len: indices.len(),
                stride: 3,
            });
        }

        let vertex_count = positions.len() / 3;
        let triangle_count = indices.len() / 3;
        if vertex_count > MAX_VERTICES {
            return Err(UnfoldError::TooManyVertices {
                count: vertex_count,
                max: MAX_VERTICES,
            });
        }
        if triangle_count > MAX_TRIANGLES {
            return Err(UnfoldError::TooManyTriangles {
                count: triangle_count,
                max: MAX_TRIANGLES,
            });
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|p| DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64))
            .collect();
        let triangles = indices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect();

        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Checks every triangle for structural problems.
    ///
    /// Index range and repeated vertices are hard errors; zero-area faces are
    /// not (the unfolder collapses them onto their base edge), so they are
    /// only counted.
    ///
    /// # Returns
    ///
    /// The number of degenerate (zero-area) triangles.
    ///
    /// # Errors
    ///
    /// [`UnfoldError::IndexOutOfRange`] or [`UnfoldError::RepeatedVertex`]
    /// for the first offending triangle.
    pub fn validate(&self) -> Result<usize> {
        let vertex_count = self.vertices.len();
        let mut degenerate = 0;

        for (face, tri) in self.triangles.iter().enumerate() {
            for &vertex in tri {
                if vertex as usize >= vertex_count {
                    return Err(UnfoldError::IndexOutOfRange {
                        face,
                        vertex,
                        vertex_count,
                    });
                }
            }

            if tri[0] == tri[1] || tri[0] == tri[2] {
                return Err(UnfoldError::RepeatedVertex {
                    face,
                    vertex: tri[0],
                });
            }
            if tri[1] == tri[2] {
                return Err(UnfoldError::RepeatedVertex {
                    face,
                    vertex: tri[1],
                });
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = 0.5 * (v1 - v0).cross(v2 - v0).length();
            if area < DEGENERATE_AREA_EPSILON {
                degenerate += 1;
            }
        }

        Ok(degenerate)
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}
