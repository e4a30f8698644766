//! # Closed Polyhedra
//!
//! Box, regular tetrahedron and regular octahedron. Each one is a corner
//! table plus a face table fed through `from_corners`, so winding and
//! vertex order live in one place per shape.

use crate::error::{Result, UnfoldError};
use crate::mesh::Mesh;
use glam::DVec3;

/// Builds a mesh from corner positions and triangles indexing into them.
fn from_corners(corners: &[DVec3], triangles: &[[u32; 3]]) -> Mesh {
    let mut mesh = Mesh::with_capacity(corners.len(), triangles.len());
    for &corner in corners {
        mesh.add_vertex(corner);
    }
    for &[a, b, c] in triangles {
        mesh.add_triangle(a, b, c);
    }
    mesh
}

fn require_positive(shape: &str, what: &str, value: f64) -> Result<()> {
    if value <= 0.0 || !value.is_finite() {
        return Err(UnfoldError::invalid_params(format!(
            "{} {} must be positive: {}",
            shape, what, value
        )));
    }
    Ok(())
}

/// Box sides as outward counter-clockwise quads over the corner ring
/// order (bottom ring 0..4, top ring 4..8).
const BOX_SIDES: [[u32; 4]; 6] = [
    [0, 3, 2, 1],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
    [1, 2, 6, 5],
];

/// Creates an axis-aligned box with two triangles per side.
///
/// With `center` the box is centered at the origin, otherwise its minimum
/// corner sits at the origin.
///
/// ```rust
/// use net_unfold::primitives::create_cube;
/// use glam::DVec3;
///
/// let mesh = create_cube(DVec3::new(2.0, 3.0, 0.5), true).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cube(size: DVec3, center: bool) -> Result<Mesh> {
    for extent in size.to_array() {
        require_positive("Box", "extent", extent)?;
    }

    let origin = if center { -size / 2.0 } else { DVec3::ZERO };
    let ring = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let corners: Vec<DVec3> = [0.0, 1.0]
        .into_iter()
        .flat_map(|z| ring.map(|(x, y)| origin + size * DVec3::new(x, y, z)))
        .collect();

    let triangles: Vec<[u32; 3]> = BOX_SIDES
        .iter()
        .flat_map(|&[a, b, c, d]| [[a, b, c], [a, c, d]])
        .collect();

    Ok(from_corners(&corners, &triangles))
}

/// Creates a regular tetrahedron centered at the origin.
///
/// # Arguments
///
/// * `edge` - Length of every edge
///
/// # Example
///
/// ```rust
/// use net_unfold::primitives::create_tetrahedron;
///
/// let mesh = create_tetrahedron(1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangle_count(), 4);
/// ```
pub fn create_tetrahedron(edge: f64) -> Result<Mesh> {
    require_positive("Tetrahedron", "edge", edge)?;

    // Alternate cube corners are mutually 2*sqrt(2) apart
    let scale = edge / (2.0 * std::f64::consts::SQRT_2);
    let corners = [
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(1.0, -1.0, -1.0),
        DVec3::new(-1.0, 1.0, -1.0),
        DVec3::new(-1.0, -1.0, 1.0),
    ]
    .map(|corner| corner * scale);

    Ok(from_corners(
        &corners,
        &[[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]],
    ))
}

/// Creates a regular octahedron with vertices on the coordinate axes.
///
/// # Arguments
///
/// * `radius` - Distance from the origin to each vertex
///
/// # Example
///
/// ```rust
/// use net_unfold::primitives::create_octahedron;
///
/// let mesh = create_octahedron(1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn create_octahedron(radius: f64) -> Result<Mesh> {
    require_positive("Octahedron", "radius", radius)?;

    // +X, -X, +Y, -Y, +Z, -Z
    let corners = [DVec3::X, -DVec3::X, DVec3::Y, -DVec3::Y, DVec3::Z, -DVec3::Z]
        .map(|axis| axis * radius);
    let (px, nx, py, ny, pz, nz) = (0, 1, 2, 3, 4, 5);

    Ok(from_corners(
        &corners,
        &[
            // Upper cap
            [pz, px, py],
            [pz, py, nx],
            [pz, nx, ny],
            [pz, ny, px],
            // Lower cap
            [nz, py, px],
            [nz, nx, py],
            [nz, ny, nx],
            [nz, px, ny],
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn edge_lengths(mesh: &Mesh) -> Vec<f64> {
        mesh.triangles()
            .iter()
            .flat_map(|t| {
                [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])]
                    .map(|(i, j)| mesh.vertex(i).distance(mesh.vertex(j)))
            })
            .collect()
    }

    /// Sum over faces of `a . (b x c)`; six times the enclosed volume when
    /// every face winds outward.
    fn signed_volume6(mesh: &Mesh) -> f64 {
        mesh.triangles()
            .iter()
            .map(|&[a, b, c]| mesh.vertex(a).dot(mesh.vertex(b).cross(mesh.vertex(c))))
            .sum()
    }

    #[test]
    fn test_box_extent_and_volume() {
        let size = DVec3::new(2.0, 3.0, 0.5);
        let corner = create_cube(size, false).unwrap();
        assert_eq!(corner.bounding_box(), (DVec3::ZERO, size));

        let centered = create_cube(size, true).unwrap();
        assert_eq!(centered.bounding_box(), (-size / 2.0, size / 2.0));
        assert_relative_eq!(signed_volume6(&centered), 6.0 * 3.0, epsilon = 1e-12);
        assert_eq!(centered.validate(), Ok(0));
    }

    #[test]
    fn test_box_sides_split_along_first_corner() {
        let mesh = create_cube(DVec3::ONE, false).unwrap();
        assert_eq!(mesh.triangles()[0], [0, 3, 2]);
        assert_eq!(mesh.triangles()[1], [0, 2, 1]);
        assert_eq!(mesh.triangles()[11], [1, 6, 5]);
    }

    #[test]
    fn test_tetrahedron_is_regular() {
        let mesh = create_tetrahedron(2.5).unwrap();
        for length in edge_lengths(&mesh) {
            assert_relative_eq!(length, 2.5, epsilon = 1e-12);
        }
        assert!(signed_volume6(&mesh) > 0.0);
        assert_eq!(mesh.validate(), Ok(0));
    }

    #[test]
    fn test_octahedron_is_regular() {
        let mesh = create_octahedron(1.0).unwrap();
        for length in edge_lengths(&mesh) {
            assert_relative_eq!(length, std::f64::consts::SQRT_2, epsilon = 1e-12);
        }
        // Volume of the unit octahedron is 4/3
        assert_relative_eq!(signed_volume6(&mesh), 8.0, epsilon = 1e-12);
        assert_eq!(mesh.validate(), Ok(0));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(create_cube(DVec3::new(0.0, 1.0, 1.0), false).is_err());
        assert!(create_cube(DVec3::new(1.0, f64::INFINITY, 1.0), true).is_err());
        assert!(create_tetrahedron(0.0).is_err());
        assert!(create_tetrahedron(f64::NAN).is_err());
        assert!(create_octahedron(-1.0).is_err());
    }
}
