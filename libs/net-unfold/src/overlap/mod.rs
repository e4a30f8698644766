//! # Overlap Oracle
//!
//! Planar predicates used to reject a candidate placement that would
//! overlap part of the net already laid out.
//!
//! ## Contents
//!
//! - **Barycentric**: `point_in_triangle`, `point_strictly_inside`
//! - **Segments**: `segments_intersect`
//! - **Placement**: `overlaps`
//!
//! Every predicate takes an explicit tolerance `eps`. Boundaries are
//! inclusive for point containment and exclusive for segment crossings, so
//! two triangles that share an edge or a vertex never count as overlapping.

use glam::{DMat3, DVec2, DVec3};

// =============================================================================
// BARYCENTRIC TESTS
// =============================================================================

/// Solves `w0*a + w1*b + w2*c = p`, `w0 + w1 + w2 = 1`.
///
/// Returns `None` when the triangle is degenerate (its sine of the angle at
/// `a` is below `eps`).
fn barycentric(p: DVec2, a: DVec2, b: DVec2, c: DVec2, eps: f64) -> Option<DVec3> {
    let system = DMat3::from_cols(a.extend(1.0), b.extend(1.0), c.extend(1.0));
    let det = system.determinant();
    let scale = (b - a).length() * (c - a).length();
    if det.abs() <= eps * scale {
        return None;
    }
    Some(system.inverse() * p.extend(1.0))
}

/// Returns true if `p` lies inside triangle `(a, b, c)` or on its boundary.
///
/// A degenerate triangle contains nothing.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use net_unfold::overlap::point_in_triangle;
///
/// let (a, b, c) = (DVec2::ZERO, DVec2::X, DVec2::Y);
/// assert!(point_in_triangle(DVec2::splat(0.25), a, b, c, 1e-9));
/// assert!(point_in_triangle(DVec2::new(0.5, 0.0), a, b, c, 1e-9));
/// assert!(!point_in_triangle(DVec2::splat(1.0), a, b, c, 1e-9));
/// ```
pub fn point_in_triangle(p: DVec2, a: DVec2, b: DVec2, c: DVec2, eps: f64) -> bool {
    barycentric(p, a, b, c, eps).is_some_and(|w| w.min_element() >= -eps)
}

/// Returns true if `p` lies in the open interior of triangle `(a, b, c)`.
pub fn point_strictly_inside(p: DVec2, a: DVec2, b: DVec2, c: DVec2, eps: f64) -> bool {
    barycentric(p, a, b, c, eps).is_some_and(|w| w.min_element() > eps)
}

// =============================================================================
// SEGMENT TESTS
// =============================================================================

/// Returns true if segments `p-q` and `r-s` properly cross.
///
/// Parallel and collinear segments never cross. A touch at either endpoint
/// of either segment is not a crossing.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use net_unfold::overlap::segments_intersect;
///
/// let eps = 1e-9;
/// // An X crosses
/// assert!(segments_intersect(DVec2::ZERO, DVec2::ONE, DVec2::Y, DVec2::X, eps));
/// // A shared endpoint does not
/// assert!(!segments_intersect(DVec2::ZERO, DVec2::X, DVec2::X, DVec2::ONE, eps));
/// ```
pub fn segments_intersect(p: DVec2, q: DVec2, r: DVec2, s: DVec2, eps: f64) -> bool {
    let d1 = q - p;
    let d2 = s - r;
    let denom = d1.perp_dot(d2);
    if denom.abs() <= eps * d1.length() * d2.length() {
        return false;
    }

    // p + t*d1 = r + u*d2, solved by Cramer's rule
    let offset = r - p;
    let t = offset.perp_dot(d2) / denom;
    let u = offset.perp_dot(d1) / denom;

    t > eps && t < 1.0 - eps && u > eps && u < 1.0 - eps
}

// =============================================================================
// PLACEMENT
// =============================================================================

/// Returns true if the triangle `(fixed_a, fixed_b, candidate)` would
/// overlap any triangle in `placed`.
///
/// A placed triangle conflicts when:
/// - `candidate` lies inside it (boundary inclusive),
/// - a new edge `candidate-fixed_a` or `candidate-fixed_b` properly crosses
///   one of its edges, or
/// - it sits inside the new triangle (one of its vertices or its centroid
///   strictly inside).
///
/// Cost is linear in the number of placed triangles.
pub fn overlaps<'a, I>(candidate: DVec2, fixed_a: DVec2, fixed_b: DVec2, placed: I, eps: f64) -> bool
where
    I: IntoIterator<Item = &'a [DVec2; 3]>,
{
    placed
        .into_iter()
        .any(|tri| conflicts(candidate, fixed_a, fixed_b, tri, eps))
}

fn conflicts(candidate: DVec2, fixed_a: DVec2, fixed_b: DVec2, tri: &[DVec2; 3], eps: f64) -> bool {
    let [a, b, c] = *tri;
    if point_in_triangle(candidate, a, b, c, eps) {
        return true;
    }

    let edges = [(a, b), (b, c), (c, a)];
    let crosses = edges.iter().any(|&(r, s)| {
        segments_intersect(candidate, fixed_a, r, s, eps)
            || segments_intersect(candidate, fixed_b, r, s, eps)
    });
    if crosses {
        return true;
    }

    let centroid = (a + b + c) / 3.0;
    [a, b, c, centroid]
        .into_iter()
        .any(|p| point_strictly_inside(p, fixed_a, fixed_b, candidate, eps))
}
