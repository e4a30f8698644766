//! # Triangle Solver
//!
//! Side-side-side placement of a triangle's third vertex in the plane.
//!
//! Given the planar positions `p1`, `p2` of two vertices and the triangle's
//! real side lengths, the third vertex lies on one of two mirror-image
//! points across the line `p1 p2`. Both are returned; callers decide which
//! side to keep.
//!
//! ```text
//!            v3
//!           /|\
//!   |v1v3| / |h\ |v2v3|
//!         /  |  \
//!      p1 ---F--- p2
//!          b
//! ```

use config::constants::approx_zero;
use glam::DVec2;

/// Real-world measurements of a triangle, keyed by the roles its vertices
/// play in a placement: `v1`, `v2` fixed, `v3` solved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleSides {
    pub v1v2: f64,
    pub v1v3: f64,
    pub v2v3: f64,
    /// Triangle area, used to recover the altitude over `v1v2`
    pub area: f64,
}

impl TriangleSides {
    /// Altitude of `v3` above the line `v1v2`.
    ///
    /// Zero when `v1v2` itself has no length.
    #[inline]
    pub fn height(&self) -> f64 {
        if approx_zero(self.v1v2) {
            0.0
        } else {
            2.0 * self.area / self.v1v2
        }
    }
}

/// Computes the two candidate planar positions of `v3`.
///
/// The first candidate lies to the left of the directed line `p1 -> p2`,
/// the second to the right. A degenerate (zero-area) triangle yields two
/// coincident candidates on the line itself.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use net_unfold::solver::{place_third_vertex, TriangleSides};
///
/// let sides = TriangleSides { v1v2: 5.0, v1v3: 3.0, v2v3: 4.0, area: 6.0 };
/// let [left, right] = place_third_vertex(DVec2::ZERO, DVec2::new(0.0, 5.0), &sides);
/// assert!((left - DVec2::new(-2.4, 1.8)).length() < 1e-12);
/// assert!((right - DVec2::new(2.4, 1.8)).length() < 1e-12);
/// ```
pub fn place_third_vertex(p1: DVec2, p2: DVec2, sides: &TriangleSides) -> [DVec2; 2] {
    if approx_zero(sides.v1v2) {
        // No baseline to measure along; park v3 at its distance from v1.
        let offset = DVec2::new(sides.v1v3, 0.0);
        return [p1 + offset, p1 - offset];
    }

    let h = sides.height();
    let h_sq = h * h;

    // Radicands are clamped so near-degenerate input cannot produce NaN.
    let mut b = (sides.v1v3 * sides.v1v3 - h_sq).max(0.0).sqrt();
    let c = (sides.v2v3 * sides.v2v3 - h_sq).max(0.0).sqrt();

    // Obtuse at v1: the foot of the altitude falls behind p1.
    if c > sides.v1v2 && c > b {
        b = -b;
    }

    let base = p2 - p1;
    let foot = p1 + base * (b / sides.v1v2);
    let normal = base.perp().normalize_or_zero();

    [foot + normal * h, foot - normal * h]
}
