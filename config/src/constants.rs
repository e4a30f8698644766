//! # Configuration Constants
//!
//! Centralized constants for the net unfolding pipeline. All geometric
//! tolerances, traversal defaults, and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Traversal**: Defaults for the breadth-first unfolder
//! - **Limits**: Maximum values for safety bounds
//! - **Settings**: Validated snapshot combining the above

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for general floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, e.g. a zero-length edge or a zero-area face.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance for the planar overlap predicates.
///
/// Applied in three places:
/// - a barycentric weight `>= -PLANAR_EPSILON` counts as inside (boundary inclusive)
/// - two segments whose normalized cross product is below it are parallel
/// - a crossing parameter must lie in `(PLANAR_EPSILON, 1 - PLANAR_EPSILON)`
///   to count as a proper crossing, so shared endpoints never do
///
/// # Example
///
/// ```rust
/// use config::constants::PLANAR_EPSILON;
///
/// let t = 1.0 - 1e-15; // numerically "at the endpoint"
/// assert!(t >= 1.0 - PLANAR_EPSILON);
/// ```
pub const PLANAR_EPSILON: f64 = 1e-9;

/// Maximum absolute deviation between a planar edge and its 3D length.
///
/// A flattened face whose edges drift further than this from the source
/// geometry is considered broken.
///
/// # Example
///
/// ```rust
/// use config::constants::EDGE_LENGTH_TOLERANCE;
///
/// let planar: f64 = 2.0000001;
/// let spatial: f64 = 2.0;
/// assert!((planar - spatial).abs() < EDGE_LENGTH_TOLERANCE);
/// ```
pub const EDGE_LENGTH_TOLERANCE: f64 = 1e-4;

/// Area below which a triangle is treated as degenerate.
///
/// Degenerate faces are still flattened (their apex collapses onto the base
/// line); this threshold is only used by mesh validation.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// TRAVERSAL CONSTANTS
// =============================================================================

/// Index of the face the unfolder places first.
///
/// Its first vertex lands on the planar origin and its second on the
/// positive Y axis.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEED_FACE;
///
/// let user_seed: Option<usize> = None;
/// assert_eq!(user_seed.unwrap_or(DEFAULT_SEED_FACE), 0);
/// ```
pub const DEFAULT_SEED_FACE: usize = 0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely complex models.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
///
/// The overlap search is quadratic in the face count, so this is a hard
/// ceiling rather than a performance target.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// SETTINGS
// =============================================================================

/// Immutable snapshot of the unfolder settings that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::UnfoldSettings;
/// let settings = UnfoldSettings::default();
/// assert!(settings.tolerance > 0.0);
/// assert_eq!(settings.seed_face, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnfoldSettings {
    /// Tolerance propagated into the planar overlap predicates.
    pub tolerance: f64,
    /// Face the traversal starts from.
    pub seed_face: usize,
}

impl UnfoldSettings {
    /// Builds settings, rejecting a tolerance that is not strictly positive
    /// and finite.
    ///
    /// # Examples
    /// ```
    /// use config::constants::UnfoldSettings;
    /// let settings = UnfoldSettings::new(1.0e-6, 3).expect("valid settings");
    /// assert_eq!(settings.seed_face, 3);
    /// ```
    pub fn new(tolerance: f64, seed_face: usize) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0 && tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if tolerance >= 0.5 {
            // The crossing interval (tol, 1 - tol) would be empty.
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self {
            tolerance,
            seed_face,
        })
    }
}

impl Default for UnfoldSettings {
    fn default() -> Self {
        Self {
            tolerance: PLANAR_EPSILON,
            seed_face: DEFAULT_SEED_FACE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the tolerance is not in `(0, 0.5)` or is not finite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and below 0.5: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a length is too short to serve as a triangle base.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
