//! # Config Crate
//!
//! Centralized configuration constants for the net unfolding pipeline.
//! Every tolerance and default the unfolder relies on is defined here so
//! that the core library, the WASM surface, and the tests agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{PLANAR_EPSILON, EDGE_LENGTH_TOLERANCE, DEFAULT_SEED_FACE};
//!
//! // Barycentric weights this close to zero count as "on the boundary"
//! let weight: f64 = -1e-12;
//! assert!(weight >= -PLANAR_EPSILON);
//!
//! // Flattening must preserve edge lengths to this bound
//! let drift: f64 = 3e-7;
//! assert!(drift < EDGE_LENGTH_TOLERANCE);
//!
//! assert_eq!(DEFAULT_SEED_FACE, 0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
