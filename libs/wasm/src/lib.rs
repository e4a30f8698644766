//! WASM-facing entry points for the unfolding engine.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The renderer hands over the same flat buffers it uploads
//! to the GPU and receives a planar net it can draw directly. Native tests
//! use `unfold_internal` to avoid depending on a JS host.
//!
//! ```
//! let vertices = [0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0, 0.0];
//! let net = net_unfold_wasm::unfold_internal(&vertices, &[0, 1, 2], 0).unwrap();
//! assert_eq!(net.flattened_count(), 1);
//! ```

use config::constants::{DEFAULT_SEED_FACE, PLANAR_EPSILON};
use net_unfold::{unfold_mesh, Mesh, UnfoldParams, UnfoldedNet};
use wasm_bindgen::prelude::*;

mod diagnostics;

pub use diagnostics::{Diagnostic, DiagnosticList, Severity};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "net-unfold-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the tolerance used by the overlap predicates.
///
/// # Examples
/// ```
/// assert!(net_unfold_wasm::default_tolerance() > 0.0);
/// ```
#[wasm_bindgen]
pub fn default_tolerance() -> f64 {
    PLANAR_EPSILON
}

/// Unfolded net returned to JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const net = unfold(mesh.vertices(), mesh.indices());
/// // const geometry = new THREE.BufferGeometry();
/// // geometry.setAttribute('position', new THREE.BufferAttribute(net.positions(), 2));
/// // if (!net.is_complete()) console.warn(net.unflattened_faces());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct NetHandle {
    net: UnfoldedNet,
    positions: Vec<f32>,
    face_ids: Vec<u32>,
}

#[wasm_bindgen]
impl NetHandle {
    /// Returns the number of faces in the source mesh.
    pub fn face_count(&self) -> usize {
        self.net.face_count()
    }

    /// Returns the number of faces present in the net.
    pub fn flattened_count(&self) -> usize {
        self.net.flattened_count()
    }

    /// Returns true if every face was flattened.
    pub fn is_complete(&self) -> bool {
        self.net.is_complete()
    }

    /// Returns planar positions as a Float32Array.
    ///
    /// Format: [x, y, x, y, x, y, ...], three points per flattened face.
    pub fn positions(&self) -> Vec<f32> {
        self.positions.clone()
    }

    /// Returns the source face id of each planar triangle as a Uint32Array.
    pub fn face_ids(&self) -> Vec<u32> {
        self.face_ids.clone()
    }

    /// Returns the ids of faces missing from the net as a Uint32Array.
    pub fn unflattened_faces(&self) -> Vec<u32> {
        self.net.unflattened().iter().map(|f| f.face.0).collect()
    }

    /// Returns one warning per unflattened face.
    pub fn diagnostics(&self) -> DiagnosticList {
        DiagnosticList::new(self.net.unflattened().iter().map(Diagnostic::from).collect())
    }

    /// Serializes the full net (faces, hinges, unflattened report) to JSON.
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.net).map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl NetHandle {
    /// Wraps a net, precomputing the renderer buffers.
    pub fn from_net(net: UnfoldedNet) -> Self {
        let (positions, face_ids) = net.to_buffers();
        Self {
            net,
            positions,
            face_ids,
        }
    }

    /// Returns the underlying net.
    pub fn net(&self) -> &UnfoldedNet {
        &self.net
    }
}

/// Unfolds a mesh given as flat buffers, seeded at the first face.
///
/// # Errors
/// Returns a JavaScript error containing the diagnostic text when the mesh
/// is rejected (non-manifold edge, bad index, malformed buffer).
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try {
/// //   const net = unfold(vertices, indices);
/// // } catch (error) {
/// //   console.error("Unfolding failed:", error);
/// // }
/// ```
#[wasm_bindgen]
pub fn unfold(vertices: &[f32], indices: &[u32]) -> Result<NetHandle, JsValue> {
    unfold_with_seed(vertices, indices, DEFAULT_SEED_FACE as u32)
}

/// Same as [`unfold`], starting from `seed_face`.
#[wasm_bindgen]
pub fn unfold_with_seed(vertices: &[f32], indices: &[u32], seed_face: u32) -> Result<NetHandle, JsValue> {
    unfold_internal(vertices, indices, seed_face as usize)
        .map_err(|diagnostics| JsValue::from_str(&diagnostics.to_string()))
}

/// Internal implementation of [`unfold`].
///
/// Returns diagnostics on error for better error reporting.
pub fn unfold_internal(
    vertices: &[f32],
    indices: &[u32],
    seed_face: usize,
) -> Result<NetHandle, DiagnosticList> {
    let reject = |err: net_unfold::UnfoldError| DiagnosticList::new(vec![Diagnostic::from(&err)]);

    let mesh = Mesh::from_buffers(vertices, indices).map_err(reject)?;
    let params = UnfoldParams::default().with_seed(seed_face);
    let net = unfold_mesh(&mesh, &params).map_err(reject)?;
    Ok(NetHandle::from_net(net))
}

#[cfg(test)]
mod tests;
