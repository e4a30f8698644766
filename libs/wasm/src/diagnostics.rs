//! WASM-compatible diagnostic types.
//!
//! Hard unfolding errors and unflattened faces are both surfaced to
//! JavaScript as diagnostics; only their severity differs.

use std::fmt;

use net_unfold::{UnfoldError, UnflattenedFace, UnflattenedReason};
use wasm_bindgen::prelude::*;

/// Diagnostic severity for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The mesh was rejected; no net was produced
    Error,
    /// The net is usable but incomplete
    Warning,
}

/// A diagnostic message for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const net = unfold(vertices, indices);
/// // const diag = net.diagnostics().get(0);
/// // console.log(diag.message(), diag.face());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    face: Option<u32>,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the severity of the diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Returns the face the diagnostic refers to, if any.
    pub fn face(&self) -> Option<u32> {
        self.face
    }

    /// Converts this diagnostic to a plain JavaScript object.
    ///
    /// This is useful for passing data between the worker and main thread,
    /// as wasm-bindgen wrappers cannot be transferred.
    pub fn to_js_object(&self) -> Result<JsValue, JsValue> {
        use js_sys::{Object, Reflect};

        let obj = Object::new();
        Reflect::set(&obj, &JsValue::from_str("severity"), &JsValue::from(self.severity as i32))?;
        Reflect::set(&obj, &JsValue::from_str("message"), &JsValue::from_str(&self.message))?;
        if let Some(face) = self.face {
            Reflect::set(&obj, &JsValue::from_str("face"), &JsValue::from(face))?;
        }

        Ok(JsValue::from(obj))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", label, self.message)
    }
}

impl From<&UnfoldError> for Diagnostic {
    fn from(err: &UnfoldError) -> Self {
        let face = match err {
            UnfoldError::IndexOutOfRange { face, .. } | UnfoldError::RepeatedVertex { face, .. } => {
                u32::try_from(*face).ok()
            }
            UnfoldError::InvalidSeed { seed, .. } => u32::try_from(*seed).ok(),
            _ => None,
        };
        Self {
            severity: Severity::Error,
            message: err.to_string(),
            face,
        }
    }
}

impl From<&UnflattenedFace> for Diagnostic {
    fn from(unflattened: &UnflattenedFace) -> Self {
        let message = match unflattened.reason {
            UnflattenedReason::Unreached => format!(
                "Face {} is not connected to the seed face",
                unflattened.face.0
            ),
            UnflattenedReason::Blocked => format!(
                "Face {} is cut off from the net by faces that could not be placed",
                unflattened.face.0
            ),
            UnflattenedReason::Rejected { attempts } => format!(
                "Face {} overlaps the net from every neighbor ({} attempts)",
                unflattened.face.0, attempts
            ),
        };
        Self {
            severity: Severity::Warning,
            message,
            face: Some(unflattened.face.0),
        }
    }
}

/// A collection of diagnostics.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct DiagnosticList {
    diagnostics: Vec<Diagnostic>,
}

#[wasm_bindgen]
impl DiagnosticList {
    /// Returns the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if there are no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns a diagnostic by index.
    pub fn get(&self, index: usize) -> Option<Diagnostic> {
        self.diagnostics.get(index).cloned()
    }
}

impl DiagnosticList {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Iterates over the diagnostics in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

impl fmt::Display for DiagnosticList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", messages.join("\n"))
    }
}
