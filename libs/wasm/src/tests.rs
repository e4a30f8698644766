//! Tests for the WASM-facing unfolding helpers.

use super::*;

/// Cube with corners at 0 and 1, as the renderer would upload it.
fn cube_buffers() -> (Vec<f32>, Vec<u32>) {
    let vertices = vec![
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        1.0, 1.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0, //
        1.0, 0.0, 1.0, //
        1.0, 1.0, 1.0, //
        0.0, 1.0, 1.0,
    ];
    let indices = vec![
        0, 2, 1, 0, 3, 2, 4, 5, 6, 4, 6, 7, 0, 1, 5, 0, 5, 4, //
        2, 3, 7, 2, 7, 6, 3, 0, 4, 3, 4, 7, 1, 2, 6, 1, 6, 5,
    ];
    (vertices, indices)
}

/// Tests that a closed cube produces a complete net with matching buffers.
#[test]
fn unfold_cube_produces_complete_net() {
    let (vertices, indices) = cube_buffers();
    let net = unfold_internal(&vertices, &indices, 0).expect("unfolding succeeds");

    assert_eq!(net.face_count(), 12);
    assert_eq!(net.flattened_count(), 12);
    assert!(net.is_complete());
    assert_eq!(net.positions().len(), 12 * 6);
    assert_eq!(net.face_ids().len(), 12);
    assert!(net.unflattened_faces().is_empty());
    assert!(net.diagnostics().is_empty());
}

/// Planar buffers must be finite and reference valid faces.
#[test]
fn unfold_buffers_valid() {
    let (vertices, indices) = cube_buffers();
    let net = unfold_internal(&vertices, &indices, 3).expect("unfolding succeeds");

    for &v in &net.positions() {
        assert!(v.is_finite(), "Planar coordinate should be finite");
    }
    for &id in &net.face_ids() {
        assert!(id < 12, "Face id {} out of range", id);
    }
    assert_eq!(net.net().placement_order()[0].0, 3);
}

/// Tests that a non-manifold mesh is rejected with an error diagnostic.
#[test]
fn unfold_rejects_non_manifold() {
    let vertices = [
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0,
    ];
    let indices = [0, 1, 2, 1, 0, 3, 0, 1, 4];
    let diagnostics = unfold_internal(&vertices, &indices, 0).unwrap_err();

    assert_eq!(diagnostics.len(), 1);
    let diag = diagnostics.get(0).unwrap();
    assert_eq!(diag.severity(), Severity::Error);
    assert!(diag.message().contains("Non-manifold"));
    assert_eq!(diag.face(), None);
}

#[test]
fn unfold_rejects_ragged_buffers() {
    let diagnostics = unfold_internal(&[0.0, 1.0], &[], 0).unwrap_err();
    assert!(diagnostics.to_string().starts_with("error:"));
}

#[test]
fn unfold_rejects_bad_seed() {
    let (vertices, indices) = cube_buffers();
    let diagnostics = unfold_internal(&vertices, &indices, 12).unwrap_err();
    assert_eq!(diagnostics.get(0).unwrap().face(), Some(12));
}

/// Open fan of 70 degree wedges, as f32 buffers.
fn fan_buffers(wedges: u32) -> (Vec<f32>, Vec<u32>) {
    let mut vertices = vec![0.0f32, 0.0, 0.0];
    for i in 0..=wedges {
        let angle = (70.0f64 * i as f64).to_radians();
        vertices.extend([angle.cos() as f32, angle.sin() as f32, 0.0]);
    }
    let indices = (0..wedges).flat_map(|i| [0, i + 1, i + 2]).collect();
    (vertices, indices)
}

/// An overfull fan leaves one face out and reports it as a warning.
#[test]
fn unfold_reports_unflattened_faces() {
    let (vertices, indices) = fan_buffers(6);
    let net = unfold_internal(&vertices, &indices, 0).expect("unfolding succeeds");

    assert!(!net.is_complete());
    assert_eq!(net.unflattened_faces(), vec![5]);
    let diagnostics = net.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    let warning = diagnostics.get(0).unwrap();
    assert_eq!(warning.severity(), Severity::Warning);
    assert_eq!(warning.face(), Some(5));
}

/// A face stranded behind a rejected one is not reported as disconnected.
#[test]
fn unfold_distinguishes_blocked_from_rejected() {
    let (vertices, indices) = fan_buffers(7);
    let net = unfold_internal(&vertices, &indices, 0).expect("unfolding succeeds");
    assert_eq!(net.unflattened_faces(), vec![5, 6]);

    let diagnostics = net.diagnostics();
    let messages: Vec<String> = diagnostics.iter().map(Diagnostic::message).collect();
    assert!(messages[0].contains("overlaps the net"));
    assert!(messages[1].contains("cut off from the net"));
    assert!(!messages[1].contains("not connected"));

    let text = diagnostics.to_string();
    assert_eq!(text.lines().count(), 2);
    assert!(text.lines().all(|line| line.starts_with("warning:")));
}

#[test]
fn net_serializes_to_json() {
    let vertices = [0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0, 0.0];
    let net = unfold_internal(&vertices, &[0, 1, 2], 0).unwrap();
    let json = net.to_json().unwrap();
    assert!(json.contains("\"hinges\":[]"));
    assert!(json.contains("\"unflattened\":[]"));
}
