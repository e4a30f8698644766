//! Tests for the breadth-first unfolder.

use super::*;
use crate::primitives::create_tetrahedron;
use approx::assert_abs_diff_eq;
use glam::DVec3;

fn run(vertices: &[DVec3], triangles: &[[u32; 3]]) -> UnfoldedNet {
    let graph = MeshGraph::build(vertices, triangles).unwrap();
    Unfolder::new(&graph, UnfoldParams::default()).run().unwrap()
}

fn assert_point(actual: DVec2, expected: DVec2) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-12);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-12);
}

/// Open fan of 70 degree wedges around the origin. Six or more wedges
/// sweep past a full turn.
fn wedge_fan(wedges: u32) -> (Vec<DVec3>, Vec<[u32; 3]>) {
    let mut vertices = vec![DVec3::ZERO];
    for i in 0..=wedges {
        let angle = (70.0 * i as f64).to_radians();
        vertices.push(DVec3::new(angle.cos(), angle.sin(), 0.0));
    }
    let triangles = (0..wedges).map(|i| [0, i + 1, i + 2]).collect();
    (vertices, triangles)
}

fn overfull_fan() -> (Vec<DVec3>, Vec<[u32; 3]>) {
    wedge_fan(6)
}

#[test]
fn test_params_default_from_config() {
    let params = UnfoldParams::default();
    assert_eq!(params.seed_face, config::constants::DEFAULT_SEED_FACE);
    assert_eq!(params.tolerance, config::constants::PLANAR_EPSILON);
    assert_eq!(params.with_seed(4).seed_face, 4);
}

#[test]
fn test_single_triangle_canonical_placement() {
    let net = run(
        &[
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(5.0, 0.0, 0.0),
            DVec3::new(1.8, 2.4, 0.0),
        ],
        &[[0, 1, 2]],
    );

    let tri = net.face(FaceId(0)).unwrap();
    assert_eq!(tri[0], DVec2::ZERO);
    assert_eq!(tri[1], DVec2::new(0.0, 5.0));
    assert_point(tri[2], DVec2::new(-2.4, 1.8));
    assert!(net.is_complete());
    assert!(net.hinges().is_empty());
}

#[test]
fn test_empty_graph_yields_empty_net() {
    let graph = MeshGraph::build(&[], &[]).unwrap();
    let net = Unfolder::new(&graph, UnfoldParams::default().with_seed(3))
        .run()
        .unwrap();
    assert_eq!(net.face_count(), 0);
    assert!(net.is_complete());
}

#[test]
fn test_invalid_seed() {
    let mesh = create_tetrahedron(1.0).unwrap();
    let graph = MeshGraph::from_mesh(&mesh).unwrap();
    let err = Unfolder::new(&graph, UnfoldParams::default().with_seed(4))
        .run()
        .unwrap_err();
    assert_eq!(
        err,
        UnfoldError::InvalidSeed {
            seed: 4,
            face_count: 4
        }
    );
}

#[test]
fn test_invalid_tolerance() {
    let mesh = create_tetrahedron(1.0).unwrap();
    let graph = MeshGraph::from_mesh(&mesh).unwrap();
    let params = UnfoldParams {
        seed_face: 0,
        tolerance: f64::NAN,
    };
    let err = Unfolder::new(&graph, params).run().unwrap_err();
    assert!(matches!(err, UnfoldError::InvalidParams { .. }));
}

#[test]
fn test_tetrahedron_unfolds_around_seed() {
    let mesh = create_tetrahedron(1.0).unwrap();
    let graph = MeshGraph::from_mesh(&mesh).unwrap();
    let net = Unfolder::new(&graph, UnfoldParams::default()).run().unwrap();

    assert!(net.is_complete());
    assert_eq!(net.flattened_count(), 4);
    assert_eq!(
        net.placement_order(),
        &[FaceId(0), FaceId(1), FaceId(3), FaceId(2)]
    );
    // Every other face hangs off the seed
    assert!(net.hinges().iter().all(|hinge| hinge.parent == FaceId(0)));
    assert_eq!(net.fold_edges().len(), 3);
    assert_eq!(net.cut_edges(&graph).len(), 3);
    assert!(net.max_edge_error(&graph) < 1e-12);
}

#[test]
fn test_hinge_endpoints_are_copied() {
    let mesh = create_tetrahedron(2.0).unwrap();
    let graph = MeshGraph::from_mesh(&mesh).unwrap();
    let net = Unfolder::new(&graph, UnfoldParams::default()).run().unwrap();

    for hinge in net.hinges() {
        for vertex in [hinge.edge.a, hinge.edge.b] {
            let parent = net.planar_position(hinge.parent, vertex).unwrap();
            let child = net.planar_position(hinge.child, vertex).unwrap();
            assert_eq!(parent.x.to_bits(), child.x.to_bits());
            assert_eq!(parent.y.to_bits(), child.y.to_bits());
        }
    }
}

#[test]
fn test_other_seed() {
    let mesh = create_tetrahedron(1.0).unwrap();
    let graph = MeshGraph::from_mesh(&mesh).unwrap();
    let net = Unfolder::new(&graph, UnfoldParams::default().with_seed(2))
        .run()
        .unwrap();

    assert_eq!(net.placement_order()[0], FaceId(2));
    let tri = net.face(FaceId(2)).unwrap();
    assert_eq!(tri[0], DVec2::ZERO);
    assert_abs_diff_eq!(tri[1].y, 1.0, epsilon = 1e-12);
    assert!(net.is_complete());
}

#[test]
fn test_overfull_fan_reports_rejected_face() {
    let (vertices, triangles) = overfull_fan();
    let net = run(&vertices, &triangles);

    assert_eq!(net.flattened_count(), 5);
    assert_eq!(
        net.unflattened(),
        &[UnflattenedFace {
            face: FaceId(5),
            reason: UnflattenedReason::Rejected { attempts: 1 },
        }]
    );
    assert!(net.face(FaceId(5)).is_none());
}

#[test]
fn test_disconnected_component_is_unreached() {
    let vertices = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(5.0, 5.0, 5.0),
        DVec3::new(6.0, 5.0, 5.0),
        DVec3::new(5.0, 6.0, 5.0),
    ];
    let net = run(&vertices, &[[0, 1, 2], [3, 4, 5]]);

    assert_eq!(
        net.unflattened(),
        &[UnflattenedFace {
            face: FaceId(1),
            reason: UnflattenedReason::Unreached,
        }]
    );
}

#[test]
fn test_face_behind_rejected_face_is_blocked() {
    // Face 6 only touches face 5, which overlaps face 0 and stays out.
    let (vertices, triangles) = wedge_fan(7);
    let net = run(&vertices, &triangles);

    assert_eq!(
        net.unflattened(),
        &[
            UnflattenedFace {
                face: FaceId(5),
                reason: UnflattenedReason::Rejected { attempts: 1 },
            },
            UnflattenedFace {
                face: FaceId(6),
                reason: UnflattenedReason::Blocked,
            },
        ]
    );
}

#[test]
fn test_connected_to_ignores_overlap() {
    let (mut vertices, mut triangles) = wedge_fan(7);
    vertices.extend([DVec3::splat(5.0), DVec3::new(6.0, 5.0, 5.0), DVec3::new(5.0, 6.0, 5.0)]);
    triangles.push([9, 10, 11]);
    let graph = MeshGraph::build(&vertices, &triangles).unwrap();

    let connected = connected_to(&graph, FaceId(0));
    assert!(connected[..7].iter().all(|&c| c));
    assert!(!connected[7]);
}

#[test]
fn test_degenerate_face_collapses_onto_line() {
    let vertices = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(2.0, 0.0, 0.0),
    ];
    let net = run(&vertices, &[[0, 1, 2], [0, 1, 3]]);

    assert!(net.is_complete());
    let tri = net.face(FaceId(1)).unwrap();
    assert_point(tri[2], DVec2::new(0.0, 2.0));
}

#[test]
fn test_flatten_state_transitions() {
    let mut state = FlattenState::new(2);
    assert_eq!(state.state(FaceId(1)), FaceState::Unvisited);

    state.place(FaceId(1), [DVec2::ZERO, DVec2::X, DVec2::Y]);
    assert_eq!(state.state(FaceId(1)), FaceState::Queued);
    assert_eq!(state.queue.front(), Some(&FaceId(1)));
    assert_eq!(state.placed_triangles().count(), 1);
}

#[test]
fn test_runs_are_bit_identical() {
    let (vertices, triangles) = overfull_fan();
    let graph = MeshGraph::build(&vertices, &triangles).unwrap();
    let unfolder = Unfolder::new(&graph, UnfoldParams::default());
    let first = unfolder.run().unwrap();
    let second = unfolder.run().unwrap();

    let bits = |net: &UnfoldedNet| -> Vec<u64> {
        net.faces()
            .flat_map(|(_, tri)| tri.iter().flat_map(|p| [p.x.to_bits(), p.y.to_bits()]))
            .collect()
    };
    assert_eq!(bits(&first), bits(&second));
    assert_eq!(first, second);
}
