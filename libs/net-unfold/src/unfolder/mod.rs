//! # Unfolder
//!
//! Breadth-first unfolding of a [`MeshGraph`] into an [`UnfoldedNet`].
//!
//! ## Algorithm
//!
//! 1. Place the seed face with its first vertex at the origin and its
//!    second on the positive Y axis; keep the first solver candidate.
//! 2. Pop faces from a FIFO queue. For each unvisited neighbor, copy the
//!    shared-edge endpoints from the popped face, solve the third vertex,
//!    and keep the first candidate that does not overlap the net.
//! 3. A neighbor whose candidates both overlap stays unvisited; a later
//!    face may still reach it across another edge.
//! 4. When the queue is empty, every unvisited face is reported as
//!    unflattened: rejected if a placed neighbor tried it, blocked if it is
//!    connected to the seed only through other unflattened faces, and
//!    unreached if it lies in another component.
//!
//! Neighbor order and queue order are fixed by the graph, so identical
//! input always yields bit-identical output.

use std::collections::VecDeque;

use config::constants::UnfoldSettings;
use glam::DVec2;
use tracing::{debug, info, warn};

use crate::error::{Result, UnfoldError};
use crate::graph::{FaceId, MeshGraph, Neighbor};
use crate::net::{Hinge, UnfoldedNet, UnflattenedFace, UnflattenedReason};
use crate::overlap::overlaps;
use crate::solver::place_third_vertex;

/// Traversal state of a face. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceState {
    Unvisited,
    /// Placed, neighbors not yet examined
    Queued,
    /// Placed and expanded
    Flattened,
}

/// Parameters for one unfolding run.
///
/// # Example
///
/// ```rust
/// use net_unfold::UnfoldParams;
///
/// let params = UnfoldParams::new(2, 1e-9).unwrap();
/// assert_eq!(params.seed_face, 2);
/// assert!(UnfoldParams::new(0, -1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnfoldParams {
    /// Face placed first
    pub seed_face: usize,
    /// Tolerance of the overlap predicates
    pub tolerance: f64,
}

impl UnfoldParams {
    /// Creates validated parameters.
    pub fn new(seed_face: usize, tolerance: f64) -> Result<Self> {
        Ok(UnfoldSettings::new(tolerance, seed_face)?.into())
    }

    /// Returns a copy seeded at `seed_face`.
    pub fn with_seed(self, seed_face: usize) -> Self {
        Self { seed_face, ..self }
    }
}

impl From<UnfoldSettings> for UnfoldParams {
    fn from(settings: UnfoldSettings) -> Self {
        Self {
            seed_face: settings.seed_face,
            tolerance: settings.tolerance,
        }
    }
}

impl Default for UnfoldParams {
    fn default() -> Self {
        UnfoldSettings::default().into()
    }
}

/// Bookkeeping owned by a single run.
struct FlattenState {
    states: Vec<FaceState>,
    positions: Vec<Option<[DVec2; 3]>>,
    placed: Vec<FaceId>,
    queue: VecDeque<FaceId>,
    attempts: Vec<u32>,
    hinges: Vec<Hinge>,
}

impl FlattenState {
    fn new(face_count: usize) -> Self {
        Self {
            states: vec![FaceState::Unvisited; face_count],
            positions: vec![None; face_count],
            placed: Vec::with_capacity(face_count),
            queue: VecDeque::with_capacity(face_count),
            attempts: vec![0; face_count],
            hinges: Vec::with_capacity(face_count.saturating_sub(1)),
        }
    }

    #[inline]
    fn state(&self, face: FaceId) -> FaceState {
        self.states[face.index()]
    }

    fn place(&mut self, face: FaceId, positions: [DVec2; 3]) {
        self.positions[face.index()] = Some(positions);
        self.states[face.index()] = FaceState::Queued;
        self.placed.push(face);
        self.queue.push_back(face);
    }

    /// Planar triangles of every face placed so far.
    fn placed_triangles(&self) -> impl Iterator<Item = &[DVec2; 3]> + Clone + '_ {
        self.placed
            .iter()
            .filter_map(|face| self.positions[face.index()].as_ref())
    }

    fn into_net(self, graph: &MeshGraph, seed: FaceId) -> UnfoldedNet {
        let connected = connected_to(graph, seed);
        let unflattened = self
            .states
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == FaceState::Unvisited)
            .map(|(index, _)| {
                let attempts = self.attempts[index];
                let reason = if attempts > 0 {
                    UnflattenedReason::Rejected { attempts }
                } else if connected[index] {
                    UnflattenedReason::Blocked
                } else {
                    UnflattenedReason::Unreached
                };
                UnflattenedFace {
                    face: FaceId(index as u32),
                    reason,
                }
            })
            .collect();

        UnfoldedNet::new(
            self.positions,
            graph.faces().iter().map(|face| face.vertices).collect(),
            self.placed,
            self.hinges,
            unflattened,
        )
    }
}

/// Marks every face sharing an edge path with `seed`, ignoring overlap.
fn connected_to(graph: &MeshGraph, seed: FaceId) -> Vec<bool> {
    let mut seen = vec![false; graph.face_count()];
    let mut stack = vec![seed];
    seen[seed.index()] = true;
    while let Some(face) = stack.pop() {
        for neighbor in graph.neighbors(face) {
            if !seen[neighbor.face.index()] {
                seen[neighbor.face.index()] = true;
                stack.push(neighbor.face);
            }
        }
    }
    seen
}

/// Breadth-first unfolder over a borrowed graph.
///
/// # Example
///
/// ```rust
/// use net_unfold::primitives::create_tetrahedron;
/// use net_unfold::{MeshGraph, UnfoldParams, Unfolder};
///
/// let mesh = create_tetrahedron(1.0).unwrap();
/// let graph = MeshGraph::from_mesh(&mesh).unwrap();
/// let net = Unfolder::new(&graph, UnfoldParams::default()).run().unwrap();
/// assert!(net.is_complete());
/// ```
pub struct Unfolder<'g> {
    graph: &'g MeshGraph,
    params: UnfoldParams,
}

impl<'g> Unfolder<'g> {
    pub fn new(graph: &'g MeshGraph, params: UnfoldParams) -> Self {
        Self { graph, params }
    }

    /// Runs the traversal to completion.
    ///
    /// An empty graph yields an empty net regardless of the seed.
    ///
    /// # Errors
    ///
    /// - [`UnfoldError::InvalidSeed`] if the seed face does not exist
    /// - [`UnfoldError::InvalidParams`] if the tolerance is out of range
    pub fn run(&self) -> Result<UnfoldedNet> {
        let face_count = self.graph.face_count();
        if face_count == 0 {
            return Ok(UnfoldedNet::default());
        }

        let UnfoldParams {
            seed_face,
            tolerance,
        } = self.params;
        UnfoldSettings::new(tolerance, seed_face)?;
        if seed_face >= face_count {
            return Err(UnfoldError::InvalidSeed {
                seed: seed_face,
                face_count,
            });
        }

        info!(faces = face_count, seed = seed_face, "Unfolding mesh");

        let mut state = FlattenState::new(face_count);
        self.place_seed(&mut state, FaceId(seed_face as u32));

        while let Some(face) = state.queue.pop_front() {
            for &neighbor in self.graph.neighbors(face) {
                if state.state(neighbor.face) == FaceState::Unvisited {
                    self.try_place(&mut state, face, neighbor);
                }
            }
            state.states[face.index()] = FaceState::Flattened;
        }

        let net = state.into_net(self.graph, FaceId(seed_face as u32));
        info!(
            flattened = net.flattened_count(),
            unflattened = net.unflattened().len(),
            "Unfold complete"
        );
        if !net.is_complete() {
            warn!(
                count = net.unflattened().len(),
                "Some faces could not be flattened without overlap"
            );
        }
        Ok(net)
    }

    fn place_seed(&self, state: &mut FlattenState, seed: FaceId) {
        let face = self.graph.face(seed);
        let sides = face.sides();
        let p1 = DVec2::ZERO;
        let p2 = DVec2::new(0.0, sides.v1v2);
        let [first, _] = place_third_vertex(p1, p2, &sides);
        state.place(seed, [p1, p2, first]);
    }

    /// Attempts to place `neighbor` across its shared edge with `parent`.
    fn try_place(&self, state: &mut FlattenState, parent: FaceId, neighbor: Neighbor) {
        let edge = neighbor.edge;
        let parent_face = self.graph.face(parent);
        let child_face = self.graph.face(neighbor.face);

        let Some(parent_positions) = state.positions[parent.index()] else {
            return;
        };
        let (Some(slot_a), Some(slot_b)) = (parent_face.slot_of(edge.a), parent_face.slot_of(edge.b))
        else {
            return;
        };
        let Some(sides) = child_face.sides_from(edge.a, edge.b) else {
            return;
        };

        let p1 = parent_positions[slot_a];
        let p2 = parent_positions[slot_b];
        let candidates = place_third_vertex(p1, p2, &sides);
        let chosen = {
            let placed = state.placed_triangles();
            candidates.into_iter().find(|&candidate| {
                !overlaps(candidate, p1, p2, placed.clone(), self.params.tolerance)
            })
        };

        let Some(p3) = chosen else {
            state.attempts[neighbor.face.index()] += 1;
            debug!(
                face = neighbor.face.0,
                parent = parent.0,
                edge_a = edge.a,
                edge_b = edge.b,
                "Both candidates overlap the net"
            );
            return;
        };

        let positions = child_face.vertices.map(|vertex| {
            if vertex == edge.a {
                p1
            } else if vertex == edge.b {
                p2
            } else {
                p3
            }
        });
        state.place(neighbor.face, positions);
        state.hinges.push(Hinge {
            parent,
            child: neighbor.face,
            edge,
        });
    }
}

#[cfg(test)]
mod tests;
