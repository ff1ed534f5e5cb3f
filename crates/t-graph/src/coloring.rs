//! Greedy first-fit edge coloring.
//!
//! Edges are processed in input order, once, with no backtracking: each edge
//! commits to the smallest class not already held by another edge on either
//! of its endpoints. Later edges route around earlier commitments, never the
//! other way. The result is a valid edge coloring (incident edges always
//! differ) that may use more classes than the graph's chromatic index —
//! acceptable here, where classes only need to look distinct, not be few.

use thiserror::Error;

use crate::adjacency::AdjacencyIndex;
use crate::edge::Edge;

/// An edge whose endpoints coincide.
///
/// A self-loop is incident to itself through both endpoint lists, so no
/// class assignment can ever satisfy it; the input is rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("edge {index} is a self-loop on vertex {vertex}")]
pub struct SelfLoopError {
    /// Position of the offending edge in the input slice.
    pub index: usize,
    /// The vertex both endpoints name.
    pub vertex: usize,
}

/// A total mapping from edge id to color class.
///
/// Produced by [`color_edges`]; one entry per input edge, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeColoring {
    classes: Vec<usize>,
}

impl EdgeColoring {
    /// The class assigned to `edge_id`.
    ///
    /// # Panics
    ///
    /// Panics if `edge_id` is not an id of the colored edge list.
    #[inline]
    #[must_use]
    pub fn class_of(&self, edge_id: usize) -> usize {
        self.classes[edge_id]
    }

    /// All classes, indexed by edge id.
    #[inline]
    #[must_use]
    pub fn classes(&self) -> &[usize] {
        &self.classes
    }

    /// The number of colored edges.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the coloring covers no edges at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The number of distinct classes in use.
    ///
    /// Classes are allocated densely from 0, so this is one past the
    /// largest assigned class.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.iter().max().map_or(0, |largest| largest + 1)
    }
}

/// Color `edges` greedily so that no two edges sharing a vertex share a class.
///
/// Deterministic: the same edge sequence always yields the same assignment.
/// Duplicate edges are legal; each occupies its own id and, sharing both
/// endpoints, they force one another onto distinct classes.
///
/// # Errors
///
/// Returns [`SelfLoopError`] for the first edge whose endpoints coincide.
pub fn color_edges(edges: &[Edge]) -> Result<EdgeColoring, SelfLoopError> {
    if let Some((index, edge)) = edges.iter().enumerate().find(|(_, e)| e.is_loop()) {
        return Err(SelfLoopError {
            index,
            vertex: edge.a,
        });
    }

    let adjacency = AdjacencyIndex::from_edges(edges);
    let mut classes: Vec<usize> = Vec::with_capacity(edges.len());

    for (id, edge) in edges.iter().enumerate() {
        // Only edges before `id` are committed; later incident ids are
        // still unassigned and cannot conflict yet.
        let taken = |candidate: usize| {
            adjacency
                .incident_to(edge.a)
                .iter()
                .chain(adjacency.incident_to(edge.b))
                .any(|&other| other < id && classes[other] == candidate)
        };

        // Pigeonhole: incident edges hold at most `bound` classes between
        // them, so one of the first `bound + 1` candidates is always free.
        let bound = adjacency.degree(edge.a) + adjacency.degree(edge.b);
        let class = (0..=bound)
            .find(|&candidate| !taken(candidate))
            .unwrap_or(bound);
        classes.push(class);
    }

    Ok(EdgeColoring { classes })
}
