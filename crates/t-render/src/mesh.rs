// SPDX-License-Identifier: MIT
//
// Triangulation adapter. The Delaunay computation itself is delaunator's
// job; this module only flattens its triangle list into the deduplicated
// edge list the coloring engine consumes.

use std::collections::HashSet;

use delaunator::{Point, triangulate};

use t_graph::Edge;

/// The unique undirected edges of the Delaunay triangulation of `points`.
///
/// Edges appear in first-seen order while walking the triangle list, so the
/// result is deterministic for a given point sequence; interior edges shared
/// by two triangles appear once. Degenerate inputs (fewer than three
/// points, all points collinear) produce no triangles and therefore an
/// empty edge list.
#[must_use]
pub fn triangulation_edges(points: &[(i32, i32)]) -> Vec<Edge> {
    let sites: Vec<Point> = points
        .iter()
        .map(|&(x, y)| Point {
            x: f64::from(x),
            y: f64::from(y),
        })
        .collect();

    let triangulation = triangulate(&sites);

    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut edges = Vec::new();
    for triangle in triangulation.triangles.chunks_exact(3) {
        let corners = [
            (triangle[0], triangle[1]),
            (triangle[1], triangle[2]),
            (triangle[2], triangle[0]),
        ];
        for (a, b) in corners {
            let edge = Edge::new(a, b);
            if seen.insert(edge.ordered()) {
                edges.push(edge);
            }
        }
    }
    edges
}
