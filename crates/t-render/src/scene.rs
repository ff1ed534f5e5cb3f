// SPDX-License-Identifier: MIT
//
// Scene composition: scatter points on the canvas, center their bounding
// box, and triangulate. All coordinates are supersampled-canvas pixels.

use rand::Rng;

use t_graph::Edge;

use crate::config::RenderConfig;
use crate::mesh;

/// A composed scene: centered canvas points plus triangulation edges.
///
/// Edge endpoints index into `points`. The edge list is deduplicated and
/// deterministic for a given point sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// Point positions in canvas pixels.
    pub points: Vec<(i32, i32)>,
    /// Triangulation edges over `points`.
    pub edges: Vec<Edge>,
}

/// Compose a scene from the configuration and a random source.
///
/// Points are drawn uniformly from `[0, canvas - margin]` on each axis,
/// where the margin is a fraction of the canvas height for both axes, then
/// translated so their bounding box is centered on the canvas. Fewer than
/// three usable points simply yield an empty edge list.
pub fn compose<R: Rng>(cfg: &RenderConfig, rng: &mut R) -> Scene {
    let mut points = sample_points(cfg, rng);
    center_on_canvas(&mut points, cfg);
    let edges = mesh::triangulation_edges(&points);
    Scene { points, edges }
}

#[allow(clippy::cast_possible_truncation)]
fn sample_points<R: Rng>(cfg: &RenderConfig, rng: &mut R) -> Vec<(i32, i32)> {
    let canvas_w = cfg.canvas_width() as i32;
    let canvas_h = cfg.canvas_height() as i32;
    // The margin tracks the canvas height on both axes.
    let margin = (f64::from(canvas_h) * cfg.margin_frac) as i32;
    let hi_x = (canvas_w - margin).max(0);
    let hi_y = (canvas_h - margin).max(0);

    (0..cfg.point_count)
        .map(|_| (rng.random_range(0..=hi_x), rng.random_range(0..=hi_y)))
        .collect()
}

/// Translate `points` so their bounding box is centered on the canvas.
///
/// Uses integer arithmetic throughout; the box center lands within a pixel
/// of the canvas center.
#[allow(clippy::cast_possible_truncation)]
fn center_on_canvas(points: &mut [(i32, i32)], cfg: &RenderConfig) {
    let Some(&(first_x, first_y)) = points.first() else {
        return;
    };

    let (mut left, mut right, mut top, mut bottom) = (first_x, first_x, first_y, first_y);
    for &(x, y) in points.iter() {
        left = left.min(x);
        right = right.max(x);
        top = top.min(y);
        bottom = bottom.max(y);
    }

    let canvas_w = cfg.canvas_width() as i32;
    let canvas_h = cfg.canvas_height() as i32;
    let offset_x = canvas_w / 2 - (right - left) / 2 - left;
    let offset_y = canvas_h / 2 - (bottom - top) / 2 - top;

    for point in points.iter_mut() {
        point.0 += offset_x;
        point.1 += offset_y;
    }
}
