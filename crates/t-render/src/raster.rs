// SPDX-License-Identifier: MIT
//
// Rasterization. Draws the scene onto an in-memory RGB canvas through
// plotters' bitmap backend, then downscales by the supersample factor for
// antialiasing. Draw order: background, then point markers, then edges
// on top.

use image::imageops::{self, FilterType};
use image::RgbImage;
use plotters::prelude::*;

use t_palette::Rgb;

use crate::config::RenderConfig;
use crate::scene::Scene;
use crate::RenderError;

/// Rasterize `scene` into the final output image.
///
/// `edge_colors` holds one color per scene edge, in edge-id order. Edge
/// endpoints must index into `scene.points`; `compose` guarantees both.
pub fn rasterize(
    scene: &Scene,
    edge_colors: &[Rgb],
    cfg: &RenderConfig,
) -> Result<RgbImage, RenderError> {
    debug_assert_eq!(scene.edges.len(), edge_colors.len());

    let canvas_w = cfg.canvas_width();
    let canvas_h = cfg.canvas_height();
    let mut buffer = vec![0_u8; canvas_w as usize * canvas_h as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (canvas_w, canvas_h))
            .into_drawing_area();
        root.fill(&brush(cfg.background))
            .map_err(|e| RenderError::Raster(e.to_string()))?;

        for &(x, y) in &scene.points {
            let marker = Circle::new((x, y), cfg.point_radius, brush(cfg.marker).filled());
            root.draw(&marker)
                .map_err(|e| RenderError::Raster(e.to_string()))?;
        }

        for (edge, &color) in scene.edges.iter().zip(edge_colors) {
            let from = scene.points[edge.a];
            let to = scene.points[edge.b];
            let stroke = brush(color).stroke_width(cfg.line_width);
            root.draw(&PathElement::new(vec![from, to], stroke))
                .map_err(|e| RenderError::Raster(e.to_string()))?;
        }

        root.present()
            .map_err(|e| RenderError::Raster(e.to_string()))?;
    }

    let canvas = RgbImage::from_raw(canvas_w, canvas_h, buffer)
        .ok_or_else(|| RenderError::Raster("canvas buffer size mismatch".into()))?;

    if cfg.effective_supersample() == 1 {
        return Ok(canvas);
    }
    Ok(imageops::resize(
        &canvas,
        cfg.width,
        cfg.height,
        FilterType::Lanczos3,
    ))
}

const fn brush(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use t_graph::Edge;

    use super::*;

    fn test_config() -> RenderConfig {
        RenderConfig {
            width: 64,
            height: 48,
            supersample: 1,
            point_radius: 5,
            line_width: 4,
            ..RenderConfig::default()
        }
    }

    fn pixel(image: &RgbImage, x: u32, y: u32) -> Rgb {
        let p = image.get_pixel(x, y);
        Rgb::new(p.0[0], p.0[1], p.0[2])
    }

    #[test]
    fn empty_scene_is_pure_background() {
        let cfg = test_config();
        let scene = Scene {
            points: vec![],
            edges: vec![],
        };
        let image = rasterize(&scene, &[], &cfg).unwrap();

        assert_eq!(image.dimensions(), (64, 48));
        assert!(image.pixels().all(|p| p.0 == [70, 84, 87]));
    }

    #[test]
    fn markers_and_edges_land_where_expected() {
        let cfg = test_config();
        let scene = Scene {
            points: vec![(10, 10), (40, 30)],
            edges: vec![Edge::new(0, 1)],
        };
        let red = Rgb::new(200, 30, 30);
        let image = rasterize(&scene, &[red], &cfg).unwrap();

        // Corner: untouched background.
        assert_eq!(pixel(&image, 0, 0), cfg.background);
        // Inside the first marker disc but clear of the stroke.
        assert_eq!(pixel(&image, 10, 14), cfg.marker);
        // Midpoint of the segment, under the 4px stroke.
        assert_eq!(pixel(&image, 25, 20), red);
    }

    #[test]
    fn edges_draw_over_markers() {
        let cfg = test_config();
        let scene = Scene {
            points: vec![(10, 10), (40, 30)],
            edges: vec![Edge::new(0, 1)],
        };
        let red = Rgb::new(200, 30, 30);
        let image = rasterize(&scene, &[red], &cfg).unwrap();

        // (12, 11) is inside the first marker disc and under the stroke;
        // strokes are drawn after markers, so the stroke wins.
        assert_eq!(pixel(&image, 12, 11), red);
    }

    #[test]
    fn supersampled_output_has_output_dimensions() {
        let cfg = RenderConfig {
            supersample: 2,
            ..test_config()
        };
        let scene = Scene {
            points: vec![(20, 20), (80, 60), (40, 70)],
            edges: vec![],
        };
        let image = rasterize(&scene, &[], &cfg).unwrap();
        assert_eq!(image.dimensions(), (64, 48));
    }
}
