// SPDX-License-Identifier: MIT
//
// t-render — scene composition and rasterization for triweave.
//
// The driver layer around the two leaf crates. It owns the control flow of
// a rendering run:
//
//   RenderConfig + seed
//       │
//       ▼
//   scene.rs:   scatter points, center the cloud, triangulate (mesh.rs)
//       │
//       ▼
//   t-graph:    one coloring pass over the edge list
//       │
//       ▼
//   t-palette:  one RGB lookup per edge class (or the flat color)
//       │
//       ▼
//   raster.rs:  supersampled bitmap, Lanczos downscale, RgbImage
//
// The leaf crates stay pure; everything with a side effect (RNG, pixels,
// files, logs) lives here or above.

use std::path::Path;

use image::RgbImage;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info};

use t_graph::color_edges;
use t_palette::PaletteGenerator;

pub mod config;
pub mod mesh;
pub mod raster;
pub mod scene;

pub use config::RenderConfig;
pub use scene::Scene;

/// A failed rendering run.
///
/// Every variant is a defect in the input or environment; nothing here is
/// transient or retryable.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The edge list contained a self-loop.
    #[error("invalid edge list: {0}")]
    Graph(#[from] t_graph::SelfLoopError),

    /// The drawing backend rejected an operation.
    #[error("raster backend: {0}")]
    Raster(String),

    /// Encoding or writing the output image failed.
    #[error("image output: {0}")]
    Image(#[from] image::ImageError),
}

/// Render one image according to `cfg`.
///
/// The whole run is driven by `cfg.seed`: the scene RNG is seeded from it
/// and the palette RNG is forked from the scene RNG, so equal configs
/// produce byte-identical images.
///
/// # Errors
///
/// See [`RenderError`]. A degenerate scene (no points, collinear points)
/// is not an error; it renders as background plus markers.
pub fn generate(cfg: &RenderConfig) -> Result<RgbImage, RenderError> {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let scene = scene::compose(cfg, &mut rng);
    info!(
        points = scene.points.len(),
        edges = scene.edges.len(),
        "scene composed"
    );

    let edge_colors = if cfg.per_edge_color {
        let coloring = color_edges(&scene.edges)?;
        debug!(classes = coloring.class_count(), "edges colored");

        let mut palette = PaletteGenerator::new(cfg.balance, cfg.marker, StdRng::from_rng(&mut rng));
        (0..scene.edges.len())
            .map(|id| palette.color_for(coloring.class_of(id)))
            .collect()
    } else {
        vec![cfg.marker; scene.edges.len()]
    };

    raster::rasterize(&scene, &edge_colors, cfg)
}

/// Render one image and write it to `path` (format from the extension).
///
/// # Errors
///
/// See [`RenderError`].
pub fn generate_to_file(cfg: &RenderConfig, path: &Path) -> Result<(), RenderError> {
    let image = generate(cfg)?;
    image.save(path)?;
    info!(path = %path.display(), "image written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn test_config() -> RenderConfig {
        RenderConfig {
            width: 96,
            height: 64,
            supersample: 1,
            point_count: 12,
            point_radius: 4,
            line_width: 2,
            seed: 0x7269_7765,
            ..RenderConfig::default()
        }
    }

    fn distinct_colors(image: &RgbImage) -> HashSet<[u8; 3]> {
        image.pixels().map(|p| p.0).collect()
    }

    #[test]
    fn output_has_configured_dimensions() {
        let image = generate(&test_config()).unwrap();
        assert_eq!(image.dimensions(), (96, 64));
    }

    #[test]
    fn same_config_renders_identical_bytes() {
        let cfg = test_config();
        let a = generate(&cfg).unwrap();
        let b = generate(&cfg).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn flat_mode_uses_only_background_and_marker() {
        let cfg = RenderConfig {
            per_edge_color: false,
            ..test_config()
        };
        let image = generate(&cfg).unwrap();

        let bg = cfg.background.channels();
        let marker = cfg.marker.channels();
        for color in distinct_colors(&image) {
            assert!(
                color == [bg.0, bg.1, bg.2] || color == [marker.0, marker.1, marker.2],
                "unexpected color {color:?} in flat mode"
            );
        }
    }

    #[test]
    fn per_edge_mode_adds_colors_beyond_the_flat_pair() {
        let flat = generate(&RenderConfig {
            per_edge_color: false,
            ..test_config()
        })
        .unwrap();
        let colored = generate(&test_config()).unwrap();

        assert!(distinct_colors(&colored).len() > distinct_colors(&flat).len());
    }

    #[test]
    fn empty_point_cloud_renders_pure_background() {
        let cfg = RenderConfig {
            point_count: 0,
            ..test_config()
        };
        let image = generate(&cfg).unwrap();
        let bg = cfg.background.channels();
        assert!(image.pixels().all(|p| p.0 == [bg.0, bg.1, bg.2]));
    }
}
