// SPDX-License-Identifier: MIT
//
// Render configuration. Stock defaults: 1039x697 output rendered at 4x
// and downscaled, 30 scattered points, slate background, chartreuse
// markers.

use t_palette::{BalanceRule, Rgb};

/// Everything one rendering run needs to be reproducible.
///
/// Geometry values (`point_radius`, `line_width`, margins) are expressed in
/// supersampled-canvas pixels, not output pixels: the canvas is
/// `width * supersample` by `height * supersample`, and the final image is
/// downscaled from it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output image width in pixels.
    pub width: u32,
    /// Output image height in pixels.
    pub height: u32,
    /// Antialiasing factor: the canvas is this many times the output size.
    /// `1` disables supersampling.
    pub supersample: u32,
    /// Number of points to scatter.
    pub point_count: usize,
    /// Fraction of the canvas height excluded from the sampling range of
    /// both axes.
    pub margin_frac: f64,
    /// Point marker radius, in canvas pixels.
    pub point_radius: i32,
    /// Edge stroke width, in canvas pixels.
    pub line_width: u32,
    /// Canvas fill color.
    pub background: Rgb,
    /// Marker color; also the flat edge color when per-edge coloring is off.
    pub marker: Rgb,
    /// Color each edge by its conflict-free class instead of drawing every
    /// edge in the marker color.
    pub per_edge_color: bool,
    /// Constraint set for per-class color generation.
    pub balance: BalanceRule,
    /// Seed for the run's random source. One seed fixes the whole image.
    pub seed: u64,
}

impl RenderConfig {
    /// Canvas width: output width times the supersample factor.
    #[must_use]
    pub const fn canvas_width(&self) -> u32 {
        self.width * self.effective_supersample()
    }

    /// Canvas height: output height times the supersample factor.
    #[must_use]
    pub const fn canvas_height(&self) -> u32 {
        self.height * self.effective_supersample()
    }

    /// The supersample factor with the degenerate `0` treated as `1`.
    #[must_use]
    pub const fn effective_supersample(&self) -> u32 {
        if self.supersample == 0 {
            1
        } else {
            self.supersample
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1039,
            height: 697,
            supersample: 4,
            point_count: 30,
            margin_frac: 0.15,
            point_radius: 20,
            line_width: 4,
            background: Rgb::new(70, 84, 87),
            marker: Rgb::new(205, 240, 41),
            per_edge_color: true,
            balance: BalanceRule::VIVID,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_is_output_times_supersample() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.canvas_width(), 1039 * 4);
        assert_eq!(cfg.canvas_height(), 697 * 4);
    }

    #[test]
    fn zero_supersample_degrades_to_one() {
        let cfg = RenderConfig {
            supersample: 0,
            ..RenderConfig::default()
        };
        assert_eq!(cfg.canvas_width(), 1039);
        assert_eq!(cfg.canvas_height(), 697);
    }
}
