// SPDX-License-Identifier: MIT
//
// triweave — a generative wallpaper renderer.
//
// This is the binary that wires together the crates:
//
//   t-graph   → greedy edge coloring over the triangulation
//   t-palette → balanced per-class colors, memoized per run
//   t-render  → scene composition, rasterization, PNG output
//
// One invocation renders one image:
//
//   CLI args → RenderConfig → t_render::generate_to_file → PNG
//
// The binary owns everything user-facing: argument parsing, palette
// preset selection, seed generation, and log output. When no seed is
// given, a random one is drawn and logged so any run can be reproduced
// exactly with `--seed`.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::RngCore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use t_palette::{BalanceRule, Rgb};
use t_render::RenderConfig;

#[derive(Parser, Debug)]
#[command(
    name = "triweave",
    version,
    about = "Render a triangulated point-field wallpaper"
)]
struct Args {
    /// Output image path; the extension picks the format.
    #[arg(short, long, default_value = "triweave.png")]
    out: PathBuf,

    /// Output width in pixels.
    #[arg(long, default_value_t = 1039, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 697, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Number of points to scatter.
    #[arg(short, long, default_value_t = 30)]
    points: usize,

    /// Seed for the run; drawn at random and logged when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Draw every edge in the marker color instead of per-edge colors.
    #[arg(long)]
    flat: bool,

    /// Balanced-palette preset for per-edge colors.
    #[arg(long, value_enum, default_value = "vivid")]
    palette: Preset,

    /// Background color as #rrggbb.
    #[arg(long, default_value = "#465457", value_parser = parse_rgb)]
    background: Rgb,

    /// Marker color (points, and edges in --flat mode) as #rrggbb.
    #[arg(long, default_value = "#cdf029", value_parser = parse_rgb)]
    marker: Rgb,

    /// Antialiasing factor: render at N times the output size, downscale.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=8))]
    supersample: u32,

    /// Point marker radius in canvas pixels.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(i32).range(0..))]
    point_radius: i32,

    /// Edge stroke width in canvas pixels.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    line_width: u32,

    /// Fraction of the canvas height kept clear of sampled points.
    #[arg(long, default_value_t = 0.15)]
    margin: f64,
}

/// The two observed balanced-palette configurations.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Preset {
    /// Muted window, mid brightness (20..220, mean 150).
    Classic,
    /// Brighter window, higher mean (41..240, mean 162).
    Vivid,
}

impl Preset {
    const fn rule(self) -> BalanceRule {
        match self {
            Self::Classic => BalanceRule::CLASSIC,
            Self::Vivid => BalanceRule::VIVID,
        }
    }
}

fn parse_rgb(s: &str) -> Result<Rgb, String> {
    Rgb::from_hex(s).ok_or_else(|| format!("expected #rrggbb, got `{s}`"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if !(0.0..1.0).contains(&args.margin) {
        bail!("--margin must lie in [0, 1), got {}", args.margin);
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().next_u64());
    info!(seed, points = args.points, "rendering");

    let config = RenderConfig {
        width: args.width,
        height: args.height,
        supersample: args.supersample,
        point_count: args.points,
        margin_frac: args.margin,
        point_radius: args.point_radius,
        line_width: args.line_width,
        background: args.background,
        marker: args.marker,
        per_edge_color: !args.flat,
        balance: args.palette.rule(),
        seed,
    };

    t_render::generate_to_file(&config, &args.out)
        .with_context(|| format!("rendering {}", args.out.display()))
}
