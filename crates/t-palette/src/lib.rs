//! # t-palette — balanced-brightness color generation
//!
//! Turns the abstract color classes produced by `t-graph` into visible RGB
//! values. Independent of the graph crate: all it sees is "some integer id
//! wants a color".
//!
//! # Architecture
//!
//! ```text
//! BalanceRule (min/max/mean/step, validated at construction)
//!     │
//!     ▼
//! generator.rs:  draw two channels, derive the third, repair into window
//!     │
//!     ▼
//! PaletteGenerator:  class id → Rgb, memoized per run, seeded RNG
//! ```
//!
//! The "balanced" constraint pins every generated color's channel sum to
//! `mean * 3`: colors differ in hue but share a perceived brightness, so a
//! multicolored mesh still reads as one piece. Reproducibility comes from
//! the injected random source, never from global state.

pub mod balance;
pub mod generator;
pub mod rgb;

pub use balance::{BalanceError, BalanceRule};
pub use generator::PaletteGenerator;
pub use rgb::Rgb;
