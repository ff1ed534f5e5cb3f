//! # t-graph — edge-adjacency graphs and greedy edge coloring
//!
//! The combinatorial core of triweave. Given the edge list of a planar
//! triangulation (or any undirected graph), assigns every edge an integer
//! color class such that no two edges sharing an endpoint receive the same
//! class. Classes are abstract labels; mapping them to visible colors is
//! someone else's job (`t-palette`).
//!
//! # Architecture
//!
//! ```text
//! &[Edge]                      ordered edge list, ids are positions
//!     │
//!     ▼
//! adjacency.rs:  vertex → incident edge ids (built once per run)
//!     │
//!     ▼
//! coloring.rs:   greedy first-fit, single pass, no backtracking
//!     │
//!     ▼
//! EdgeColoring:  edge id → class, total and conflict-free
//! ```
//!
//! The coloring is valid but not minimal: first-fit in input order trades
//! optimality for determinism and a single pass, which is all a decorative
//! renderer needs.

pub mod adjacency;
pub mod coloring;
pub mod edge;

pub use adjacency::AdjacencyIndex;
pub use coloring::{EdgeColoring, SelfLoopError, color_edges};
pub use edge::Edge;
