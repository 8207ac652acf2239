// THEORY:
// This file is the main entry point for the `biome_trace` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like the `chart_tester`
// orchestrator and the visualizer crate).
//
// The primary goal is to export the `TracePipeline` and its associated data
// structures (`TraceSummary`, `CellStatSequence`, etc.) as the clean, high-level
// interface for the entire aggregation engine. The internal modules
// (`core_modules`) hold the data model and the per-layer transforms, providing a
// clean separation of concerns.

pub mod core_modules;
pub mod parallel_pipeline;
pub mod pipeline;
