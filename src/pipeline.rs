// THEORY:
// The `pipeline` module is the final, top-level API for the aggregation engine.
// It encapsulates the flattener, classifier, and series builder behind a single
// interface: give it an evolution trace, receive per-position population
// histories plus the trace's headline numbers (generation count and grid
// shape). Consumers that stream generations one at a time can drive the same
// pipeline incrementally instead of handing over the whole trace at once.

use crate::core_modules::grid::{EvolutionTrace, Generation};
use crate::core_modules::series_builder::SeriesBuilder;
use serde::{Deserialize, Serialize};

// Re-export the key data structures for the public API.
pub use crate::core_modules::cell::cell::{Cell, CellStats};
pub use crate::core_modules::series_builder::CellStatSequence;
pub use crate::core_modules::unit::unit::{Kind, Unit};

/// The primary output of the pipeline: per-position histories plus the shape
/// of the trace they were built from. `rows`/`columns` reflect generation 0
/// (zero for an empty trace); later generations with a different shape leave
/// their mark as diverging sequence lengths, per the series builder's
/// grow-on-first-sight policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceSummary {
    /// One history per linear grid position, ordered by position index.
    pub sequences: Vec<CellStatSequence>,
    /// Number of generations ingested.
    pub generations: usize,
    /// Row count of generation 0.
    pub rows: usize,
    /// Column count of generation 0's first row.
    pub columns: usize,
}

/// The main, top-level struct for the aggregation engine.
#[derive(Debug, Default)]
pub struct TracePipeline {
    builder: SeriesBuilder,
    generations: usize,
    rows: usize,
    columns: usize,
}

impl TracePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Streaming entry point: folds one generation into the running histories.
    /// The recorded grid shape is taken from the first generation seen.
    pub fn ingest_generation(&mut self, generation: &Generation) {
        if self.generations == 0 {
            self.rows = generation.len();
            self.columns = generation.first().map_or(0, |row| row.len());
        }
        self.builder.ingest(generation);
        self.generations += 1;
    }

    /// Consumes the pipeline and returns the accumulated summary.
    pub fn finish(self) -> TraceSummary {
        TraceSummary {
            sequences: self.builder.finish(),
            generations: self.generations,
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// One-shot entry point: summarizes a complete trace in a single ordered
    /// pass. An empty trace yields an empty summary.
    pub fn summarize(trace: &EvolutionTrace) -> TraceSummary {
        let mut pipeline = Self::new();
        for generation in trace {
            pipeline.ingest_generation(generation);
        }
        pipeline.finish()
    }
}
