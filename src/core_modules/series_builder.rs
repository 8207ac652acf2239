// THEORY:
// The `SeriesBuilder` is the heart of the aggregation engine. It is the owner
// and operator of the per-position histories: one `CellStatSequence` for every
// linear grid position, each holding the three population quantities of that
// position over time.
//
// Key architectural principles:
// 1.  **Orchestration**: It is not a classifier itself, but a manager. For each
//     generation it flattens the grid, asks every cell for its `CellStats`, and
//     routes the triple to the sequence that owns that linear position.
// 2.  **Grow on first sight**: Sequences are created the first time a linear
//     index appears and appended to on every later appearance. With the usual
//     identical-shape traces this seeds everything on generation 0 and each
//     sequence ends up exactly as long as the trace. When generation shapes
//     differ, the literal behavior of the original tool is preserved rather
//     than masked: indices that first appear mid-trace start shorter sequences,
//     and indices absent from a generation are simply not updated that round.
//     The resulting length divergence is a property of the source data, not an
//     error raised here.
// 3.  **Single deterministic pass**: Ingestion is a plain fold with no failure
//     states, no I/O, and no mutation of the input trace. Sequences only ever
//     grow; nothing is re-ordered after the fact.

use crate::core_modules::cell::cell::CellStats;
use crate::core_modules::grid::{flatten_generation, EvolutionTrace, Generation};
use serde::{Deserialize, Serialize};

/// The per-position time series of the three aggregate quantities. The three
/// vectors are always equal in length: one sample per ingested generation in
/// which this position was present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellStatSequence {
    pub plants: Vec<f64>,
    pub vegetarians: Vec<f64>,
    pub predators: Vec<f64>,
}

impl CellStatSequence {
    fn seeded(stats: CellStats) -> Self {
        Self {
            plants: vec![stats.plants],
            vegetarians: vec![stats.vegetarians],
            predators: vec![stats.predators],
        }
    }

    fn push(&mut self, stats: CellStats) {
        self.plants.push(stats.plants);
        self.vegetarians.push(stats.vegetarians);
        self.predators.push(stats.predators);
    }

    /// Appends another sequence's samples in time order. Used when partial
    /// results built over disjoint generation runs are merged back together.
    pub fn extend(&mut self, later: CellStatSequence) {
        self.plants.extend(later.plants);
        self.vegetarians.extend(later.vegetarians);
        self.predators.extend(later.predators);
    }

    /// Number of generations recorded for this position.
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

/// Accumulates per-position histories across generations, ordered by linear
/// grid position.
#[derive(Debug, Default)]
pub struct SeriesBuilder {
    sequences: Vec<CellStatSequence>,
}

impl SeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one generation into the histories. Generations must be ingested
    /// in trace order; each call appends exactly one sample per position
    /// present in this generation.
    pub fn ingest(&mut self, generation: &Generation) {
        for (idx, cell) in flatten_generation(generation).into_iter().enumerate() {
            let stats = cell.stats();
            if idx < self.sequences.len() {
                self.sequences[idx].push(stats);
            } else {
                self.sequences.push(CellStatSequence::seeded(stats));
            }
        }
    }

    /// Consumes the builder and returns the histories, indexed by linear
    /// position.
    pub fn finish(self) -> Vec<CellStatSequence> {
        self.sequences
    }
}

/// Single-pass convenience fold: ingests the whole trace in order and returns
/// the per-position histories. An empty trace yields an empty sequence.
pub fn fetch_stats(trace: &EvolutionTrace) -> Vec<CellStatSequence> {
    let mut builder = SeriesBuilder::new();
    for generation in trace {
        builder.ingest(generation);
    }
    builder.finish()
}
