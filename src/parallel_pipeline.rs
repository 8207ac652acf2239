use crate::core_modules::grid::EvolutionTrace;
use crate::core_modules::series_builder::{CellStatSequence, SeriesBuilder};
use crate::pipeline::{TracePipeline, TraceSummary};
use anyhow::Context;

/// Worker-pool variant of the trace pipeline. The trace is split into
/// contiguous runs of generations, each run is folded by its own
/// `SeriesBuilder` on a blocking worker, and the partial per-position
/// sequences are concatenated back together in run order.
///
/// The merge is keyed by linear position, which is only meaningful when every
/// generation shares the same grid shape. Traces that do not (and traces too
/// short to be worth splitting) take the sequential path, whose
/// grow-on-first-sight semantics are the reference behavior.
pub struct ParallelTracePipeline {
    workers: usize,
}

impl ParallelTracePipeline {
    pub fn new() -> Self {
        Self::with_workers(num_cpus::get())
    }

    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub async fn summarize(&self, trace: &EvolutionTrace) -> anyhow::Result<TraceSummary> {
        if self.workers < 2 || trace.len() < 2 || !uniform_shape(trace) {
            return Ok(TracePipeline::summarize(trace));
        }

        let run_len = trace.len().div_ceil(self.workers);
        let handles: Vec<_> = trace
            .chunks(run_len)
            .map(|run| {
                let run = run.to_vec();
                tokio::task::spawn_blocking(move || {
                    let mut builder = SeriesBuilder::new();
                    for generation in &run {
                        builder.ingest(generation);
                    }
                    builder.finish()
                })
            })
            .collect();

        let mut sequences: Vec<CellStatSequence> = Vec::new();
        for partial in futures::future::join_all(handles).await {
            let partial = partial.context("aggregation worker failed")?;
            if sequences.is_empty() {
                sequences = partial;
            } else {
                for (idx, series) in partial.into_iter().enumerate() {
                    if idx < sequences.len() {
                        sequences[idx].extend(series);
                    } else {
                        sequences.push(series);
                    }
                }
            }
        }

        Ok(TraceSummary {
            sequences,
            generations: trace.len(),
            rows: trace[0].len(),
            columns: trace[0].first().map_or(0, |row| row.len()),
        })
    }
}

impl Default for ParallelTracePipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn uniform_shape(trace: &EvolutionTrace) -> bool {
    let Some(first) = trace.first() else {
        return true;
    };
    trace.iter().all(|generation| {
        generation.len() == first.len()
            && generation
                .iter()
                .zip(first)
                .all(|(row, reference)| row.len() == reference.len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::cell::cell::Cell;
    use crate::core_modules::grid::Generation;
    use crate::core_modules::unit::unit::{Kind, Unit};

    fn plant_cell(quantity: f64) -> Cell {
        Cell::Ground(vec![Unit {
            id: 1,
            kind: Kind::Plant,
            quantity,
        }])
    }

    fn varied_trace(generations: usize) -> EvolutionTrace {
        (0..generations)
            .map(|g| {
                let generation: Generation = vec![
                    vec![plant_cell(g as f64), Cell::Water],
                    vec![plant_cell(g as f64 * 2.0), plant_cell(1.0)],
                ];
                generation
            })
            .collect()
    }

    #[tokio::test]
    async fn parallel_matches_sequential_on_uniform_trace() {
        let trace = varied_trace(7);
        let parallel = ParallelTracePipeline::with_workers(3)
            .summarize(&trace)
            .await
            .unwrap();
        assert_eq!(parallel, TracePipeline::summarize(&trace));
    }

    #[tokio::test]
    async fn non_uniform_trace_takes_the_sequential_path() {
        let mut trace = varied_trace(4);
        trace[2].push(vec![plant_cell(9.0)]);
        let parallel = ParallelTracePipeline::with_workers(4)
            .summarize(&trace)
            .await
            .unwrap();
        assert_eq!(parallel, TracePipeline::summarize(&trace));
    }

    #[tokio::test]
    async fn empty_trace_yields_empty_summary() {
        let summary = ParallelTracePipeline::new()
            .summarize(&Vec::new())
            .await
            .unwrap();
        assert!(summary.sequences.is_empty());
        assert_eq!(summary.generations, 0);
    }
}
