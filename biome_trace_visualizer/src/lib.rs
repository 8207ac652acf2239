// THEORY:
// The visualizer is the rendering consumer of the aggregation engine. It takes
// the per-position `CellStatSequence` histories produced by `biome_trace` and
// turns each one into a chart image: the three population quantities plotted
// against the generation index, annotated from a label lookup table. The
// visualizer owns everything presentational (colors, localization, output
// paths) and nothing analytical; it never recomputes the series it draws.

use anyhow::Context;
use biome_trace::pipeline::CellStatSequence;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Display strings for one chart: the caption and the legend entry for each of
/// the three population kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLabels {
    pub title: String,
    pub plants: String,
    pub vegetarians: String,
    pub predators: String,
}

impl ChartLabels {
    /// Built-in label tables. `ua` carries the labels of the original tool;
    /// anything unrecognized falls back to English.
    pub fn for_locale(locale: &str) -> Self {
        match locale {
            "ua" => Self {
                title: "Динаміка популяції".to_string(),
                plants: "Рослини".to_string(),
                vegetarians: "Вегетеріанці".to_string(),
                predators: "Хижаки".to_string(),
            },
            _ => Self {
                title: "Population dynamics".to_string(),
                plants: "Plants".to_string(),
                vegetarians: "Vegetarians".to_string(),
                predators: "Predators".to_string(),
            },
        }
    }

    /// Loads a custom label table from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read label file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse label file {}", path.display()))
    }
}

/// Configuration for a chart-rendering run.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Directory receiving one `<position>.png` per grid position.
    pub out_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    pub locale: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("charts"),
            width: 800,
            height: 600,
            locale: "en".to_string(),
        }
    }
}

/// Renders the chart for a single grid position: three line series (plants
/// green, vegetarians yellow, predators red) over the generation index.
pub fn render_position_chart(
    path: &Path,
    sequence: &CellStatSequence,
    labels: &ChartLabels,
    width: u32,
    height: u32,
) -> anyhow::Result<()> {
    let generations = sequence.len();
    let x_max = generations.saturating_sub(1).max(1);

    let mut y_max = sequence
        .plants
        .iter()
        .chain(&sequence.vegetarians)
        .chain(&sequence.predators)
        .copied()
        .fold(0.0f64, f64::max);
    if y_max <= 0.0 {
        y_max = 1.0;
    }

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&labels.title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..x_max, 0.0..(y_max * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("generation")
        .y_desc("quantity")
        .draw()?;

    for (values, label, color) in [
        (&sequence.plants, &labels.plants, GREEN),
        (&sequence.vegetarians, &labels.vegetarians, YELLOW),
        (&sequence.predators, &labels.predators, RED),
    ] {
        let points: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();
        chart
            .draw_series(LineSeries::new(points, &color))?
            .label(label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Renders every position's chart into `config.out_dir` as `<index>.png`.
/// Charts are independent, so each one is rendered on its own blocking worker
/// and the results are collected in position order.
pub async fn render_all(
    config: &ChartConfig,
    sequences: &[CellStatSequence],
) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&config.out_dir).with_context(|| {
        format!(
            "failed to create chart output directory {}",
            config.out_dir.display()
        )
    })?;

    let labels = ChartLabels::for_locale(&config.locale);
    let mut handles = Vec::with_capacity(sequences.len());
    for (idx, sequence) in sequences.iter().enumerate() {
        let path = config.out_dir.join(format!("{idx}.png"));
        let sequence = sequence.clone();
        let mut labels = labels.clone();
        labels.title = format!("{} #{idx}", labels.title);
        let (width, height) = (config.width, config.height);

        handles.push(tokio::task::spawn_blocking(move || {
            render_position_chart(&path, &sequence, &labels, width, height).map(|_| path)
        }));
    }

    let mut written = Vec::with_capacity(handles.len());
    for handle in handles {
        written.push(handle.await.context("chart worker failed")??);
    }
    Ok(written)
}
