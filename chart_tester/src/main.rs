use biome_trace::core_modules::utils::trace_loader::trace_loader::load_trace;
use biome_trace::pipeline::TracePipeline;
use biome_trace_visualizer::{render_all, ChartConfig};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- 1. Argument Parsing & Setup ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Usage: chart_tester <trace_json_path> <output_dir> [locale]");
        return Ok(());
    }
    let input_path = &args[1];
    let output_dir = &args[2];
    let locale = args.get(3).map_or("en", String::as_str);

    // --- 2. Trace Loading ---
    let trace = load_trace(input_path)?;

    // --- 3. Aggregation ---
    let summary = TracePipeline::summarize(&trace);

    // --- 4. Chart Rendering ---
    let config = ChartConfig {
        out_dir: output_dir.into(),
        locale: locale.to_string(),
        ..Default::default()
    };
    let written = render_all(&config, &summary.sequences).await?;

    println!(
        "Processing complete. {} generations over a {}x{} grid; {} charts saved to {}",
        summary.generations,
        summary.rows,
        summary.columns,
        written.len(),
        output_dir
    );
    Ok(())
}
