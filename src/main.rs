// This file is an example of how to use the `biome_trace` library.
// The main library entry point is `src/lib.rs`.

fn main() {
    println!("Biome Trace - Example Runner");
    // In a real application, you would load an evolution trace from disk and
    // summarize it here.
    //
    // Example:
    // let trace = trace_loader::load_trace("experiment0.json")?;
    // let summary = TracePipeline::summarize(&trace);
    // println!("{} positions over {} generations",
    //     summary.sequences.len(), summary.generations);
}
