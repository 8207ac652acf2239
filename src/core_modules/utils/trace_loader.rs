pub mod trace_loader {
    use crate::core_modules::grid::EvolutionTrace;
    use anyhow::Context;
    use std::path::Path;

    /// Reads an evolution-trace JSON file and deserializes it. This is the
    /// input boundary: malformed cell or kind tags fail here with file
    /// context and never reach the aggregation layers.
    pub fn load_trace(path: impl AsRef<Path>) -> anyhow::Result<EvolutionTrace> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read trace file {}", path.display()))?;
        parse_trace(&raw)
            .with_context(|| format!("failed to parse trace file {}", path.display()))
    }

    /// Deserializes an evolution trace from an in-memory JSON document.
    pub fn parse_trace(raw: &str) -> anyhow::Result<EvolutionTrace> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::trace_loader::{load_trace, parse_trace};
    use crate::core_modules::cell::cell::Cell;
    use crate::core_modules::series_builder::fetch_stats;

    const EXAMPLE_TRACE: &str = r#"[
        [[{"Ground":[{"id":1,"kind":"Plant","quantity":5.0}]}, "Water"]],
        [[{"Ground":[{"id":1,"kind":"Plant","quantity":3.0},
                     {"id":2,"kind":"PredatorAnimal","quantity":1.0}]}, "Water"]]
    ]"#;

    #[test]
    fn example_document_parses_and_aggregates() {
        let trace = parse_trace(EXAMPLE_TRACE).unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace[0][0][1], Cell::Water);

        let sequences = fetch_stats(&trace);
        assert_eq!(sequences[0].plants, vec![5.0, 3.0]);
        assert_eq!(sequences[0].predators, vec![0.0, 1.0]);
        assert_eq!(sequences[1].plants, vec![0.0, 0.0]);
    }

    #[test]
    fn malformed_kind_fails_at_the_boundary() {
        let raw = r#"[[[{"Ground":[{"id":1,"kind":"Fungus","quantity":5.0}]}]]]"#;
        assert!(parse_trace(raw).is_err());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_trace("no_such_trace.json").unwrap_err();
        assert!(err.to_string().contains("no_such_trace.json"));
    }

    #[test]
    fn load_round_trips_a_file_on_disk() {
        let path = std::env::temp_dir().join("biome_trace_loader_test.json");
        std::fs::write(&path, EXAMPLE_TRACE).unwrap();
        let trace = load_trace(&path).unwrap();
        assert_eq!(trace.len(), 2);
        std::fs::remove_file(&path).ok();
    }
}
