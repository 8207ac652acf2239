// THEORY:
// The `Unit` module is the most fundamental data type of the aggregation engine.
// A `Unit` is a "dumb" data container: one organism aggregate as the upstream
// simulator recorded it, with an identifier, a population kind, and a biomass
// quantity. Units are immutable snapshot records; the engine reads them and
// never produces or mutates them.
//
// The `Kind` enum is deliberately closed. The wire format carries the kind as
// one of three string tags, and serde's derived deserializer rejects anything
// else, so a malformed kind can never reach the aggregation layers. This is the
// boundary where the "unknown tag" failure mode lives.

pub mod unit {
    use serde::{Deserialize, Serialize};

    /// The three population kinds tracked by the engine.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum Kind {
        Plant,
        /// The original simulator spelled this tag `VegeterianAnimal`; traces it
        /// produced still parse via the alias.
        #[serde(alias = "VegeterianAnimal")]
        VegetarianAnimal,
        PredatorAnimal,
    }

    /// A "dumb" data container representing a single organism aggregate.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Unit {
        /// Identifier assigned by the upstream simulator. Informational only;
        /// aggregation never branches on it.
        pub id: u32,
        /// Which of the three population kinds this unit belongs to.
        pub kind: Kind,
        /// Biomass / population count. Non-negative in well-formed traces.
        pub quantity: f64,
    }
}
