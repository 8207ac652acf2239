// THEORY:
// The `Cell` module represents one grid location of the ecosystem at one
// instant, and carries the classifier that summarizes it. It bridges the gap
// between the raw unit records and the time-series layer above.
//
// Key architectural principles:
// 1.  **Closed variants**: A cell is either `Water` (holds nothing) or `Ground`
//     (holds an ordered sequence of units). The wire format maps directly onto
//     serde's externally tagged representation: the bare string `"Water"` and
//     the object `{"Ground": [unit, ...]}`.
// 2.  **Summation, not inspection**: The core operation of a cell is `stats`.
//     It folds the unit list into three per-kind quantity sums. Unit order is
//     irrelevant to the result; only the sums matter downstream.
// 3.  **Infallible classification**: `stats` cannot fail. A value that exists
//     at this layer already satisfies the data model, because the boundary
//     (serde) rejected anything else.
//
// The output of a `Cell` (its `CellStats` triple) becomes the input for the
// series builder, which strings the triples into per-position histories.

pub mod cell {
    use crate::core_modules::unit::unit::{Kind, Unit};
    use serde::{Deserialize, Serialize};

    /// One grid location at one instant.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub enum Cell {
        /// Holds no units. Always classifies to zeros.
        Water,
        /// Holds the organism aggregates present at this location.
        Ground(Vec<Unit>),
    }

    /// The summed quantity of each population kind in one cell. Derived and
    /// ephemeral; never persisted on its own.
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct CellStats {
        pub plants: f64,
        pub vegetarians: f64,
        pub predators: f64,
    }

    impl CellStats {
        /// Total biomass across all three kinds.
        pub fn total(&self) -> f64 {
            self.plants + self.vegetarians + self.predators
        }
    }

    impl Cell {
        /// Classifies this cell into its per-kind quantity sums.
        /// Water always yields zeros for all three kinds.
        pub fn stats(&self) -> CellStats {
            let mut stats = CellStats::default();
            if let Cell::Ground(units) = self {
                for unit in units {
                    match unit.kind {
                        Kind::Plant => stats.plants += unit.quantity,
                        Kind::VegetarianAnimal => stats.vegetarians += unit.quantity,
                        Kind::PredatorAnimal => stats.predators += unit.quantity,
                    }
                }
            }
            stats
        }
    }
}

#[cfg(test)]
mod tests {
    use super::cell::{Cell, CellStats};
    use crate::core_modules::unit::unit::{Kind, Unit};

    fn unit(id: u32, kind: Kind, quantity: f64) -> Unit {
        Unit { id, kind, quantity }
    }

    #[test]
    fn water_yields_zeros() {
        assert_eq!(Cell::Water.stats(), CellStats::default());
    }

    #[test]
    fn empty_ground_yields_zeros() {
        assert_eq!(Cell::Ground(Vec::new()).stats(), CellStats::default());
    }

    #[test]
    fn ground_sums_each_kind_separately() {
        let cell = Cell::Ground(vec![
            unit(1, Kind::Plant, 5.0),
            unit(2, Kind::Plant, 2.5),
            unit(3, Kind::VegetarianAnimal, 1.0),
            unit(4, Kind::PredatorAnimal, 0.25),
        ]);
        let stats = cell.stats();
        assert_eq!(stats.plants, 7.5);
        assert_eq!(stats.vegetarians, 1.0);
        assert_eq!(stats.predators, 0.25);
    }

    #[test]
    fn aggregates_conserve_total_quantity() {
        let units = vec![
            unit(1, Kind::Plant, 3.0),
            unit(2, Kind::VegetarianAnimal, 4.0),
            unit(3, Kind::PredatorAnimal, 5.0),
            unit(4, Kind::VegetarianAnimal, 6.0),
        ];
        let total: f64 = units.iter().map(|u| u.quantity).sum();
        assert_eq!(Cell::Ground(units).stats().total(), total);
    }

    #[test]
    fn classification_is_idempotent() {
        let cell = Cell::Ground(vec![
            unit(1, Kind::Plant, 1.5),
            unit(2, Kind::PredatorAnimal, 2.5),
        ]);
        assert_eq!(cell.stats(), cell.stats());
    }

    #[test]
    fn water_parses_from_bare_tag() {
        let cell: Cell = serde_json::from_str("\"Water\"").unwrap();
        assert_eq!(cell, Cell::Water);
    }

    #[test]
    fn ground_parses_from_tagged_container() {
        let cell: Cell =
            serde_json::from_str(r#"{"Ground":[{"id":1,"kind":"Plant","quantity":5.0}]}"#)
                .unwrap();
        assert_eq!(
            cell,
            Cell::Ground(vec![unit(1, Kind::Plant, 5.0)])
        );
    }

    #[test]
    fn unknown_cell_tag_is_rejected() {
        assert!(serde_json::from_str::<Cell>("\"Lava\"").is_err());
        assert!(serde_json::from_str::<Cell>(r#"{"Sky":[]}"#).is_err());
    }
}
