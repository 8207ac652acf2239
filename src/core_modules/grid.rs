// THEORY:
// The `grid` module fixes the spatial vocabulary of the engine. A generation is
// a 2-D grid of cells (rows of columns); an evolution trace is the ordered
// sequence of generations, earliest first. Flattening a generation in row-major
// order assigns every cell a linear index, and that index is the stable
// identity used to correlate a position across generations: any two
// generations with the same shape yield the same index-to-position mapping.

use crate::core_modules::cell::cell::Cell;

/// One time-step snapshot of the full ecosystem grid, as rows of cells.
pub type Generation = Vec<Vec<Cell>>;

/// The full ordered sequence of generations, index = time step.
pub type EvolutionTrace = Vec<Generation>;

/// Convert a (row, column) position to its row-major linear index.
#[inline]
pub fn linear_index(row: usize, column: usize, columns: usize) -> usize {
    row * columns + column
}

/// Flattens a generation into a row-major sequence of cell references:
/// all cells of row 0 in order, then row 1, and so on. A zero-size grid
/// flattens to an empty sequence.
pub fn flatten_generation(generation: &Generation) -> Vec<&Cell> {
    generation.iter().flat_map(|row| row.iter()).collect()
}
