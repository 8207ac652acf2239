pub mod cell;
pub mod grid;
pub mod series_builder;
pub mod unit;
pub mod utils;
