mod conv;
mod display;
pub mod errors;
mod grid;
mod shape;
mod utils;
mod windows;

pub use conv::ConvSummary;
pub use grid::Grid;
