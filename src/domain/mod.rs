mod cell;
mod grid;

pub use cell::Cell;
pub use grid::{Grid, NEIGHBOR_OFFSETS};
