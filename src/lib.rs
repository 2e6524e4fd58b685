mod cell;
pub mod engine;
mod error;
mod grid;
mod pattern;

#[cfg(test)]
mod tests;

pub use crate::{
    cell::{Cell, Status},
    engine::{next_generation, toggle_cell_state},
    error::Error,
    grid::{Fill, Grid, Selector, create_grid},
};
