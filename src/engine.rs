//! Generation stepping and single-cell edits over a bounded [`Grid`].
//!
//! The grid does not wrap: positions past an edge are simply not
//! neighbours, so a corner cell has three and an edge cell five.

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    cell::{Cell, Status},
    error::Error,
    grid::{Fill, Grid, Selector},
};

/// Relative `(dy, dx)` of the eight surrounding positions, row above first,
/// left to right within each row.
fn offsets() -> impl Iterator<Item = (isize, isize)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
}

fn surrounding(grid: &Grid, selector: Selector) -> impl Iterator<Item = &Cell> {
    offsets().filter_map(move |(dy, dx)| grid.get(selector.offset(dx, dy)))
}

/// The in-bounds neighbours of `selector`, in the order above-left,
/// above, above-right, left, right, below-left, below, below-right.
/// Positions outside the grid are skipped rather than reported as dead.
pub fn neighbors(grid: &Grid, selector: Selector) -> Result<impl Iterator<Item = &Cell>, Error> {
    grid.locate(selector)?;
    Ok(surrounding(grid, selector))
}

pub fn live_neighbors(grid: &Grid, selector: Selector) -> Result<usize, Error> {
    Ok(neighbors(grid, selector)?
        .filter(|cell| cell.is_alive())
        .count())
}

pub fn next_status(status: Status, live_neighbors: usize) -> Status {
    match (status, live_neighbors) {
        (Status::Alive, n) if n != 2 && n != 3 => Status::Dead,
        (Status::Dead, 3) => Status::Alive,
        (status, _) => status,
    }
}

/// Computes the following generation into a new grid. Every cell is derived
/// from `grid` alone, so updates never leak into their neighbours' counts.
pub fn next_generation(grid: &Grid) -> Result<Grid, Error> {
    grid.validate()?;
    let mut next = Grid::new(grid.width(), grid.height(), Fill::Reserve)?;
    next.populate(|selector| {
        let live = surrounding(grid, selector)
            .filter(|cell| cell.is_alive())
            .count();
        Cell::from(next_status(grid[selector].status, live))
    });
    debug!(
        "stepped {}x{} grid, population {} -> {}",
        grid.width(),
        grid.height(),
        grid.population(),
        next.population()
    );
    Ok(next)
}

pub fn toggle_cell_state(grid: &mut Grid, selector: Selector) -> Result<(), Error> {
    let cell = grid.cell_mut(selector)?;
    cell.toggle();
    trace!(
        "toggled ({}, {}) to {:?}",
        selector.x, selector.y, cell.status
    );
    Ok(())
}
