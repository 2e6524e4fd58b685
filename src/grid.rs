use std::ops::{Add, Index};

use itertools::Itertools;
use log::trace;

use crate::{cell::Cell, error::Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Selector {
    pub x: isize,
    pub y: isize,
}

impl Selector {
    pub fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: isize, dy: isize) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Add for Selector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.offset(rhs.x, rhs.y)
    }
}

/// How the slots of a new grid are initialised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Fill {
    /// Every slot holds a dead cell.
    #[default]
    Dead,
    /// Rows are allocated but hold no cells until [`Grid::populate`] runs.
    Reserve,
}

impl From<bool> for Fill {
    fn from(fill: bool) -> Self {
        if fill { Fill::Dead } else { Fill::Reserve }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    rows: Vec<Vec<Cell>>,
}

/// Allocates a `width` x `height` grid, dead-filled when `fill` is set.
pub fn create_grid(width: usize, height: usize, fill: bool) -> Result<Grid, Error> {
    Grid::new(width, height, fill.into())
}

impl Grid {
    pub fn new(width: usize, height: usize, fill: Fill) -> Result<Self, Error> {
        if footprint(width, height).is_none() {
            return Err(Error::InvalidDimension { width, height });
        }
        // A grid without rows has no columns either.
        let width = if height == 0 { 0 } else { width };
        let rows = (0..height)
            .map(|_| match fill {
                Fill::Dead => vec![Cell::dead(); width],
                Fill::Reserve => Vec::with_capacity(width),
            })
            .collect();
        trace!("allocated {width}x{height} grid ({fill:?})");
        Ok(Self { width, rows })
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, Error> {
        let width = rows.first().map_or(0, Vec::len);
        let grid = Self { width, rows };
        grid.validate()?;
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Checks that every row holds exactly `width` cells.
    pub fn validate(&self) -> Result<(), Error> {
        match self.rows.iter().find_position(|row| row.len() != self.width) {
            Some((row, cells)) => Err(Error::MalformedGrid {
                row,
                expected: self.width,
                actual: cells.len(),
            }),
            None => Ok(()),
        }
    }

    pub fn is_populated(&self) -> bool {
        self.validate().is_ok()
    }

    /// Resolves a selector to `(column, row)` indices.
    pub fn locate(&self, selector: Selector) -> Result<(usize, usize), Error> {
        let in_range = |n: isize, len: usize| usize::try_from(n).ok().filter(|&n| n < len);
        match (
            in_range(selector.x, self.width),
            in_range(selector.y, self.height()),
        ) {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => Err(Error::OutOfBounds {
                x: selector.x,
                y: selector.y,
                width: self.width,
                height: self.height(),
            }),
        }
    }

    pub fn get(&self, selector: Selector) -> Option<&Cell> {
        let (x, y) = self.locate(selector).ok()?;
        self.rows[y].get(x)
    }

    pub(crate) fn cell_mut(&mut self, selector: Selector) -> Result<&mut Cell, Error> {
        let (x, y) = self.locate(selector)?;
        let expected = self.width;
        let row = &mut self.rows[y];
        let actual = row.len();
        row.get_mut(x).ok_or(Error::MalformedGrid {
            row: y,
            expected,
            actual,
        })
    }

    /// Row-major iterator over every populated slot.
    pub fn cells(&self) -> impl Iterator<Item = (Selector, &Cell)> {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Selector::new(x as isize, y as isize), cell))
        })
    }

    pub fn population(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_alive()).count()
    }

    /// Overwrites every slot with `f(selector)`, leaving the grid populated.
    pub fn populate(&mut self, mut f: impl FnMut(Selector) -> Cell) {
        let width = self.width;
        for (y, row) in self.rows.iter_mut().enumerate() {
            row.clear();
            row.extend((0..width).map(|x| f(Selector::new(x as isize, y as isize))));
        }
    }

    /// Copies the alive cells of `pattern` into this grid with its top-left
    /// corner at `at`. Cells landing outside the grid are dropped.
    pub fn place(&mut self, pattern: &Grid, at: Selector) {
        for (p, cell) in pattern.cells() {
            if !cell.is_alive() {
                continue;
            }
            if let Ok(target) = self.cell_mut(at + p) {
                *target = Cell::alive();
            }
        }
    }
}

impl Index<Selector> for Grid {
    type Output = Cell;

    fn index(&self, selector: Selector) -> &Self::Output {
        match self.get(selector) {
            Some(cell) => cell,
            None => panic!(
                "no cell at ({}, {}) in a {}x{} grid",
                selector.x,
                selector.y,
                self.width,
                self.height()
            ),
        }
    }
}

// Bytes needed for the row headers and the cells, if a `Vec` can hold them.
fn footprint(width: usize, height: usize) -> Option<usize> {
    let cells = width.checked_mul(height)?.checked_mul(size_of::<Cell>())?;
    let rows = height.checked_mul(size_of::<Vec<Cell>>())?;
    cells
        .checked_add(rows)
        .filter(|&bytes| bytes <= isize::MAX as usize)
}
