use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("a {width}x{height} grid does not fit in memory")]
    InvalidDimension { width: usize, height: usize },
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },
    #[error("row {row} holds {actual} cells, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unexpected character {found:?} at line {line}, column {column}")]
    UnexpectedChar {
        line: usize,
        column: usize,
        found: char,
    },
}
