use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use crate::{cell::Cell, error::Error, grid::Grid};

const ALIVE: char = 'o';
const DEAD: char = '.';

impl FromStr for Grid {
    type Err = Error;

    /// Parses one row per line, `o` alive and `.` dead. Blank lines around
    /// the pattern and indentation shared by all rows are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let indent_of = |l: &str| match l.trim_start().len() {
            0 => None,
            n => Some(l.len() - n),
        };
        let s = s.trim_end();
        let indent = s.lines().filter_map(indent_of).min().unwrap_or_default();
        let rows = s
            .lines()
            .skip_while(|l| l.trim().is_empty())
            .enumerate()
            .map(|(line, l)| {
                let l = l.get(indent..).unwrap_or_else(|| l.trim_start());
                l.trim_end()
                    .chars()
                    .enumerate()
                    .map(|(column, c)| match c {
                        ALIVE => Ok(Cell::alive()),
                        DEAD => Ok(Cell::dead()),
                        found => Err(Error::UnexpectedChar {
                            line,
                            column,
                            found,
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_rows(rows)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.rows().iter().enumerate() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(if cell.is_alive() { ALIVE } else { DEAD })?;
            }
        }
        Ok(())
    }
}
