use crate::consts::TOKEN_DELIMITER;
use crate::error::{BfResult, BreachError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position on the board, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable square matrix of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    // Row-major
    tokens: Vec<String>,
}

impl Grid {
    /// Builds a grid from rows of tokens, rejecting anything non-square
    /// or any token that could break run matching.
    pub fn new(rows: Vec<Vec<String>>) -> BfResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(BreachError::Validation("Grid has no rows".to_string()));
        }

        let mut tokens = Vec::with_capacity(size * size);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(BreachError::Validation(format!(
                    "Row {} has {} tokens, expected {} (grid must be square)",
                    r,
                    row.len(),
                    size
                )));
            }
            for token in row {
                validate_token(&token)?;
                tokens.push(token);
            }
        }

        Ok(Self { size, tokens })
    }

    /// Convenience constructor from whitespace-separated row strings.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> BfResult<Self> {
        let parsed: Vec<Vec<String>> = rows
            .iter()
            .map(|line| {
                line.as_ref()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<String>>()
            })
            .collect();
        Self::new(parsed)
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Token at `cell`. Panics when the cell lies outside the grid.
    #[inline(always)]
    pub fn get(&self, cell: Cell) -> &str {
        assert!(self.contains(cell), "cell {} outside {}x{} grid", cell, self.size, self.size);
        &self.tokens[cell.row * self.size + cell.col]
    }

    #[inline(always)]
    pub fn index_of(&self, cell: Cell) -> usize {
        cell.row * self.size + cell.col
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.tokens.chunks(self.size)
    }
}

pub(crate) fn validate_token(token: &str) -> BfResult<()> {
    if token.is_empty() {
        return Err(BreachError::Validation("Empty token".to_string()));
    }
    if token.contains(TOKEN_DELIMITER) {
        return Err(BreachError::Validation(format!(
            "Token '{}' contains reserved delimiter '{}'",
            token, TOKEN_DELIMITER
        )));
    }
    if token.chars().any(char::is_whitespace) {
        return Err(BreachError::Validation(format!(
            "Token '{}' contains whitespace",
            token
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_reads_row_major() {
        let grid = Grid::from_rows(&["A B", "C D"]).unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.get(Cell::new(0, 1)), "B");
        assert_eq!(grid.get(Cell::new(1, 0)), "C");
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = Grid::from_rows(&["A B", "C"]).unwrap_err();
        assert!(err.to_string().contains("square"));
    }

    #[test]
    fn test_rejects_delimiter_in_token() {
        assert!(Grid::from_rows(&["A;B"]).is_err());
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds_panics() {
        let grid = Grid::from_rows(&["A"]).unwrap();
        grid.get(Cell::new(1, 0));
    }
}
