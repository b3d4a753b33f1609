use crate::consts::{TOKEN_DELIMITER, UNVISITED_MARK};
use crate::grid::Cell;
use serde::Serialize;
use std::cmp::Ordering;

/// The two keys candidates are ranked on. Field order matters: the derived
/// `Ord` compares `matched_count` first, then `score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ScoreProfile {
    pub matched_count: u32,
    pub score: u32,
}

/// Scored snapshot of one complete walk.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    cells: Vec<Cell>,
    token_sequence: String,
    score: u32,
    matched_count: u32,
    matched_indices: Vec<usize>,
    fully_solved: bool,
}

impl Candidate {
    pub(crate) fn new(
        cells: Vec<Cell>,
        token_sequence: String,
        score: u32,
        matched_indices: Vec<usize>,
        fully_solved: bool,
    ) -> Self {
        Self {
            cells,
            token_sequence,
            score,
            matched_count: score.count_ones(),
            matched_indices,
            fully_solved,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Tokens joined with the internal delimiter.
    pub fn token_sequence(&self) -> &str {
        &self.token_sequence
    }

    /// Tokens joined with single spaces, for people.
    pub fn display_sequence(&self) -> String {
        self.token_sequence.replace(TOKEN_DELIMITER, " ")
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn matched_count(&self) -> u32 {
        self.matched_count
    }

    pub fn matched_indices(&self) -> &[usize] {
        &self.matched_indices
    }

    pub fn is_fully_solved(&self) -> bool {
        self.fully_solved
    }

    pub fn profile(&self) -> ScoreProfile {
        ScoreProfile {
            matched_count: self.matched_count,
            score: self.score,
        }
    }

    /// Visit order laid over an `size x size` board: `01`, `02`, ... on
    /// visited cells and `xx` elsewhere, one line per row.
    pub fn render_matrix(&self, size: usize) -> String {
        self.visit_matrix(size)
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|step| match step {
                        Some(i) => format!("{:02}", i),
                        None => UNVISITED_MARK.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 1-based step number at each cell, `None` where the walk never went.
    pub fn visit_matrix(&self, size: usize) -> Vec<Vec<Option<usize>>> {
        let mut matrix = vec![vec![None; size]; size];
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.row < size && cell.col < size {
                matrix[cell.row][cell.col] = Some(i + 1);
            }
        }
        matrix
    }
}

/// Best-first ordering: more matched targets first, then the higher mask.
/// Candidates with the same profile compare equal whatever their path.
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.matched_count
        .cmp(&a.matched_count)
        .then_with(|| b.score.cmp(&a.score))
}
