use crate::candidate::Candidate;
use crate::consts::TOKEN_DELIMITER;
use crate::grid::{Cell, Grid};
use crate::targets::{frame, TargetSet};

/// Turns a walk into a scored [`Candidate`]. Holds only shared references,
/// so one scorer serves the whole search.
#[derive(Debug, Clone, Copy)]
pub struct PathScorer<'a> {
    grid: &'a Grid,
    targets: &'a TargetSet,
    full_mask: u32,
}

impl<'a> PathScorer<'a> {
    pub fn new(grid: &'a Grid, targets: &'a TargetSet) -> Self {
        Self {
            grid,
            targets,
            full_mask: targets.full_mask(),
        }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn targets(&self) -> &'a TargetSet {
        self.targets
    }

    /// Scores `path` against every target. Panics if a cell is off the grid.
    pub fn score(&self, path: &[Cell]) -> Candidate {
        // ";T0;T1;...;" so targets only line up on whole tokens
        let framed = frame(path.iter().map(|&cell| self.grid.get(cell)));

        let mut score = 0u32;
        let mut matched_indices = Vec::new();
        for (i, target) in self.targets.iter().enumerate() {
            if framed.contains(target.framed()) {
                score |= 1 << i;
                matched_indices.push(i);
            }
        }

        let token_sequence = framed
            .trim_matches(TOKEN_DELIMITER)
            .to_string();

        Candidate::new(
            path.to_vec(),
            token_sequence,
            score,
            matched_indices,
            score == self.full_mask,
        )
    }
}
