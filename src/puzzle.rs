use crate::error::{BfResult, BreachError};
use crate::grid::Grid;
use crate::targets::{Target, TargetSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A row or target as written in a puzzle file: either `"7A 1C 55"` or
/// `["7A", "1C", "55"]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenList {
    Joined(String),
    Split(Vec<String>),
}

impl TokenList {
    fn into_tokens(self) -> Vec<String> {
        match self {
            TokenList::Joined(s) => s.split_whitespace().map(normalize_token).collect(),
            TokenList::Split(v) => v.iter().map(|t| normalize_token(t)).collect(),
        }
    }
}

/// On-disk JSON shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleFile {
    pub matrix: Vec<TokenList>,
    pub targets: Vec<TokenList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_len: Option<usize>,
}

/// A validated board plus its targets, and optionally the buffer size the
/// puzzle was published with.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    pub targets: TargetSet,
    pub buffer_len: Option<usize>,
}

const SAMPLE_MATRIX: [&str; 6] = [
    "1C 1C BD E9 55 E9",
    "55 55 E9 7A 55 55",
    "7A E9 E9 7A 1C BD",
    "7A 1C E9 1C 1C 1C",
    "1C 55 6A 55 55 7A",
    "55 BD 7A BD 1C 7A",
];

const SAMPLE_TARGETS: [&str; 3] = ["7A 1C 55", "55 BD 55", "55 55 55 7A"];

impl Puzzle {
    /// Built-in 6x6 board with three targets and an 8-pick buffer.
    pub fn sample() -> Self {
        let file = PuzzleFile {
            matrix: SAMPLE_MATRIX
                .iter()
                .map(|s| TokenList::Joined(s.to_string()))
                .collect(),
            targets: SAMPLE_TARGETS
                .iter()
                .map(|s| TokenList::Joined(s.to_string()))
                .collect(),
            buffer_len: Some(8),
        };
        // The sample is a fixed literal; failing here is a build defect.
        Self::from_file_data(file).unwrap_or_else(|e| panic!("invalid built-in puzzle: {}", e))
    }

    pub fn from_file_data(file: PuzzleFile) -> BfResult<Self> {
        let rows = file.matrix.into_iter().map(TokenList::into_tokens).collect();
        let grid = Grid::new(rows)?;

        let targets = file
            .targets
            .into_iter()
            .map(|t| Target::new(t.into_tokens()))
            .collect::<BfResult<Vec<_>>>()?;
        let targets = TargetSet::new(targets)?;

        Ok(Self {
            grid,
            targets,
            buffer_len: file.buffer_len,
        })
    }

    pub fn to_file_data(&self) -> PuzzleFile {
        PuzzleFile {
            matrix: self
                .grid
                .rows()
                .map(|row| TokenList::Joined(row.join(" ")))
                .collect(),
            targets: self
                .targets
                .iter()
                .map(|t| TokenList::Joined(t.tokens().join(" ")))
                .collect(),
            buffer_len: self.buffer_len,
        }
    }

    /// Loads a puzzle from disk. `.json` files are parsed as JSON, anything
    /// else as the text format. `-` reads stdin and sniffs the format.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BfResult<Self> {
        let path = path.as_ref();
        if path.as_os_str() == "-" {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            debug!("Read {} bytes of puzzle from stdin", content.len());
            return Self::parse_str(&content);
        }

        let content = fs::read_to_string(path).map_err(|e| {
            BreachError::Config(format!("Could not read puzzle at '{}': {}", path.display(), e))
        })?;
        debug!("Read {} bytes of puzzle from {}", content.len(), path.display());

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_str(&content)
        }
    }

    /// JSON when the content starts with `{`, text otherwise.
    pub fn parse_str(content: &str) -> BfResult<Self> {
        if content.trim_start().starts_with('{') {
            Self::parse_json(content)
        } else {
            Self::parse_text(content)
        }
    }

    pub fn parse_json(content: &str) -> BfResult<Self> {
        let file: PuzzleFile = serde_json::from_str(content)?;
        Self::from_file_data(file)
    }

    /// Text format:
    ///
    /// ```text
    /// # comment
    /// buffer 8
    /// 1C 1C BD
    /// 55 55 E9
    /// 7A E9 E9
    ///
    /// 7A 1C
    /// 55 BD 55
    /// ```
    ///
    /// Grid rows come first, a blank line separates them from one target per
    /// line. The `buffer` directive may appear on any line.
    pub fn parse_text(content: &str) -> BfResult<Self> {
        let mut matrix = Vec::new();
        let mut targets = Vec::new();
        let mut buffer_len = None;
        let mut in_targets = false;

        for (line_no, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.starts_with('#') {
                continue;
            }
            if line.is_empty() {
                if !matrix.is_empty() {
                    in_targets = true;
                }
                continue;
            }
            if let Some(rest) = line.strip_prefix("buffer") {
                if rest.starts_with(char::is_whitespace) {
                    let n = rest.trim().parse::<usize>().map_err(|_| {
                        BreachError::Validation(format!(
                            "Line {}: bad buffer directive '{}'",
                            line_no + 1,
                            line
                        ))
                    })?;
                    buffer_len = Some(n);
                    continue;
                }
            }

            let list = TokenList::Joined(line.to_string());
            if in_targets {
                targets.push(list);
            } else {
                matrix.push(list);
            }
        }

        if targets.is_empty() {
            return Err(BreachError::Validation(
                "No targets found (expected a blank line after the grid, then one target per line)"
                    .to_string(),
            ));
        }

        Self::from_file_data(PuzzleFile {
            matrix,
            targets,
            buffer_len,
        })
    }
}

/// Tokens are compared case-insensitively by upper-casing at load.
fn normalize_token(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_square() {
        let p = Puzzle::sample();
        assert_eq!(p.grid.size(), 6);
        assert_eq!(p.targets.len(), 3);
        assert_eq!(p.buffer_len, Some(8));
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token(" 7a "), "7A");
    }
}
