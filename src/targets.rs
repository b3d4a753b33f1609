//! Target sequences and their bit assignment.
//!
//! Target `i` owns bit `1 << i` of a candidate's score. Because the selector
//! ranks equal match counts by the raw bitmask, a target listed later
//! outweighs every target listed before it combined: with three targets,
//! matching only target 2 (score 4) beats matching only target 0 (score 1),
//! and `[1, 2]` (6) beats `[0, 2]` (5) which beats `[0, 1]` (3). List
//! targets in ascending order of importance.

use crate::consts::{MAX_TARGETS, TOKEN_DELIMITER};
use crate::error::{BfResult, BreachError};
use crate::grid::validate_token;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    tokens: Vec<String>,
    #[serde(skip)]
    framed: String,
}

impl Target {
    pub fn new(tokens: Vec<String>) -> BfResult<Self> {
        if tokens.is_empty() {
            return Err(BreachError::Validation("Target has no tokens".to_string()));
        }
        for t in &tokens {
            validate_token(t)?;
        }
        let framed = frame(tokens.iter().map(String::as_str));
        Ok(Self { tokens, framed })
    }

    /// Parses a whitespace-separated target such as `"7A 1C 55"`.
    pub fn parse(line: &str) -> BfResult<Self> {
        Self::new(line.split_whitespace().map(str::to_string).collect())
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Delimiter-joined form with a leading and trailing delimiter, so a
    /// substring test against an equally framed sequence only ever lines up
    /// on whole tokens.
    #[inline(always)]
    pub(crate) fn framed(&self) -> &str {
        &self.framed
    }

    pub fn joined(&self) -> String {
        self.tokens.join(TOKEN_DELIMITER.to_string().as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetSet {
    targets: Vec<Target>,
}

impl TargetSet {
    pub fn new(targets: Vec<Target>) -> BfResult<Self> {
        if targets.is_empty() {
            return Err(BreachError::Validation("No targets given".to_string()));
        }
        if targets.len() > MAX_TARGETS {
            return Err(BreachError::Validation(format!(
                "{} targets given, at most {} fit in the score mask",
                targets.len(),
                MAX_TARGETS
            )));
        }
        Ok(Self { targets })
    }

    pub fn parse<S: AsRef<str>>(lines: &[S]) -> BfResult<Self> {
        let targets = lines
            .iter()
            .map(|l| Target::parse(l.as_ref()))
            .collect::<BfResult<Vec<_>>>()?;
        Self::new(targets)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.targets.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Target> {
        self.targets.get(index)
    }

    /// All-ones mask over `len()` bits; the score of a fully solved walk.
    pub fn full_mask(&self) -> u32 {
        full_mask(self.targets.len())
    }
}

pub fn full_mask(count: usize) -> u32 {
    match count {
        0 => 0,
        n if n >= MAX_TARGETS => u32::MAX,
        n => (1u32 << n) - 1,
    }
}

pub(crate) fn frame<'a, I: IntoIterator<Item = &'a str>>(tokens: I) -> String {
    let mut out = String::new();
    out.push(TOKEN_DELIMITER);
    for t in tokens {
        out.push_str(t);
        out.push(TOKEN_DELIMITER);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_mask_edges() {
        assert_eq!(full_mask(1), 0b1);
        assert_eq!(full_mask(3), 0b111);
        assert_eq!(full_mask(32), u32::MAX);
    }

    #[test]
    fn test_framed_target() {
        let t = Target::parse("7A 1C 55").unwrap();
        assert_eq!(t.framed(), ";7A;1C;55;");
        assert_eq!(t.joined(), "7A;1C;55");
    }

    #[test]
    fn test_too_many_targets() {
        let lines: Vec<String> = (0..33).map(|i| format!("T{}", i)).collect();
        assert!(TargetSet::parse(&lines).is_err());
    }
}
