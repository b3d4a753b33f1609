mod grid;
mod tables;

pub use self::grid::{print_board, print_solution};
pub use self::tables::summary as print_summary;

use breachforge::candidate::Candidate;
use breachforge::error::BfResult;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub solved: bool,
    pub interrupted: bool,
    pub paths_examined: u64,
    pub collected: usize,
    pub solutions: &'a [Candidate],
}

pub fn print_json(report: &JsonReport<'_>) -> BfResult<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
