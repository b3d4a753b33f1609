#![allow(dead_code)] // Not every test binary uses every helper

use breachforge::grid::{Cell, Grid};
use breachforge::puzzle::Puzzle;
use breachforge::search::{SearchOptions, SearchReport, Searcher, Silent};
use breachforge::targets::TargetSet;

pub fn grid(rows: &[&str]) -> Grid {
    Grid::from_rows(rows).expect("test grid should be valid")
}

pub fn targets(lines: &[&str]) -> TargetSet {
    TargetSet::parse(lines).expect("test targets should be valid")
}

pub fn options(buffer_len: usize) -> SearchOptions {
    SearchOptions {
        buffer_len,
        ..Default::default()
    }
}

pub fn run(grid: &Grid, targets: &TargetSet, opts: SearchOptions) -> SearchReport {
    Searcher::new(grid, targets, opts)
        .expect("search options should be valid")
        .run(&Silent)
}

pub fn sample() -> Puzzle {
    Puzzle::sample()
}

/// Checks the movement rule on a finished walk: pick `i` (0-based) shares
/// a column with pick `i - 1` when `i` is odd and a row when `i` is even,
/// and no cell repeats.
pub fn assert_legal_walk(cells: &[Cell], start: Cell, free_start: bool) {
    if free_start {
        assert_eq!(cells[0].row, start.row, "first pick left the start row");
    } else {
        assert_eq!(cells[0], start, "walk did not begin at the start cell");
    }

    for i in 1..cells.len() {
        let (prev, cur) = (cells[i - 1], cells[i]);
        if i % 2 == 1 {
            assert_eq!(prev.col, cur.col, "pick {} broke column alternation", i);
        } else {
            assert_eq!(prev.row, cur.row, "pick {} broke row alternation", i);
        }
    }

    for (i, a) in cells.iter().enumerate() {
        assert!(
            !cells[i + 1..].contains(a),
            "cell {} visited twice in {:?}",
            a,
            cells
        );
    }
}
