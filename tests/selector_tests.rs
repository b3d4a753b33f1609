mod common;

use breachforge::candidate::compare_candidates;
use breachforge::grid::Cell;
use breachforge::scorer::PathScorer;
use breachforge::selector::{select_best, select_top};
use common::{grid, options, run, sample, targets};
use rstest::rstest;
use std::cmp::Ordering;

#[test]
fn test_sample_selection_one_per_score() {
    let puzzle = sample();
    let report = run(&puzzle.grid, &puzzle.targets, options(6));
    let best = select_best(report.outcome.into_candidates());

    let scores: Vec<u32> = best.iter().map(|c| c.score()).collect();
    assert_eq!(scores, vec![4, 2, 1]);

    // Representatives are the first chains discovered with each score.
    assert_eq!(best[0].display_sequence(), "1C 55 55 55 55 7A");
    assert_eq!(
        best[1].cells(),
        &[
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(5, 1),
            Cell::new(5, 0),
            Cell::new(2, 0),
        ]
    );
}

#[test]
fn test_selection_is_sorted_best_first() {
    let puzzle = sample();
    let report = run(&puzzle.grid, &puzzle.targets, options(8));
    let best = select_best(report.outcome.into_candidates());

    assert_eq!(best.len(), 6);
    for pair in best.windows(2) {
        assert_ne!(
            compare_candidates(&pair[0], &pair[1]),
            Ordering::Greater,
            "{} ranked above {}",
            pair[0].score(),
            pair[1].score()
        );
    }
    // Two matches beat one, then the higher mask wins.
    let scores: Vec<u32> = best.iter().map(|c| c.score()).collect();
    assert_eq!(scores, vec![6, 5, 3, 4, 2, 1]);
}

#[test]
fn test_select_top_truncates() {
    let puzzle = sample();
    let report = run(&puzzle.grid, &puzzle.targets, options(8));
    let top = select_top(report.outcome.into_candidates(), Some(2));
    let scores: Vec<u32> = top.iter().map(|c| c.score()).collect();
    assert_eq!(scores, vec![6, 5]);
}

#[test]
fn test_select_empty() {
    assert!(select_best(Vec::new()).is_empty());
}

#[rstest]
#[case(0b001, 0b010, Ordering::Greater)] // same count, higher mask first
#[case(0b100, 0b011, Ordering::Greater)] // more matches first
#[case(0b011, 0b011, Ordering::Equal)]
#[case(0b110, 0b101, Ordering::Less)]
fn test_comparator(#[case] a: u32, #[case] b: u32, #[case] expected: Ordering) {
    // One single-token target per bit; a walk picks up exactly the bits it reads.
    let g = grid(&["A B C", "D E F", "G H I"]);
    let t = targets(&["A", "B", "C"]);
    let scorer = PathScorer::new(&g, &t);

    let walk_for = |mask: u32| -> Vec<Cell> {
        let mut cells: Vec<Cell> = (0..3)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| Cell::new(0, i))
            .collect();
        cells.push(Cell::new(2, 2));
        cells
    };

    let ca = scorer.score(&walk_for(a));
    let cb = scorer.score(&walk_for(b));
    assert_eq!(ca.score(), a);
    assert_eq!(cb.score(), b);
    assert_eq!(compare_candidates(&ca, &cb), expected);
}
