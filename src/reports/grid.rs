use breachforge::candidate::Candidate;
use breachforge::consts::UNVISITED_MARK;
use breachforge::grid::Grid;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

pub fn print_board(name: &str, grid: &Grid) {
    println!("\n{}:", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in grid.rows() {
        let cells: Vec<Cell> = row
            .iter()
            .map(|token| Cell::new(token).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_solution(candidate: &Candidate, size: usize) {
    println!("\n=== Solution ===");
    println!(
        "Sequence: {} score: {}",
        candidate.display_sequence(),
        candidate.score()
    );
    println!(
        "Completed targets: {}",
        join(candidate.matched_indices().iter())
    );
    println!("Steps: {}", join(candidate.cells().iter()));
    println!("Matrix:");

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    for row in candidate.visit_matrix(size) {
        let cells: Vec<Cell> = row
            .into_iter()
            .map(|step| match step {
                Some(1) => Cell::new("01")
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
                Some(i) => Cell::new(format!("{:02}", i)).add_attribute(Attribute::Bold),
                None => Cell::new(UNVISITED_MARK).fg(Color::DarkGrey),
            })
            .map(|c| c.set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

fn join<T: ToString>(items: impl Iterator<Item = T>) -> String {
    items.map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}
