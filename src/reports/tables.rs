use breachforge::candidate::Candidate;
use breachforge::targets::TargetSet;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// One row per distinct-score solution plus a legend of the targets.
pub fn summary(solutions: &[Candidate], targets: &TargetSet) {
    let mut legend = Table::new();
    legend
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    legend.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Target").add_attribute(Attribute::Bold),
        Cell::new("Bit").add_attribute(Attribute::Bold),
    ]);
    for (i, target) in targets.iter().enumerate() {
        legend.add_row(vec![
            Cell::new(i),
            Cell::new(target.tokens().join(" ")),
            Cell::new(1u64 << i).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n{}", legend);

    if solutions.is_empty() {
        println!("\nNo chain matched any target.");
        return;
    }

    let full = targets.full_mask();
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Matched"),
        Cell::new("Targets"),
        Cell::new("Sequence"),
    ]);

    for i in 0..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, c) in solutions.iter().enumerate() {
        let score_cell = if c.score() == full {
            Cell::new(c.score()).fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            Cell::new(c.score())
        };
        table.add_row(vec![
            Cell::new(rank + 1),
            score_cell,
            Cell::new(format!("{}/{}", c.matched_count(), targets.len())),
            Cell::new(
                c.matched_indices()
                    .iter()
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Cell::new(c.display_sequence()),
        ]);
    }
    println!("\n{}", table);
}
