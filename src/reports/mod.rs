use boggle::scoring::ScoreReport;
use boggle::Grid;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Board as a table; cells on `path` are highlighted with their step number.
pub fn print_board_grid(title: &str, grid: &Grid, path: &[(usize, usize)]) {
    println!("\n{}", title);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in 0..grid.rows() {
        let width = grid.row_len(row).unwrap_or(0);
        let cells: Vec<Cell> = (0..width)
            .map(|col| {
                let letter = grid.get(row, col).map(|b| b as char).unwrap_or(' ');
                match path.iter().position(|&p| p == (row, col)) {
                    Some(step) => Cell::new(format!("{}{}", letter, step + 1))
                        .fg(Color::Green)
                        .add_attribute(Attribute::Bold)
                        .set_alignment(CellAlignment::Center),
                    None => Cell::new(letter.to_string()).set_alignment(CellAlignment::Center),
                }
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_score_report(report: &ScoreReport, show_missing: bool) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Len"),
        Cell::new("Found"),
        Cell::new("Points").fg(Color::Cyan),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for w in &report.words {
        if !w.found && !show_missing {
            continue;
        }
        let found = if w.found {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(&w.word),
            Cell::new(w.word.len()),
            found,
            Cell::new(w.points).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
    println!(
        "Found {}/{} words. Max score: {}",
        report.found_count(),
        report.words.len(),
        report.total
    );
}
