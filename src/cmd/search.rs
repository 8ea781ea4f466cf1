use crate::reports;
use boggle::config::SearchParams;
use boggle::{Grid, PathSearch};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub search: SearchParams,

    /// Words to trace on the board
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Draw the path of each word found
    #[arg(long, default_value_t = false)]
    pub show_path: bool,
}

/// Returns how many of the words were found.
pub fn run(args: SearchArgs, mut grid: Grid) -> usize {
    let searcher = PathSearch::new(&args.search);
    let mut found_count = 0;

    for word in &args.words {
        match searcher.find_path(&mut grid, word) {
            Some(path) => {
                found_count += 1;
                println!("✅ {}: found", word);
                if args.show_path {
                    reports::print_board_grid(word, &grid, &path);
                }
            }
            None => println!("❌ {}: not found", word),
        }
    }

    found_count
}
