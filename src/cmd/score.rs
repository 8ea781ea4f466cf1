use crate::reports;
use boggle::config::Config;
use boggle::{loader, BoggleBoard, BoggleResult, Grid};
use clap::Args;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Word list file, one word per line
    #[arg(short, long)]
    pub words: String,

    /// Spread the searches across all cores (total only)
    #[arg(long, default_value_t = false, conflicts_with_all = ["json", "show_missing"])]
    pub parallel: bool,

    /// List words that were not found as well
    #[arg(long, default_value_t = false)]
    pub show_missing: bool,

    /// Print the per-word report as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, grid: Grid) -> BoggleResult<u32> {
    let words = loader::read_word_list(&args.words)?;
    info!("📚 Loaded {} candidate words from {}", words.len(), args.words);

    let mut board = BoggleBoard::new(grid, args.config);
    let start = Instant::now();

    let total = if args.parallel {
        let total = board.max_score_parallel(&words);
        println!("Max score: {}", total);
        total
    } else {
        let report = board.score_report(&words);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            reports::print_score_report(&report, args.show_missing);
        }
        report.total
    };

    info!("⏱️  Scored in {:.2?}", start.elapsed());
    Ok(total)
}
