use boggle::config::ScoringRules;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/board.txt")]
    board: String,

    /// JSON file with scoring rules; explicit --points-* options still win
    #[arg(global = true, long)]
    rules: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Show(cmd::show::ShowArgs),
    Search(cmd::search::SearchArgs),
    Score(cmd::score::ScoreArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("📂 Loading Board: {}", cli.board);
    let grid = boggle::load_board(&cli.board);

    match cli.command {
        Commands::Show(args) => cmd::show::run(args, &grid),
        Commands::Search(args) => {
            let wanted = args.words.len();
            let found = cmd::search::run(args, grid);
            info!("Found {}/{} words", found, wanted);
        }
        Commands::Score(mut args) => {
            if let Some(path) = &cli.rules {
                info!("⚖️  Loading Scoring Rules from: {}", path);
                let mut file_rules = ScoringRules::load_from_file(path).unwrap_or_else(|e| {
                    error!("❌ Failed to load scoring rules '{}': {}", path, e);
                    process::exit(1);
                });
                if let Some(sub_matches) = matches.subcommand_matches("score") {
                    file_rules.merge_from_cli(&args.config.rules, sub_matches);
                }
                args.config.rules = file_rules;
            }

            if let Err(e) = cmd::score::run(args, grid) {
                error!("❌ {}", e);
                process::exit(1);
            }
        }
    }
}
