use crate::reports;
use boggle::Grid;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Draw the board as a table instead of plain rows
    #[arg(long, default_value_t = false)]
    pub table: bool,
}

pub fn run(args: ShowArgs, grid: &Grid) {
    if args.table {
        reports::print_board_grid("Board", grid, &[]);
    } else {
        print!("{}", grid);
    }
}
