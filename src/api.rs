use crate::config::Config;
use crate::grid::Grid;
use crate::loader;
use crate::scoring::{self, ScoreReport};
use crate::search::PathSearch;
use std::path::Path;
use tracing::{info, warn};

/// Reads a board file, substituting [`Grid::fallback`] when the file is
/// missing, unreadable or holds no usable rows.
pub fn load_board<P: AsRef<Path>>(path: P) -> Grid {
    let path = path.as_ref();
    let lines = match loader::read_board_lines(path) {
        Ok(lines) => lines,
        Err(e) => {
            warn!("⚠️  Could not read board '{}': {}. Using fallback board.", path.display(), e);
            return Grid::fallback();
        }
    };

    match Grid::from_lines(&lines) {
        Ok(grid) => {
            info!(
                "📂 Loaded {}-row board ({} cells) from {}",
                grid.rows(),
                grid.cell_count(),
                path.display()
            );
            if !grid.is_rectangular() {
                warn!("⚠️  Board rows differ in length; each row is searched to its own end.");
            }
            grid
        }
        Err(e) => {
            warn!("⚠️  Invalid board '{}': {}. Using fallback board.", path.display(), e);
            Grid::fallback()
        }
    }
}

/// A board together with the search and scoring settings applied to it.
#[derive(Debug, Clone)]
pub struct BoggleBoard {
    grid: Grid,
    searcher: PathSearch,
    config: Config,
}

impl BoggleBoard {
    pub fn new(grid: Grid, config: Config) -> Self {
        Self {
            searcher: PathSearch::new(&config.search),
            grid,
            config,
        }
    }

    pub fn open<P: AsRef<Path>>(path: P, config: Config) -> Self {
        Self::new(load_board(path), config)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn search(&mut self, word: &str) -> bool {
        self.searcher.search(&mut self.grid, word)
    }

    pub fn find_path(&mut self, word: &str) -> Option<Vec<(usize, usize)>> {
        self.searcher.find_path(&mut self.grid, word)
    }

    pub fn max_score<S: AsRef<str>>(&mut self, words: &[S]) -> u32 {
        scoring::max_score(&self.searcher, &mut self.grid, words, &self.config.rules)
    }

    pub fn max_score_parallel<S: AsRef<str> + Sync>(&self, words: &[S]) -> u32 {
        scoring::max_score_parallel(&self.searcher, &self.grid, words, &self.config.rules)
    }

    pub fn score_report<S: AsRef<str>>(&mut self, words: &[S]) -> ScoreReport {
        scoring::score_report(&self.searcher, &mut self.grid, words, &self.config.rules)
    }

    pub fn render(&self) -> String {
        self.grid.render()
    }
}
