use crate::config::ScoringRules;
use crate::grid::Grid;
use crate::search::PathSearch;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordScore {
    pub word: String,
    pub found: bool,
    pub points: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub words: Vec<WordScore>,
    pub total: u32,
}

impl ScoreReport {
    pub fn found_count(&self) -> usize {
        self.words.iter().filter(|w| w.found).count()
    }
}

/// Points for a found word of `len` letters on a board with `rows` rows.
///
/// Highest threshold first. Four letters always score; three letters only on
/// boards with `rules.three_letter_rows` rows.
pub fn points_for_length(len: usize, rows: usize, rules: &ScoringRules) -> u32 {
    match len {
        l if l >= 8 => rules.points_eight_plus,
        7 => rules.points_seven,
        6 => rules.points_six,
        5 => rules.points_five,
        4 => rules.points_four,
        3 if rows == rules.three_letter_rows => rules.points_three,
        _ => 0,
    }
}

fn word_points(searcher: &PathSearch, grid: &mut Grid, word: &str, rules: &ScoringRules) -> u32 {
    if searcher.search(grid, word) {
        points_for_length(word.len(), grid.rows(), rules)
    } else {
        0
    }
}

/// Total points over every word in `words` that can be traced on `grid`.
pub fn max_score<S: AsRef<str>>(
    searcher: &PathSearch,
    grid: &mut Grid,
    words: &[S],
    rules: &ScoringRules,
) -> u32 {
    words
        .iter()
        .map(|w| word_points(searcher, grid, w.as_ref(), rules))
        .sum()
}

/// Same total as [`max_score`], spread across the rayon pool.
///
/// Marks make a single grid unsafe to share between concurrent searches, so
/// each worker traces on its own clone.
pub fn max_score_parallel<S: AsRef<str> + Sync>(
    searcher: &PathSearch,
    grid: &Grid,
    words: &[S],
    rules: &ScoringRules,
) -> u32 {
    words
        .par_iter()
        .map_init(
            || grid.clone(),
            |local, w| word_points(searcher, local, w.as_ref(), rules),
        )
        .sum()
}

/// Per-word breakdown, in input order.
pub fn score_report<S: AsRef<str>>(
    searcher: &PathSearch,
    grid: &mut Grid,
    words: &[S],
    rules: &ScoringRules,
) -> ScoreReport {
    let rows = grid.rows();
    let mut report = ScoreReport::default();

    for w in words {
        let word = w.as_ref();
        let found = searcher.search(grid, word);
        let points = if found {
            points_for_length(word.len(), rows, rules)
        } else {
            0
        };
        report.total += points;
        report.words.push(WordScore {
            word: word.to_string(),
            found,
            points,
        });
    }

    debug!(
        "Scored {} candidates, {} found",
        report.words.len(),
        report.found_count()
    );
    info!("Max score: {}", report.total);
    report
}
