use crate::error::BoggleResult;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Board rows from a text source: one row per line, trailing whitespace
/// stripped, blank lines dropped.
pub fn board_lines_from_reader<R: BufRead>(reader: R) -> BoggleResult<Vec<String>> {
    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let row = line.trim_end();
        if row.is_empty() {
            continue;
        }
        rows.push(row.to_string());
    }
    Ok(rows)
}

pub fn read_board_lines<P: AsRef<Path>>(path: P) -> BoggleResult<Vec<String>> {
    let path = path.as_ref();
    debug!("Loading board from: {}", path.display());
    let file = File::open(path)?;
    board_lines_from_reader(BufReader::new(file))
}

/// Candidate words: one per line, trimmed. Blank lines and `#` comments are skipped.
pub fn word_list_from_reader<R: BufRead>(reader: R) -> BoggleResult<Vec<String>> {
    let mut words = Vec::new();
    let mut skipped = 0;
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            skipped += 1;
            continue;
        }
        words.push(word.to_string());
    }

    if skipped > 0 {
        debug!("Skipped {} blank/comment lines in word list", skipped);
    }
    Ok(words)
}

pub fn read_word_list<P: AsRef<Path>>(path: P) -> BoggleResult<Vec<String>> {
    let path = path.as_ref();
    debug!("Loading word list from: {}", path.display());
    let file = File::open(path)?;
    word_list_from_reader(BufReader::new(file))
}
