use crate::config::SearchParams;
use crate::grid::Grid;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tracing::debug;

/// Neighbour steps, in the order a path is extended.
/// The first direction that completes the word wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Direction {
    DownRight,
    Down,
    DownLeft,
    Right,
    Left,
    UpLeft,
    Up,
    UpRight,
}

impl Direction {
    /// (row, col) delta.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::DownRight => (1, 1),
            Direction::Down => (1, 0),
            Direction::DownLeft => (1, -1),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::UpLeft => (-1, -1),
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
        }
    }
}

/// Depth-first word tracer.
///
/// Holds no per-word state: each call marks cells on the grid while extending
/// a path and clears every mark before returning, so the grid reads the same
/// before and after.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSearch {
    ignore_case: bool,
}

impl PathSearch {
    pub fn new(params: &SearchParams) -> Self {
        Self {
            ignore_case: params.ignore_case,
        }
    }

    /// True if `word` can be spelled by a path of adjacent cells, none used twice.
    /// The empty word is never found.
    pub fn search(&self, grid: &mut Grid, word: &str) -> bool {
        let found = self.find_path(grid, word).is_some();
        debug!("search '{}': {}", word, found);
        found
    }

    /// Like [`PathSearch::search`], returning the cells of the first path found.
    pub fn find_path(&self, grid: &mut Grid, word: &str) -> Option<Vec<(usize, usize)>> {
        let letters = word.as_bytes();
        let first = *letters.first()?;

        // A simple path can't be longer than the board
        if letters.len() > grid.cell_count() {
            return None;
        }

        let starts: Vec<(usize, usize)> = grid
            .positions()
            .filter(|&(r, c)| self.matches(grid.cell_at(r, c), first))
            .collect();

        let mut trail = Vec::with_capacity(letters.len());
        for (r, c) in starts {
            if self.search_around(grid, r as isize, c as isize, letters, &mut trail) {
                return Some(trail);
            }
        }
        None
    }

    fn search_around(
        &self,
        grid: &mut Grid,
        row: isize,
        col: isize,
        word_left: &[u8],
        trail: &mut Vec<(usize, usize)>,
    ) -> bool {
        let Some((r, c)) = grid.locate(row, col) else {
            return false;
        };
        if grid.marked_at(r, c) || !self.matches(grid.cell_at(r, c), word_left[0]) {
            return false;
        }

        trail.push((r, c));
        if word_left.len() == 1 {
            return true;
        }

        grid.mark_at(r, c, true);
        let rest = &word_left[1..];
        let found = Direction::iter().any(|dir| {
            let (dr, dc) = dir.offset();
            self.search_around(grid, row + dr, col + dc, rest, trail)
        });
        grid.mark_at(r, c, false);

        if !found {
            trail.pop();
        }
        found
    }

    #[inline(always)]
    fn matches(&self, cell: u8, letter: u8) -> bool {
        if self.ignore_case {
            cell.eq_ignore_ascii_case(&letter)
        } else {
            cell == letter
        }
    }
}

/// Exact-case search with default parameters.
pub fn search(grid: &mut Grid, word: &str) -> bool {
    PathSearch::default().search(grid, word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_order() {
        let offsets: Vec<_> = Direction::iter().map(Direction::offset).collect();
        assert_eq!(
            offsets,
            vec![(1, 1), (1, 0), (1, -1), (0, 1), (0, -1), (-1, -1), (-1, 0), (-1, 1)]
        );
    }

    #[test]
    fn test_first_path_follows_direction_order() {
        // From the centre 'A', both the DownRight and Right neighbours are 'B';
        // DownRight is tried first.
        let mut grid = Grid::from_lines(["XXX", "XAB", "XXB"]).unwrap();
        let path = PathSearch::default().find_path(&mut grid, "AB").unwrap();
        assert_eq!(path, vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_trail_is_unwound_after_dead_end() {
        // The DownLeft 'B' is a dead end; the Right 'B' leads on to 'C'
        let mut grid = Grid::from_lines(["XAB", "BXC"]).unwrap();
        let path = PathSearch::default().find_path(&mut grid, "ABC").unwrap();
        assert_eq!(path, vec![(0, 1), (0, 2), (1, 2)]);
    }
}
