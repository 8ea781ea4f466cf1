use crate::error::GridError;
use std::fmt;

/// Rows shown when no usable board source is available.
pub const FALLBACK_ROWS: [&str; 3] = ["BAD", "FILE", "NAME"];

/// A Boggle board: rows of single-byte cells plus a same-shape mark layer.
///
/// The shape is fixed once built. Rows may differ in length; every row is
/// bounded by its own length. Marks flag cells that belong to the path a
/// search is currently extending and are always cleared before that search
/// returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<u8>>,
    marks: Vec<Vec<bool>>,
}

impl Grid {
    pub fn from_lines<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells: Vec<Vec<u8>> = Vec::new();
        for (row, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if let Some(col) = line.chars().position(|ch| !ch.is_ascii()) {
                return Err(GridError::NonAscii { row, col });
            }
            cells.push(line.as_bytes().to_vec());
        }

        if cells.is_empty() {
            return Err(GridError::Empty);
        }
        if let Some(row) = cells.iter().position(|r| r.is_empty()) {
            return Err(GridError::EmptyRow { row });
        }

        let marks = cells.iter().map(|r| vec![false; r.len()]).collect();
        Ok(Self { cells, marks })
    }

    /// The "BAD FILE NAME" board used in place of an unreadable source.
    pub fn fallback() -> Self {
        let cells: Vec<Vec<u8>> = FALLBACK_ROWS.iter().map(|r| r.as_bytes().to_vec()).collect();
        let marks = cells.iter().map(|r| vec![false; r.len()]).collect();
        Self { cells, marks }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.cells.get(row).map(Vec::len)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    pub fn is_rectangular(&self) -> bool {
        let width = self.cells[0].len();
        self.cells.iter().all(|r| r.len() == width)
    }

    /// Checked read of a cell's letter.
    pub fn get(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(GridError::OutOfBounds { row, col })
    }

    pub fn is_marked(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.marks
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(GridError::OutOfBounds { row, col })
    }

    /// Flags or clears a cell as part of the in-progress path.
    /// Every `true` must be paired with a later `false` by the same caller.
    pub fn set_marked(&mut self, row: usize, col: usize, marked: bool) -> Result<(), GridError> {
        let slot = self
            .marks
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(GridError::OutOfBounds { row, col })?;
        *slot = marked;
        Ok(())
    }

    // Unchecked accessors for positions already resolved by `locate`; the
    // search hot path uses these. `get`, `is_marked` and `set_marked` are the
    // bounds-checked public versions.
    #[inline(always)]
    pub(crate) fn cell_at(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    #[inline(always)]
    pub(crate) fn marked_at(&self, row: usize, col: usize) -> bool {
        self.marks[row][col]
    }

    #[inline(always)]
    pub(crate) fn mark_at(&mut self, row: usize, col: usize, marked: bool) {
        self.marks[row][col] = marked;
    }

    /// Resolves signed coordinates (as produced by neighbour offsets) to a
    /// valid cell position.
    pub(crate) fn locate(&self, row: isize, col: isize) -> Option<(usize, usize)> {
        let r = usize::try_from(row).ok()?;
        let c = usize::try_from(col).ok()?;
        if c < self.row_len(r)? {
            Some((r, c))
        } else {
            None
        }
    }

    /// All cell positions, row-major.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| (0..row.len()).map(move |c| (r, c)))
    }

    /// Row-major text: each cell followed by a space, each row by a newline.
    /// Marked cells are shown in lowercase.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cell_count() * 2 + self.rows());
        for (row, marks) in self.cells.iter().zip(&self.marks) {
            for (&b, &marked) in row.iter().zip(marks) {
                let shown = if marked { b.to_ascii_lowercase() } else { b };
                out.push(shown as char);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
