use serde::{Deserialize, Serialize};

/// A fixed-size grid of 0/1 cells encoding one board.
///
/// Each row is a `(color, kind)` class and each column a linearized square
/// index. Cells default to 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    rows: Vec<Vec<u8>>,
}

impl Record {
    /// Creates an all-zero record of `num_rows × num_columns` cells.
    #[must_use]
    pub fn zeros(num_rows: usize, num_columns: usize) -> Self {
        Self {
            rows: vec![vec![0; num_columns]; num_rows],
        }
    }

    /// Creates a record from explicit row values.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        self.rows.get(row)?.get(column).copied()
    }

    /// Sets a cell to 1. Returns `false` if the cell is outside the record.
    pub(crate) fn mark(&mut self, row: usize, column: usize) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(cell) => {
                *cell = 1;
                true
            }
            None => false,
        }
    }

    /// Number of cells set to 1.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.rows.iter().flatten().filter(|&&c| c == 1).count()
    }
}
