//! Read-only matrix scans that reduce a matrix to one integer

use super::Matrix;

impl Matrix {
    /// Column whose longest run of vertically adjacent equal values is greatest
    ///
    /// Ties go to the lowest column index. An empty matrix yields 0.
    pub fn longest_run_column(&self) -> usize {
        let mut best_col = 0;
        let mut best_run = 0;

        for c in 0..self.cols {
            let run = self.longest_run_in_column(c);
            if run > best_run {
                best_run = run;
                best_col = c;
            }
        }

        best_col
    }

    fn longest_run_in_column(&self, c: usize) -> usize {
        let mut longest = 0;
        let mut current = 0;
        let mut previous = None;

        for r in 0..self.rows {
            let value = self[(r, c)];
            current = if previous == Some(value) { current + 1 } else { 1 };
            longest = longest.max(current);
            previous = Some(value);
        }

        longest
    }

    /// Number of top-left to bottom-right diagonals without a zero
    ///
    /// Diagonals start on every cell of column 0 and on every cell of
    /// row 0 right of the corner, so an `R x C` matrix has `R + C - 1`.
    pub fn zero_free_diagonals(&self) -> usize {
        if self.is_empty() {
            return 0;
        }

        let starts = (0..self.rows)
            .map(|r| (r, 0))
            .chain((1..self.cols).map(|c| (0, c)));

        starts
            .filter(|&(r0, c0)| {
                (0..)
                    .map(|i| (r0 + i, c0 + i))
                    .take_while(|&(r, c)| r < self.rows && c < self.cols)
                    .all(|cell| self[cell] != 0)
            })
            .count()
    }
}
