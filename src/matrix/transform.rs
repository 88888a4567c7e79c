//! In-place matrix transforms
//!
//! Cell additions wrap on overflow instead of panicking.

use super::Matrix;

/// Cells of a `rows x cols` matrix in outside-in spiral order
///
/// Starts at the bottom-left corner and runs counter-clockwise:
/// bottom row, right column, top row, left column, next layer.
pub fn spiral_order(rows: usize, cols: usize) -> Vec<(usize, usize)> {
    let mut order = Vec::with_capacity(rows * cols);
    if rows == 0 || cols == 0 {
        return order;
    }

    let (mut top, mut bottom) = (0isize, rows as isize - 1);
    let (mut left, mut right) = (0isize, cols as isize - 1);
    let mut push = |r: isize, c: isize| order.push((r as usize, c as usize));

    while top <= bottom && left <= right {
        for c in left..=right {
            push(bottom, c);
        }
        bottom -= 1;

        for r in (top..=bottom).rev() {
            push(r, right);
        }
        right -= 1;

        if top <= bottom {
            for c in (left..=right).rev() {
                push(top, c);
            }
            top += 1;
        }

        if left <= right {
            for r in top..=bottom {
                push(r, left);
            }
            left += 1;
        }
    }

    order
}

impl Matrix {
    /// Add an increasing counter along an outside-in spiral
    ///
    /// The walk starts at the bottom-left cell with counter 1 and goes
    /// right along the bottom row, up the right column, left along the
    /// top row and down the left column, then repeats on the next inner
    /// layer. Every cell is visited exactly once.
    ///
    /// ```text
    /// 2x2 zeros      3x3 zeros
    /// 4 3            7 6 5
    /// 1 2            8 9 4
    ///                1 2 3
    /// ```
    pub fn spiral_accumulate(&mut self) {
        let order = spiral_order(self.rows, self.cols);
        for (&(r, c), counter) in order.iter().zip(1i64..) {
            let cell = &mut self[(r, c)];
            *cell = cell.wrapping_add(counter);
        }
        log::debug!("Spiral visited {} cells", order.len());
    }

    /// Add 1 to every cell of each nested layer
    ///
    /// Cell `(r, c)` gains `1 + min(r, c, rows-1-r, cols-1-c)`.
    pub fn layer_accumulate(&mut self) {
        self.add_layers(1);
    }

    /// Undo [`Matrix::layer_accumulate`] by subtracting the same pattern
    pub fn inverse_layers(&mut self) {
        self.add_layers(-1);
    }

    fn add_layers(&mut self, delta: i64) {
        let layers = (self.rows.min(self.cols) + 1) / 2;
        for layer in 0..layers {
            for r in layer..self.rows - layer {
                for c in layer..self.cols - layer {
                    let cell = &mut self[(r, c)];
                    *cell = cell.wrapping_add(delta);
                }
            }
        }
    }
}
