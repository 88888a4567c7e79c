//! Matrix module - integer matrices with in-place transforms and scans
//!
//! This module provides:
//! - `Matrix` with fixed-capacity or dynamically sized storage
//! - Transforms: spiral accumulation, nested-layer accumulation
//! - Scans: longest-run column, zero-free diagonal count
//! - Text I/O and the `run` entry point used by the `matrix-scan` binary
//!
//! ## Storage Modes
//!
//! - `Fixed` keeps the cells in one preallocated block of
//!   `FIXED_MAX_DIM x FIXED_MAX_DIM` values; larger inputs are rejected
//! - `Dynamic` allocates exactly `rows * cols` cells

mod io;
mod scan;
mod transform;

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use io::{process, read_matrix, run, write_matrix};
pub use transform::spiral_order;

/// Largest row or column count accepted in fixed storage
pub const FIXED_MAX_DIM: usize = 100;

/// Number of cells in fixed storage
pub const FIXED_CAPACITY: usize = FIXED_MAX_DIM * FIXED_MAX_DIM;

/// Errors that can occur while loading, transforming or saving a matrix
#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid matrix data: {0}")]
    InvalidData(String),

    #[error("Matrix data ends after {found} of {expected} values")]
    Truncated { expected: usize, found: usize },

    #[error("Matrix {rows}x{cols} does not fit fixed storage of {max}x{max}")]
    TooLarge { rows: usize, cols: usize, max: usize },

    #[error("Failed to allocate {0} cells")]
    OutOfMemory(usize),
}

impl MatrixError {
    /// Process exit code for this failure
    ///
    /// Every data, size and I/O failure maps to 2; bad arguments (1) are
    /// detected before a `MatrixError` can exist.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// How matrix cells are stored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageMode {
    Fixed,
    Dynamic,
}

impl StorageMode {
    /// Parse the command line mode: `1` = fixed, `2` = dynamic
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.trim() {
            "1" => Some(StorageMode::Fixed),
            "2" => Some(StorageMode::Dynamic),
            _ => None,
        }
    }
}

/// Which transform/summary pair a job runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixVariant {
    /// Spiral accumulation, summary = column with the longest run
    #[default]
    Spiral,
    /// Nested-layer accumulation, summary = zero-free diagonal count
    Layers,
}

enum Storage {
    Fixed(Box<[i64; FIXED_CAPACITY]>),
    Dynamic(Vec<i64>),
}

/// A rectangular integer matrix stored row-major
pub struct Matrix {
    rows: usize,
    cols: usize,
    storage: Storage,
}

impl Matrix {
    /// Create a zero-filled matrix
    pub fn new(rows: usize, cols: usize, mode: StorageMode) -> Result<Self, MatrixError> {
        let len = rows.checked_mul(cols).ok_or(MatrixError::TooLarge {
            rows,
            cols,
            max: usize::MAX,
        })?;

        let storage = match mode {
            StorageMode::Fixed => {
                if rows > FIXED_MAX_DIM || cols > FIXED_MAX_DIM {
                    return Err(MatrixError::TooLarge {
                        rows,
                        cols,
                        max: FIXED_MAX_DIM,
                    });
                }
                Storage::Fixed(Box::new([0; FIXED_CAPACITY]))
            }
            StorageMode::Dynamic => {
                let mut cells = Vec::new();
                cells
                    .try_reserve_exact(len)
                    .map_err(|_| MatrixError::OutOfMemory(len))?;
                cells.resize(len, 0);
                Storage::Dynamic(cells)
            }
        };

        Ok(Self {
            rows,
            cols,
            storage,
        })
    }

    /// Create a dynamic matrix from row-major values
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<i64>) -> Result<Self, MatrixError> {
        let expected = rows.checked_mul(cols).ok_or(MatrixError::TooLarge {
            rows,
            cols,
            max: usize::MAX,
        })?;
        if cells.len() != expected {
            return Err(MatrixError::InvalidData(format!(
                "{}x{} matrix needs {} values, got {}",
                rows,
                cols,
                expected,
                cells.len()
            )));
        }
        Ok(Self {
            rows,
            cols,
            storage: Storage::Dynamic(cells),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix has no cells
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn mode(&self) -> StorageMode {
        match self.storage {
            Storage::Fixed(_) => StorageMode::Fixed,
            Storage::Dynamic(_) => StorageMode::Dynamic,
        }
    }

    /// All cells in row-major order
    pub fn as_slice(&self) -> &[i64] {
        let len = self.rows * self.cols;
        match &self.storage {
            Storage::Fixed(cells) => &cells[..len],
            Storage::Dynamic(cells) => &cells[..len],
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [i64] {
        let len = self.rows * self.cols;
        match &mut self.storage {
            Storage::Fixed(cells) => &mut cells[..len],
            Storage::Dynamic(cells) => &mut cells[..len],
        }
    }

    /// One row as a slice
    pub fn row(&self, r: usize) -> &[i64] {
        &self.as_slice()[r * self.cols..(r + 1) * self.cols]
    }

    pub fn get(&self, r: usize, c: usize) -> Option<i64> {
        if r < self.rows && c < self.cols {
            Some(self.as_slice()[r * self.cols + c])
        } else {
            None
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (r, c): (usize, usize)) -> &i64 {
        assert!(r < self.rows && c < self.cols, "cell ({}, {}) out of bounds", r, c);
        &self.as_slice()[r * self.cols + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut i64 {
        assert!(r < self.rows && c < self.cols, "cell ({}, {}) out of bounds", r, c);
        let cols = self.cols;
        &mut self.as_mut_slice()[r * cols + c]
    }
}
