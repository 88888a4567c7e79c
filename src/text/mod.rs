//! Text module - growable line reading and small string queries
//!
//! This module provides:
//! - `LineReader` for reading lines and words of any length
//! - ASCII string queries (shared characters, letter residue,
//!   unique letters, multiset intersection, alphabet union,
//!   interleaving, substitution)
//!
//! Text is treated as bytes/ASCII; there is no Unicode-aware handling.

mod query;
mod reader;

use thiserror::Error;

pub use query::{
    alphabet_union, common_char_count, interleave, shares_char, strip_letters, substitute,
    unique_letter_count,
};
pub use reader::{LineReader, INITIAL_CAPACITY};

/// Errors that can occur while reading text input
#[derive(Error, Debug)]
pub enum LineError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Out of memory while growing line buffer to {0} bytes")]
    OutOfMemory(usize),

    #[error("Input is empty")]
    Empty,
}

impl LineError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            LineError::Empty => 1,
            LineError::OutOfMemory(_) | LineError::Io(_) => 2,
        }
    }
}
