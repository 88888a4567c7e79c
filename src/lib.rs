//! lab-figures - planar figures, matrix scans and line queries
//!
//! Three small problem families share this crate:
//!
//! - `shapes`: polymorphic 2-D figures, their areas and frames, and
//!   uniform scaling of a whole collection about a fixed point
//! - `matrix`: spiral and nested-layer accumulation over integer
//!   matrices plus one-number summaries
//! - `text`: growable line/word reading and small string queries
//!
//! Each has a binary front end: `lab-figures`, `matrix-scan` and
//! `line-query`.

pub mod matrix;
pub mod settings;
pub mod shapes;
pub mod text;
