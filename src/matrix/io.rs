//! Matrix text format and the end-to-end job
//!
//! ## Input
//! ```text
//! R C
//! v11 v12 ... (R * C integers, any whitespace)
//! ```
//!
//! ## Output
//! ```text
//! summary
//! R C v11 v12 ... (row-major, space separated)
//! ```

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use super::{Matrix, MatrixError, MatrixVariant, StorageMode};

/// Parse one non-negative dimension token
fn parse_dim(token: Option<&str>, what: &str) -> Result<usize, MatrixError> {
    let token = token.ok_or_else(|| MatrixError::InvalidData(format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|_| MatrixError::InvalidData(format!("bad {} {:?}", what, token)))
}

/// Read a matrix in the text format above
pub fn read_matrix<R: Read>(mut reader: R, mode: StorageMode) -> Result<Matrix, MatrixError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let rows = parse_dim(tokens.next(), "row count")?;
    let cols = parse_dim(tokens.next(), "column count")?;
    let mut matrix = Matrix::new(rows, cols, mode)?;

    let expected = rows * cols;
    for (i, cell) in matrix.as_mut_slice().iter_mut().enumerate() {
        let token = tokens.next().ok_or(MatrixError::Truncated { expected, found: i })?;
        *cell = token
            .parse()
            .map_err(|_| MatrixError::InvalidData(format!("bad value {:?} at index {}", token, i)))?;
    }

    let extra = tokens.count();
    if extra > 0 {
        log::warn!("Ignoring {} values after the {}x{} matrix", extra, rows, cols);
    }

    Ok(matrix)
}

/// Write the summary line, then the dimensions and all cells on one line
pub fn write_matrix<W: Write>(mut writer: W, summary: usize, matrix: &Matrix) -> Result<(), MatrixError> {
    writeln!(writer, "{}", summary)?;
    write!(writer, "{} {}", matrix.rows(), matrix.cols())?;
    for value in matrix.as_slice() {
        write!(writer, " {}", value)?;
    }
    writeln!(writer)?;

    writer.flush()?;
    Ok(())
}

/// Read, transform, summarize and write one matrix
///
/// The spiral variant summarizes the transformed matrix; the layers
/// variant summarizes the input before the transform.
/// Returns the summary value.
pub fn process<R: Read, W: Write>(
    reader: R,
    writer: W,
    mode: StorageMode,
    variant: MatrixVariant,
) -> Result<usize, MatrixError> {
    let mut matrix = read_matrix(reader, mode)?;

    let summary = match variant {
        MatrixVariant::Spiral => {
            matrix.spiral_accumulate();
            matrix.longest_run_column()
        }
        MatrixVariant::Layers => {
            let summary = matrix.zero_free_diagonals();
            matrix.layer_accumulate();
            summary
        }
    };

    write_matrix(writer, summary, &matrix)?;
    Ok(summary)
}

/// Run one job from `input` to `output`
pub fn run(
    mode: StorageMode,
    variant: MatrixVariant,
    input: &Path,
    output: &Path,
) -> Result<usize, MatrixError> {
    log::info!("Reading {} ({:?} storage, {:?})", input.display(), mode, variant);
    let reader = File::open(input)?;

    // Parse before touching the output so a bad input leaves no file behind
    let mut buffer = Vec::new();
    let summary = process(reader, &mut buffer, mode, variant)?;

    let mut writer = BufWriter::new(File::create(output)?);
    writer.write_all(&buffer)?;
    writer.flush()?;

    log::info!("Wrote {} (summary {})", output.display(), summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_str(input: &str, mode: StorageMode, variant: MatrixVariant) -> Result<String, MatrixError> {
        let mut out = Vec::new();
        process(Cursor::new(input), &mut out, mode, variant)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_spiral_job() {
        let out = run_str("2 2\n0 0\n0 0\n", StorageMode::Fixed, MatrixVariant::Spiral).unwrap();
        assert_eq!(out, "0\n2 2 4 3 1 2\n");
    }

    #[test]
    fn test_spiral_summary_uses_transformed_matrix() {
        // Input runs: column 0 has two equal cells, column 1 none.
        // After the spiral the matrix is [6 9; 7 9; 3 9].
        let out = run_str("3 2\n1 5\n1 6\n2 7\n", StorageMode::Dynamic, MatrixVariant::Spiral).unwrap();
        assert_eq!(out, "1\n3 2 6 9 7 9 3 9\n");
    }

    #[test]
    fn test_layers_job() {
        let out = run_str("3 3 1 0 3 4 5 6 7 8 9", StorageMode::Dynamic, MatrixVariant::Layers).unwrap();
        assert_eq!(out, "4\n3 3 2 1 4 5 7 7 8 9 10\n");
    }

    #[test]
    fn test_empty_matrix_job() {
        let out = run_str("0 5", StorageMode::Dynamic, MatrixVariant::Spiral).unwrap();
        assert_eq!(out, "0\n0 5\n");
    }

    #[test]
    fn test_truncated_input() {
        let err = run_str("2 2 1 2 3", StorageMode::Dynamic, MatrixVariant::Spiral).unwrap_err();
        assert!(matches!(err, MatrixError::Truncated { expected: 4, found: 3 }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_bad_tokens() {
        assert!(matches!(
            run_str("2 x", StorageMode::Dynamic, MatrixVariant::Spiral),
            Err(MatrixError::InvalidData(_))
        ));
        assert!(matches!(
            run_str("-1 2", StorageMode::Dynamic, MatrixVariant::Spiral),
            Err(MatrixError::InvalidData(_))
        ));
        assert!(matches!(
            run_str("1 2 3 abc", StorageMode::Dynamic, MatrixVariant::Spiral),
            Err(MatrixError::InvalidData(_))
        ));
        assert!(matches!(
            run_str("", StorageMode::Dynamic, MatrixVariant::Spiral),
            Err(MatrixError::InvalidData(_))
        ));
    }

    #[test]
    fn test_fixed_mode_size_limit() {
        let err = run_str("101 1", StorageMode::Fixed, MatrixVariant::Spiral).unwrap_err();
        assert!(matches!(err, MatrixError::TooLarge { rows: 101, cols: 1, .. }));
    }

    #[test]
    fn test_missing_input_file() {
        let err = run(
            StorageMode::Dynamic,
            MatrixVariant::Spiral,
            Path::new("/nonexistent/matrix-input.txt"),
            Path::new("/nonexistent/matrix-output.txt"),
        )
        .unwrap_err();
        assert!(matches!(err, MatrixError::Io(_)));
    }
}
