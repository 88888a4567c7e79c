//! matrix-scan - transform a matrix file and write a one-line summary
//!
//! ```text
//! matrix-scan <mode> <input_file> <output_file>
//! ```
//!
//! `mode` is `1` (fixed 100x100 storage) or `2` (dynamic storage).
//! The transform/summary pair comes from the `matrix_variant` setting.
//!
//! ## Exit Codes
//! - 0: success
//! - 1: bad arguments
//! - 2: file, I/O, size or data failure

use std::path::Path;
use std::process::ExitCode;

use lab_figures::matrix::{self, StorageMode};
use lab_figures::settings::AppSettings;

const USAGE: &str = "usage: matrix-scan <1|2> <input_file> <output_file>";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [mode, input, output] = args.as_slice() else {
        eprintln!("{}", USAGE);
        return ExitCode::from(1);
    };
    let Some(mode) = StorageMode::from_arg(mode) else {
        eprintln!("error: mode must be 1 or 2, got {:?}", mode);
        eprintln!("{}", USAGE);
        return ExitCode::from(1);
    };

    let settings = AppSettings::load();
    match matrix::run(mode, settings.matrix_variant, Path::new(input), Path::new(output)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Matrix job failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
