//! lab-figures - scale a collection of planar figures about a point
//!
//! Builds a fixed demonstration scene, prints every figure's area and
//! frame, reads `x y k` from standard input and scales the whole scene
//! by `k` about `(x, y)`, then prints the result again.
//!
//! ## Exit Codes
//! - 0: success
//! - 1: bad numeric input
//! - 2: the demonstration scene could not be built
//! - 3: scale factor `k <= 0`

use std::io::{self, BufRead};
use std::process::ExitCode;

use lab_figures::settings::AppSettings;
use lab_figures::shapes::{
    ComplexQuad, Diamond, Point, Polygon, Rectangle, Ring, Scene, ShapeError, Square,
};
use lab_figures::text::LineReader;

const EXIT_BAD_INPUT: u8 = 1;
const EXIT_BUILD_FAILED: u8 = 2;
const EXIT_BAD_SCALE: u8 = 3;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting lab-figures");

    let settings = AppSettings::load();

    let mut scene = match demo_scene() {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(EXIT_BUILD_FAILED);
        }
    };

    print_report("Before", &scene, settings.precision);

    println!("Fixed point and scale factor (x y k):");
    let stdin = io::stdin();
    let (base, k) = match read_transform(stdin.lock(), settings.line_capacity) {
        Some(input) => input,
        None => {
            eprintln!("error: expected three numbers: x y k");
            return ExitCode::from(EXIT_BAD_INPUT);
        }
    };

    if let Err(e) = scene.scale_about(base, k) {
        eprintln!("error: {}", e);
        return ExitCode::from(EXIT_BAD_SCALE);
    }

    print_report("After", &scene, settings.precision);
    ExitCode::SUCCESS
}

/// The fixed demonstration collection, one figure of every kind
///
/// Any construction failure drops the figures built so far and is returned.
fn demo_scene() -> Result<Scene, ShapeError> {
    let mut scene = Scene::new("demo");
    scene
        .try_add(Rectangle::new(Point::new(0.0, 0.0), 100.0, 80.0))?
        .try_add(Square::new(Point::new(-7.0, 14.0), 20.0))?
        .try_add(Diamond::square(Point::new(20.0, 30.0), 48.0))?
        .try_add(Diamond::new(Point::new(-40.0, 25.0), 16.0, 10.0))?
        .try_add(Ring::new(Point::new(-7.0, -2.0), Point::new(-5.0, 0.0), 3.5, 9.0))?
        .try_add(Polygon::new(&[
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 3.0),
            Point::new(0.0, 3.0),
        ]))?
        .try_add(ComplexQuad::new([
            Point::new(10.0, -10.0),
            Point::new(18.0, -8.0),
            Point::new(16.0, 2.0),
            Point::new(9.0, -1.0),
        ]))?;

    log::info!("Built scene '{}' with {} figures", scene.name(), scene.len());
    Ok(scene)
}

/// Read `x y k` as three whitespace-separated reals
///
/// Returns `None` on missing, non-numeric or non-finite input.
fn read_transform<R: BufRead>(input: R, capacity: usize) -> Option<(Point, f64)> {
    let mut reader = LineReader::with_capacity(input, capacity);
    let mut next = || -> Option<f64> {
        let word = reader.read_word().ok()??;
        word.parse::<f64>().ok().filter(|v| v.is_finite())
    };

    let x = next()?;
    let y = next()?;
    let k = next()?;
    Some((Point::new(x, y), k))
}

fn print_report(title: &str, scene: &Scene, precision: usize) {
    println!("== {} ==", title);
    for (i, shape) in scene.iter().enumerate() {
        println!(
            "{:>2}. {:<14} area={:.prec$}  frame: {:.prec$}",
            i + 1,
            shape.name(),
            shape.area(),
            shape.frame_rect(),
            prec = precision
        );
    }
    println!("Total area: {:.prec$}", scene.total_area(), prec = precision);
    println!("Total frame: {:.prec$}", scene.frame_rect(), prec = precision);
}
