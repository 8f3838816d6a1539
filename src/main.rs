//! Thin CLI wrapper (§6): reads a word-list file (one word per line),
//! builds a layout, and prints a one-line report followed by the
//! rendered grid. External to the core specification — reading the
//! word list, argument parsing, and logging policy live here, not in
//! the library.

use std::fs;
use std::process::ExitCode;

use crossword_layout::{build_layout, LayoutConfig, LayoutError};

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!(
            "usage: crossword_layout <word-list-file> [--boundary-exclusion] [--config <file>]"
        );
        return ExitCode::FAILURE;
    };

    let mut boundary_exclusion = false;
    let mut config_path: Option<String> = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--boundary-exclusion" => boundary_exclusion = true,
            "--config" => config_path = args.next(),
            _ => {}
        }
    }

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("could not read '{path}': {err}");
            return ExitCode::FAILURE;
        }
    };

    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    log::info!("{} words read from {path}", words.len());

    let mut config = match config_path {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("could not load config '{path}': {err}");
                return ExitCode::FAILURE;
            }
        },
        None => LayoutConfig::default(),
    };
    config.boundary_exclusion |= boundary_exclusion;

    match build_layout(&words, &config) {
        Ok(layout) => {
            let crossings = layout
                .coords
                .values()
                .filter(|occupants| occupants.len() == 2)
                .count();
            println!("{crossings} crossings in feasible layout");
            print!("{}", layout.render());
            ExitCode::SUCCESS
        }
        Err(LayoutError::NoFeasibleLayout) => {
            println!("No maximal sets could be realized");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Loads a [`LayoutConfig`] from a JSON file, the teacher's own way of
/// moving settings in and out of `serde_json` (`lib.rs`'s
/// `serde_json::to_string_pretty(&crosswords)`), here on the read path.
fn load_config(path: &str) -> Result<LayoutConfig, String> {
    let contents = fs::read_to_string(path).map_err(|err| err.to_string())?;
    serde_json::from_str(&contents).map_err(|err| err.to_string())
}
