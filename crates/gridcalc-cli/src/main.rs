//! gridcalc CLI - a line-oriented front end for the formula grid

mod session;

use anyhow::{Context, Result};
use clap::Parser;
use gridcalc::{GridSettings, DEFAULT_COLS, DEFAULT_FORMULA_MARKER, DEFAULT_ROWS};
use session::{Outcome, Session};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridcalc")]
#[command(author, version, about = "Formula grid evaluated on commit")]
struct Cli {
    /// Read commands from a file instead of stdin
    input: Option<PathBuf>,

    /// Number of rows in the grid
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    rows: u32,

    /// Number of columns in the grid (at most 26)
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    cols: u16,

    /// Character that starts a formula
    #[arg(short, long, default_value_t = DEFAULT_FORMULA_MARKER)]
    marker: char,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = GridSettings {
        rows: cli.rows,
        cols: cli.cols,
        formula_marker: cli.marker,
    };
    let mut session = Session::new(settings).context("Failed to create grid")?;
    log::info!(
        "grid {}x{}, formula marker '{}'",
        settings.rows,
        settings.cols,
        settings.formula_marker
    );

    let interactive = cli.input.is_none();
    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open '{}'", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    if interactive {
        println!("{}", session::help_text(settings.formula_marker));
        prompt()?;
    }

    for line in reader.lines() {
        let line = line.context("Failed to read input")?;

        match session.handle_line(&line) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Output(text)) => println!("{}", text),
            Ok(Outcome::Silent) => {}
            Err(e) => eprintln!("Error: {:#}", e),
        }

        if interactive {
            prompt()?;
        }
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush().context("Failed to flush stdout")
}
