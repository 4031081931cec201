mod board;
mod command;
mod game;
mod session;
mod square;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(name = "cellar")]
#[command(about = "A text-driven chest-pushing puzzle engine", long_about = None)]
struct Args {
    /// Path to the game script: the board, a blank line, then the command
    /// stream. Reads standard input when omitted.
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let script = match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("failed to read standard input")?,
    };

    let mut stdout = io::stdout().lock();
    session::run(&script, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
