//! Command-line clients for the percolation grid and threshold experiments.
//!
//! ```text
//! percolation grid            # N, then "row col" pairs on stdin
//! percolation stats 200 100   # N T
//! percolation stats < pairs   # "N T" pairs on stdin until EOF
//! ```
//!
//! Set `RUST_LOG=debug` for per-trial output.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process;

use clap::{Parser, Subcommand};
use log::error;

use percolation_sim::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "percolation", about = "Site percolation on an N×N grid")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a grid of size N read from stdin, then open each "row col" pair
    Grid,
    /// Estimate the percolation threshold over T trials on an N×N grid
    Stats {
        /// Grid size
        n: Option<i64>,
        /// Number of trials
        trials: Option<i64>,
        /// Master seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

type Tokens = Box<dyn Iterator<Item = io::Result<String>>>;

fn tokens<R: BufRead + 'static>(reader: R) -> Tokens {
    Box::new(reader.lines().flat_map(|line| match line {
        Ok(l) => l
            .split_whitespace()
            .map(|t| Ok(t.to_string()))
            .collect::<Vec<_>>(),
        Err(e) => vec![Err(e)],
    }))
}

fn next_token(tokens: &mut Tokens) -> Result<Option<String>, Box<dyn Error>> {
    match tokens.next() {
        Some(t) => Ok(Some(t?)),
        None => Ok(None),
    }
}

/// Parse a strictly positive count, mapping anything else to `InvalidArgument`.
fn positive(value: i64, what: &str) -> Result<usize, PercolationError> {
    usize::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .ok_or_else(|| {
            PercolationError::InvalidArgument(format!("{} must be positive, got {}", what, value))
        })
}

fn parse_int(token: &str, what: &str) -> Result<i64, Box<dyn Error>> {
    token
        .parse::<i64>()
        .map_err(|e| format!("expected an integer for {}, got '{}': {}", what, token, e).into())
}

/// Row or column token. Values above `n` are left for the grid to reject.
fn parse_index(token: &str, what: &str, n: usize) -> Result<usize, Box<dyn Error>> {
    let value = parse_int(token, what)?;
    usize::try_from(value)
        .map_err(|_| format!("{} index {} out of bounds (expected 1..={})", what, value, n).into())
}

fn run_grid_client<W: Write>(mut tokens: Tokens, out: &mut W) -> Result<(), Box<dyn Error>> {
    let n = match next_token(&mut tokens)? {
        Some(t) => positive(parse_int(&t, "grid size")?, "grid size")?,
        None => return Ok(()),
    };
    let mut grid = Percolation::new(n)?;
    writeln!(out, "{}x{} grid created", n, n)?;

    while let Some(row) = next_token(&mut tokens)? {
        let col = next_token(&mut tokens)?.ok_or("missing column after row")?;
        let row = parse_index(&row, "row", n)?;
        let col = parse_index(&col, "column", n)?;
        grid.open(row, col)?;
        writeln!(out, "is full: {}", grid.is_full(row, col)?)?;
        writeln!(out, "is percolate: {}", grid.percolates())?;
    }
    Ok(())
}

fn print_stats<W: Write>(result: &SimResult, out: &mut W) -> io::Result<()> {
    writeln!(out, "mean                    = {}", result.mean)?;
    writeln!(out, "stddev                  = {}", result.stddev)?;
    writeln!(
        out,
        "95% confidence interval = {}, {}",
        result.confidence_lo, result.confidence_hi
    )?;
    writeln!(out, "Elapsed time            = {:.3}", result.elapsed.as_secs_f64())
}

fn run_stats<W: Write>(
    n: i64,
    trials: i64,
    seed: Option<u64>,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let config = SimConfig {
        n: positive(n, "grid size")?,
        trials: positive(trials, "trial count")?,
        seed,
    };
    let result = run_experiment(&config)?;
    print_stats(&result, out)?;
    Ok(())
}

fn run_stats_client<W: Write>(
    mut tokens: Tokens,
    seed: Option<u64>,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    while let Some(n) = next_token(&mut tokens)? {
        let trials = next_token(&mut tokens)?.ok_or("missing trial count after grid size")?;
        let (n, trials) = (parse_int(&n, "grid size")?, parse_int(&trials, "trial count")?);
        run_stats(n, trials, seed, out)?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let stdin = tokens(io::BufReader::new(io::stdin()));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Grid => run_grid_client(stdin, &mut out),
        Command::Stats { n: Some(n), trials: Some(t), seed } => run_stats(n, t, seed, &mut out),
        Command::Stats { n: Some(_), trials: None, .. } => {
            Err("trial count required with grid size".into())
        }
        Command::Stats { seed, .. } => run_stats_client(stdin, seed, &mut out),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        process::exit(1);
    }
}
