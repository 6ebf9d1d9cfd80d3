// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line search for a single knight's tour.

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use knight_tour::board::render::{render, DEFAULT_MARKER};
use knight_tour::board::DEFAULT_SIZE;
use knight_tour::{KnightsTour, TourConfig, TourKind};

const TITLE: &str = "The Knight's tour problem using Warnsdorff's algorithm";

#[derive(Parser, Debug)]
#[command(name = "knight")]
#[command(about = "Find a knight's tour with Warnsdorff's heuristic and backtracking")]
struct Args {
    /// Side length of the board
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Row of the start square
    #[arg(short, long, default_value_t = 0)]
    row: usize,

    /// Column of the start square
    #[arg(short, long, default_value_t = 0)]
    col: usize,

    /// Order value given to the start square
    #[arg(long, default_value_t = 1)]
    start_step: u64,

    /// Require the tour to end a knight move from its start
    #[arg(long)]
    closed: bool,

    /// Seed for tie-breaking; a random seed is drawn and logged if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Character printed for unvisited squares
    #[arg(short, long, default_value_t = DEFAULT_MARKER)]
    marker: char,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    println!("::: {} :::\n", TITLE);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Using seed {}", seed);

    let kind = if args.closed { TourKind::Closed } else { TourKind::Open };
    let config = TourConfig::new(args.size)
        .with_start(args.row, args.col)
        .with_start_step(args.start_step)
        .with_kind(kind)
        .with_seed(seed);

    let mut tour = match KnightsTour::new(config) {
        Ok(tour) => tour,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    println!("Initialized {}x{} board.", args.size, args.size);

    let report = tour.solve();
    if report.solved {
        println!("One solution after {} recursive calls:\n", report.calls);
        print!("{}", render(tour.board(), args.marker));
        ExitCode::SUCCESS
    } else {
        println!("No solution found for this combination.\n");
        ExitCode::FAILURE
    }
}
