// src/main.rs
//
// Thin CLI harness around the gridsolve library. All of the real logic
// lives in the lib crate (grid, engine, policy extraction).

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use gridsolve::{
    CellKind, Grid, PolicyExtractor, SolverParams, SolverParamsBuilder, ValueIterationEngine,
};

/// Command-line arguments for the solve binary.
#[derive(Parser, Debug)]
#[command(name = "solve")]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = 20)]
    cols: usize,

    /// Grid height in cells.
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Convergence threshold on the max per-sweep value change.
    #[arg(long, default_value_t = 1e-6)]
    theta: f32,

    /// Probability that the executed action matches the chosen one.
    #[arg(long, default_value_t = 0.8)]
    probability: f32,

    /// Discount factor.
    #[arg(long, default_value_t = 1.0)]
    gamma: f32,

    /// Hard cap on sweeps (0 runs exactly one sweep).
    #[arg(long, default_value_t = 100)]
    max_iterations: usize,

    /// Reward for a move onto an Open/Goal/Hole cell or off-grid.
    #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
    movement_penalty: f32,

    /// Reward for a move into an Obstruction (movement cancelled).
    #[arg(long, default_value_t = -50.0, allow_hyphen_values = true)]
    collision_penalty: f32,

    /// Seed for the random obstruction placement; unseeded runs use entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Place a Goal cell at X,Y (repeatable).
    #[arg(long, value_name = "X,Y")]
    goal: Vec<String>,

    /// Place a Hole cell at X,Y (repeatable).
    #[arg(long, value_name = "X,Y")]
    hole: Vec<String>,

    /// Emit a machine-readable JSON report instead of tables.
    #[arg(long)]
    json: bool,
}

/// JSON report for downstream tooling.
#[derive(Serialize)]
struct Report<'a> {
    iterations: usize,
    converged: bool,
    params: &'a SolverParams,
    grid: &'a Grid,
}

fn parse_position(raw: &str) -> Result<(usize, usize), String> {
    let mut parts = raw.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected X,Y but got '{raw}'"));
    };
    let x = x.trim().parse().map_err(|_| format!("bad X in '{raw}'"))?;
    let y = y.trim().parse().map_err(|_| format!("bad Y in '{raw}'"))?;
    Ok((x, y))
}

fn build_grid(cli: &Cli) -> Result<Grid, Box<dyn std::error::Error>> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut grid = Grid::with_random_obstructions(cli.cols, cli.rows, &mut rng)?;

    for raw in &cli.goal {
        let (x, y) = parse_position(raw)?;
        grid.set_kind(x, y, CellKind::Goal)?;
    }
    for raw in &cli.hole {
        let (x, y) = parse_position(raw)?;
        grid.set_kind(x, y, CellKind::Hole)?;
    }

    Ok(grid)
}

fn print_tables(grid: &Grid, iterations: usize) {
    println!("sweeps: {iterations}");
    println!();
    println!("values:");
    for y in 0..grid.rows() {
        let mut line = String::new();
        for x in 0..grid.cols() {
            let cell = grid.get(x, y).expect("in-bounds by construction");
            let field = match cell.kind {
                CellKind::Obstruction => format!("{:>8}", "####"),
                CellKind::Goal => format!("{:>8}", "G"),
                CellKind::Hole => format!("{:>8}", "H"),
                CellKind::Open => format!("{:>8.1}", cell.value),
            };
            line.push_str(&field);
        }
        println!("{line}");
    }
    println!();
    println!("policy:");
    for y in 0..grid.rows() {
        let mut line = String::new();
        for x in 0..grid.cols() {
            let cell = grid.get(x, y).expect("in-bounds by construction");
            let glyph = match cell.kind {
                CellKind::Obstruction => '#',
                CellKind::Goal => 'G',
                CellKind::Hole => 'H',
                CellKind::Open => cell.action.map_or('.', |a| a.arrow()),
            };
            line.push(glyph);
            line.push(' ');
        }
        println!("{line}");
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let params = SolverParamsBuilder::new()
        .theta(cli.theta)
        .probability(cli.probability)
        .gamma(cli.gamma)
        .max_iterations(cli.max_iterations)
        .movement_penalty(cli.movement_penalty)
        .collision_penalty(cli.collision_penalty)
        .build()?;

    let mut grid = build_grid(cli)?;

    let engine = ValueIterationEngine::new(params)?;
    let iterations = engine.solve(&mut grid);

    let extractor = PolicyExtractor::new(params)?;
    extractor.extract(&mut grid);

    if cli.json {
        let report = Report {
            iterations,
            converged: iterations <= params.max_iterations,
            params: &params,
            grid: &grid,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_tables(&grid, iterations);
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
