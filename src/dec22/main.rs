use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use cube_net_topology::{
    parse_scenario, Board, CubeTopology, FlatTopology, Instruction, Topology, Walker,
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Part {
    A,
    B,
    Both,
}

#[derive(Parser)]
#[command(name = "dec22")]
#[command(about = "Walk a path over a board, flat or folded into a cube")]
struct Args {
    /// Which answer to print; A wraps flat, B folds the board into a cube
    #[arg(long, value_enum, default_value_t = Part::Both)]
    part: Part,

    /// Puzzle input; read from stdin when omitted
    input: Option<PathBuf>,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        }
    }
}

fn solve<T: Topology>(board: &Board, topology: &T, path: &[Instruction]) -> Result<i64> {
    let mut walker = Walker::new(board, topology)?;
    let end = walker.run(path)?;
    tracing::info!(x = end.x, y = end.y, facing = ?end.facing, "finished walk");
    Ok(walker.password())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let buffer = read_input(args.input.as_ref())?;
    let (board, path) = parse_scenario(&buffer)?;

    if args.part != Part::B {
        let flat = FlatTopology::new(&board);
        println!("Answer part A: {}", solve(&board, &flat, &path)?);
    }

    if args.part != Part::A {
        let cube = CubeTopology::from_grid(&board).context("folding the board into a cube")?;
        println!("Answer part B: {}", solve(&board, &cube, &path)?);
    }

    Ok(())
}
