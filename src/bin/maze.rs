//! Interactive maze editor.
//!
//! Usage:
//!   cargo run --bin maze                        # Prompt for the grid size
//!   cargo run --bin maze -- --rows 8 --cols 12  # Start with an 8x12 grid
//!   cargo run --bin maze -- --no-clear          # Keep the scrollback

use clap::Parser;
use grid_maze::game::{read_grid, Game};
use grid_maze::{Grid, MazeError};
use log::info;
use std::io;

#[derive(Parser)]
#[command(name = "maze")]
#[command(about = "Build a maze of walls and water and solve it with BFS or DFS")]
struct Args {
    /// Number of rows (at least 2)
    #[arg(short, long)]
    rows: Option<i32>,

    /// Number of columns (at least 2)
    #[arg(short, long)]
    cols: Option<i32>,

    /// Do not clear the terminal before drawing the grid
    #[arg(long)]
    no_clear: bool,
}

fn build_grid(args: &Args) -> Result<Grid, MazeError> {
    read_grid(&mut io::stdin().lock(), &mut io::stdout(), args.rows, args.cols)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("\n{}", "=".repeat(50));
    println!("  MAZE - ROUTE FINDING");
    println!("{}", "=".repeat(50));

    let grid = match build_grid(&args) {
        Ok(grid) => grid,
        Err(MazeError::ParseError(_)) => {
            println!("Please enter valid numbers.");
            return;
        }
        Err(err) => {
            println!("{}", err);
            return;
        }
    };
    info!("Starting session on a {}x{} grid", grid.rows(), grid.cols());

    let mut game = Game::new(grid, io::stdin().lock(), io::stdout());
    game.clear_screen = !args.no_clear;
    if let Err(err) = game.run() {
        println!("Unexpected error: {}", err);
    }
}
