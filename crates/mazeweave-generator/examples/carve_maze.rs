//! Example demonstrating maze generation and solving.
//!
//! This example shows how to:
//! - Generate a maze of chosen dimensions, optionally from a fixed seed
//! - Solve it from the entrance to the exit
//! - Print the maze and the discovered path as ASCII
//!
//! # Usage
//!
//! ```sh
//! cargo run --example carve_maze
//! ```
//!
//! Choose the dimensions:
//!
//! ```sh
//! cargo run --example carve_maze -- --rows 12 --cols 24
//! ```
//!
//! Reproduce a maze from a printed seed (16 hex digits):
//!
//! ```sh
//! cargo run --example carve_maze -- --seed 000000000000002a
//! ```
//!
//! Enable phase logging:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example carve_maze
//! ```

use std::process;

use clap::Parser;
use mazeweave_core::{Direction, Grid, Position};
use mazeweave_generator::{MazeGenerator, MazeSeed};
use mazeweave_solver::{MazeSolver, Path, SolveOutcome};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of rows.
    #[arg(long, value_name = "COUNT", default_value_t = 8)]
    rows: usize,

    /// Number of columns.
    #[arg(long, value_name = "COUNT", default_value_t = 8)]
    cols: usize,

    /// Seed to reproduce a specific maze (16 hex digits).
    #[arg(long, value_name = "SEED")]
    seed: Option<MazeSeed>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(MazeSeed::random);
    let generator = MazeGenerator::new();
    let mut maze = match generator.generate_with_seed(args.rows, args.cols, seed) {
        Ok(maze) => maze,
        Err(err) => {
            eprintln!("maze could not be generated: {err}");
            process::exit(2);
        }
    };

    let entrance = maze.entrance();
    let exit = maze.exit();
    maze.grid.reset_exploration();
    let outcome = MazeSolver::new().solve(&mut maze.grid, entrance, exit);
    let SolveOutcome::Solved(path) = outcome else {
        // A freshly carved maze always has a path; reaching this branch
        // means the grid state was corrupted somewhere.
        eprintln!(
            "no path found in a generated maze (walls symmetric: {})",
            maze.grid.walls_symmetric()
        );
        process::exit(1);
    };

    println!("seed: {}", maze.seed);
    println!("path: {} cells", path.len());
    print_maze(&maze.grid, &path);
}

/// Prints the maze with `*` marking the cells on the solved path.
fn print_maze(grid: &Grid, path: &Path) {
    for row in 0..grid.rows() {
        let mut top = String::new();
        let mut mid = String::new();
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            let cell = &grid[pos];
            top.push('+');
            top.push_str(if cell.has_wall(Direction::Top) {
                "---"
            } else {
                "   "
            });
            mid.push(if cell.has_wall(Direction::Left) { '|' } else { ' ' });
            let on_path = path.cells().contains(&pos);
            mid.push_str(if on_path { " * " } else { "   " });
        }
        top.push('+');
        let last = Position::new(row, grid.cols() - 1);
        mid.push(if grid[last].has_wall(Direction::Right) {
            '|'
        } else {
            ' '
        });
        println!("{top}");
        println!("{mid}");
    }
    let mut bottom = String::new();
    for col in 0..grid.cols() {
        let pos = Position::new(grid.rows() - 1, col);
        bottom.push('+');
        bottom.push_str(if grid[pos].has_wall(Direction::Bottom) {
            "---"
        } else {
            "   "
        });
    }
    bottom.push('+');
    println!("{bottom}");
}
