//! Print the fewest steps from `S` to `G` in a text maze.
//!
//! Run: cargo run --bin maze -- [PATH]

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use maze_core::Grid;
use maze_paths::{Outcome, PathEnumerator, SearchConfig, bfs_distance};

/// The maze used when no file is given.
const EXERCISE_MAZE: &str = "
    #S######.#
    ......#..#
    .#.##.##.#
    .#........
    ##.##.####
    ....#....#
    .#######.#
    ....#.....
    .####.###.
    ....#...G#
";

#[derive(Parser, Debug)]
#[command(author, version, about = "Count the fewest steps from S to G in a text maze")]
struct Cli {
    /// Maze file, or `-` for stdin. Defaults to a built-in example maze.
    path: Option<PathBuf>,

    /// Draw the first shortest route on the maze.
    #[arg(long)]
    show_route: bool,

    /// List every route found, in discovery order.
    #[arg(long)]
    all: bool,

    /// Cross-check the answer against a plain breadth-first search.
    #[arg(long)]
    verify: bool,

    /// Give up after this many partial routes have been expanded.
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Give up when this many partial routes are waiting at once.
    #[arg(long)]
    max_frontier: Option<usize>,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_iterations: self.max_iterations,
            max_frontier: self.max_frontier,
        }
    }

    fn read_maze(&self) -> io::Result<String> {
        match &self.path {
            None => Ok(EXERCISE_MAZE.to_string()),
            Some(p) if p.as_os_str() == "-" => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            Some(p) => fs::read_to_string(p),
        }
    }
}

fn run(cli: &Cli, text: &str, out: &mut impl Write) -> Result<Outcome, Box<dyn Error>> {
    let grid = Grid::parse(text)?;
    let (start, goal) = grid.locate_endpoints()?;
    log::info!(
        "maze of {} rows, start {start}, goal {goal}",
        grid.row_count()
    );

    let config = cli.search_config();
    if !config.is_unbounded() {
        log::info!(
            "search limits: iterations {:?}, frontier {:?}",
            config.max_iterations,
            config.max_frontier
        );
    }
    let mut enumerator = PathEnumerator::with_config(config);
    let solutions = enumerator.enumerate(&grid, start, goal)?;
    let outcome = solutions.outcome();
    if !outcome.is_reachable() {
        log::info!("no route from {start} to {goal}");
    }

    if cli.verify {
        let reference = bfs_distance(&grid, start, goal);
        match (outcome.steps(), reference) {
            (None, None) => {}
            (Some(found), Some(best)) if found <= best => {}
            (found, best) => {
                return Err(format!(
                    "verification failed: enumeration gave {found:?}, breadth-first search gave {best:?}"
                )
                .into());
            }
        }
        log::info!("verified against breadth-first search");
    }

    if cli.all {
        for (i, route) in solutions.iter().enumerate() {
            let cells: Vec<String> = route.iter().map(ToString::to_string).collect();
            writeln!(out, "route {i} ({} steps): {}", route.len() - 1, cells.join(" "))?;
        }
    }

    if cli.show_route {
        if let Some(route) = solutions.shortest() {
            write!(out, "{}", grid.render_route(&route, '*'))?;
        }
    }

    writeln!(out, "{outcome}")?;
    Ok(outcome)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let text = match cli.read_maze() {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    if let Err(e) = run(&cli, &text, &mut stdout.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str], text: &str) -> (Result<Outcome, String>, String) {
        let cli = Cli::parse_from(std::iter::once("maze").chain(args.iter().copied()));
        let mut out = Vec::new();
        let result = run(&cli, text, &mut out).map_err(|e| e.to_string());
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn default_maze_prints_22() {
        let (result, out) = run_args(&[], EXERCISE_MAZE);
        assert_eq!(result, Ok(Outcome::Steps(22)));
        assert_eq!(out, "22\n");
    }

    #[test]
    fn unreachable_prints_marker() {
        let (result, out) = run_args(&[], "S#G");
        assert_eq!(result, Ok(Outcome::Unreachable));
        assert_eq!(out, "unreachable\n");
    }

    #[test]
    fn show_route_draws_stars() {
        let (_, out) = run_args(&["--show-route"], "S..\n#.G");
        assert_eq!(out, "S*.\n#*G\n3\n");
    }

    #[test]
    fn all_lists_routes() {
        let (_, out) = run_args(&["--all"], "S.\n.G");
        assert_eq!(
            out,
            "route 0 (2 steps): (0, 0) (1, 0) (1, 1)\n\
             route 1 (2 steps): (0, 0) (0, 1) (1, 1)\n\
             2\n"
        );
    }

    #[test]
    fn verify_passes_on_exercise_maze() {
        let (result, _) = run_args(&["--verify"], EXERCISE_MAZE);
        assert_eq!(result, Ok(Outcome::Steps(22)));
    }

    #[test]
    fn limits_are_reported() {
        let (result, out) = run_args(&["--max-iterations", "3"], EXERCISE_MAZE);
        assert_eq!(
            result,
            Err("search stopped after 3 iterations (0 routes found so far)".to_string())
        );
        assert!(out.is_empty());
    }

    #[test]
    fn missing_marker_is_an_error() {
        let (result, _) = run_args(&[], "S...");
        assert_eq!(
            result,
            Err("marker \u{201c}G\u{201d} not found in grid".to_string())
        );
    }

    #[test]
    fn default_path_uses_builtin_maze() {
        let cli = Cli::parse_from(["maze"]);
        assert_eq!(cli.read_maze().unwrap(), EXERCISE_MAZE);
    }
}
