use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::generators::{generate_maze, get_rng};
use crate::maze::{Coord, Maze, StepObserver, observer::reborrow};
use crate::placement::place_entrance_exit;
use crate::solvers::{SolveResult, solve_maze};

/// A generated, opened and solved maze.
#[derive(Debug, Clone)]
pub struct MazeRun {
    pub maze: Maze,
    pub entrance: Coord,
    pub exit: Coord,
    pub result: SolveResult,
}

/// Builds a maze from `config`: generation, then entrance and exit, then solving.
///
/// A single random number generator, seeded from the config, drives every random choice, so a
/// seeded config always produces the same run.
pub fn run(
    config: &MazeConfig,
    mut observer: Option<&mut dyn StepObserver>,
) -> Result<MazeRun, MazeError> {
    let (width, height) = config.validate()?;
    let mut maze = Maze::new(width, height)?;
    let mut rng = get_rng(config.seed);

    generate_maze(&mut maze, config.generator, &mut rng, reborrow(&mut observer));
    let (entrance, exit) = place_entrance_exit(&mut maze, &mut rng, reborrow(&mut observer))?;
    let result = solve_maze(&mut maze, config.solver, observer)?;

    tracing::info!(
        "[engine] {}x{} maze with {} solved by {}: {}",
        width,
        height,
        config.generator,
        config.solver,
        match result.path() {
            Some(path) => format!("{} cells", path.len()),
            None => "unsolvable".to_string(),
        }
    );
    Ok(MazeRun {
        maze,
        entrance,
        exit,
        result,
    })
}
