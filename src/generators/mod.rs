use rand::{Rng, SeedableRng, rngs::StdRng};

pub mod aldous_broder;
pub mod kruskal;
pub mod prim;
pub mod recur_backtrack;
pub mod wilson;

use aldous_broder::aldous_broder;
use kruskal::randomized_kruskal;
use prim::randomized_prim;
use recur_backtrack::recursive_backtrack;
use wilson::wilson;

use crate::error::MazeError;
use crate::maze::{Maze, StepObserver};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    RecurBacktrack,
    AldousBroder,
    Wilson,
    Prim,
    Kruskal,
}

impl Generator {
    pub const ALL: [Generator; 5] = [
        Generator::RecurBacktrack,
        Generator::AldousBroder,
        Generator::Wilson,
        Generator::Prim,
        Generator::Kruskal,
    ];

    /// Name accepted by [`str::parse`].
    pub fn name(self) -> &'static str {
        match self {
            Generator::RecurBacktrack => "dfs",
            Generator::AldousBroder => "aldous_broder",
            Generator::Wilson => "wilson",
            Generator::Prim => "prim",
            Generator::Kruskal => "kruskal",
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Generator::AldousBroder => write!(f, "Aldous-Broder Random Walk"),
            Generator::Wilson => write!(f, "Wilson's Loop-Erased Random Walk"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Generator::ALL
            .into_iter()
            .find(|generator| generator.name() == wanted)
            .ok_or_else(|| MazeError::UnknownGenerator(s.to_string()))
    }
}

/// Carves a perfect maze into `maze` with the chosen algorithm.
///
/// Everything inside the border is reset before carving starts.
pub fn generate_maze<R: Rng + ?Sized>(
    maze: &mut Maze,
    generator: Generator,
    rng: &mut R,
    observer: Option<&mut dyn StepObserver>,
) {
    tracing::debug!(
        "[generate] {} on a {}x{} maze",
        generator,
        maze.width(),
        maze.height()
    );
    match generator {
        Generator::RecurBacktrack => recursive_backtrack(maze, rng, observer),
        Generator::AldousBroder => aldous_broder(maze, rng, observer),
        Generator::Wilson => wilson(maze, rng, observer),
        Generator::Prim => randomized_prim(maze, rng, observer),
        Generator::Kruskal => {
            randomized_kruskal(maze, rng, observer);
        }
    }
    tracing::debug!(
        "[generate] {} done, {} walls removed",
        generator,
        maze.open_wall_count()
    );
}

/// Picks a uniformly random cell of the maze.
fn random_cell<R: Rng + ?Sized>(maze: &Maze, rng: &mut R) -> (u8, u8) {
    (
        rng.random_range(0..maze.width()),
        rng.random_range(0..maze.height()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generator_names() {
        for generator in Generator::ALL {
            assert_eq!(generator.name().parse::<Generator>(), Ok(generator));
        }
        assert_eq!("Aldous-Broder".parse::<Generator>(), Ok(Generator::AldousBroder));
        assert_eq!(
            "division".parse::<Generator>(),
            Err(MazeError::UnknownGenerator("division".to_string()))
        );
    }

    #[test]
    fn test_every_generator_is_perfect_and_seeded() {
        for generator in Generator::ALL {
            for (width, height) in [(1, 1), (1, 6), (7, 1), (2, 2), (6, 4), (9, 9)] {
                let mut first = Maze::new(width, height).unwrap();
                generate_maze(&mut first, generator, &mut get_rng(Some(7)), None);
                assert!(
                    first.is_perfect(),
                    "{} produced an imperfect {}x{} maze",
                    generator,
                    width,
                    height
                );

                let mut second = Maze::new(width, height).unwrap();
                generate_maze(&mut second, generator, &mut get_rng(Some(7)), None);
                assert_eq!(first.grid(), second.grid());
            }
        }
    }

    #[test]
    fn test_regenerating_discards_previous_maze() {
        let mut maze = Maze::new(6, 6).unwrap();
        let mut rng = get_rng(Some(3));
        generate_maze(&mut maze, Generator::Prim, &mut rng, None);
        generate_maze(&mut maze, Generator::Wilson, &mut rng, None);
        assert!(maze.is_perfect());
    }
}
