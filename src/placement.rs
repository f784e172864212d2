use rand::{Rng, seq::IndexedRandom};

use crate::error::MazeError;
use crate::maze::{CellState, Coord, Maze, StepKind, StepObserver, observer::Notifier};

/// Border coordinates on one side of the maze that can be opened: still a wall, with a
/// passage cell right behind them.
fn side_candidates(maze: &Maze, border_x: u16, inner_x: u16) -> Vec<Coord> {
    (0..maze.height() as u16)
        .map(|cy| 2 * cy + 1)
        .filter(|&y| {
            maze.get((border_x, y)) == CellState::Wall
                && maze.get((inner_x, y)) == CellState::Passage
        })
        .map(|y| (border_x, y))
        .collect()
}

/// Two distinct coordinates drawn from the same side.
fn pick_two<R: Rng + ?Sized>(candidates: &[Coord], rng: &mut R) -> (Coord, Coord) {
    let first = rng.random_range(0..candidates.len());
    let mut second = rng.random_range(0..candidates.len() - 1);
    if second >= first {
        second += 1;
    }
    (candidates[first], candidates[second])
}

/// Chooses the entrance and exit among the current border candidates.
fn choose_openings<R: Rng + ?Sized>(maze: &Maze, rng: &mut R) -> Result<(Coord, Coord), MazeError> {
    let grid_width = maze.grid().width();
    let left = side_candidates(maze, 0, 1);
    let right = side_candidates(maze, grid_width - 1, grid_width - 2);
    tracing::debug!(
        "[place] {} candidates on the left, {} on the right",
        left.len(),
        right.len()
    );

    let opposite = |rng: &mut R| -> Option<(Coord, Coord)> {
        Some((*left.choose(rng)?, *right.choose(rng)?))
    };

    match (left.is_empty(), right.is_empty()) {
        (true, true) => Err(MazeError::NoEntranceExitCandidates),
        (false, false) if rng.random_bool(0.5) => {
            opposite(rng).ok_or(MazeError::NoEntranceExitCandidates)
        }
        _ => {
            let side = if left.is_empty() { &right } else { &left };
            if side.len() >= 2 {
                Ok(pick_two(side, rng))
            } else {
                tracing::debug!("[place] single candidate on one side, using both sides");
                opposite(rng).ok_or(MazeError::DegenerateEntranceExit)
            }
        }
    }
}

/// Opens an entrance and an exit in the left and right border walls.
///
/// Markers from an earlier placement are walled up first, so a maze never carries more than
/// one entrance and one exit.
///
/// When both sides have candidates a fair coin decides between opposite sides (entrance on
/// the left, exit on the right) and both on the left. When only one side has candidates both
/// are taken from it. Entrance and exit never coincide: if the chosen side has a single
/// candidate the other side is used when possible, otherwise placement fails.
pub fn place_entrance_exit<R: Rng + ?Sized>(
    maze: &mut Maze,
    rng: &mut R,
    observer: Option<&mut dyn StepObserver>,
) -> Result<(Coord, Coord), MazeError> {
    let mut notifier = Notifier::new(maze, observer);
    maze.clear_markers();
    notifier.emit(maze, StepKind::Clear);

    let placed = choose_openings(maze, rng);
    if let Ok((entrance, exit)) = placed {
        maze.set(entrance, CellState::Entrance);
        maze.set(exit, CellState::Exit);
        notifier.emit(maze, StepKind::Place);
        tracing::info!("[place] entrance at {:?}, exit at {:?}", entrance, exit);
    }
    notifier.finish(maze);
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_maze, get_rng};
    use crate::maze::CellSeeding;

    #[test]
    fn test_entrance_and_exit_are_distinct_border_openings() {
        for seed in 0..40 {
            let mut rng = get_rng(Some(seed));
            let mut maze = Maze::new(6, 5).unwrap();
            generate_maze(&mut maze, Generator::Kruskal, &mut rng, None);
            let (entrance, exit) = place_entrance_exit(&mut maze, &mut rng, None).unwrap();
            assert_ne!(entrance, exit);
            assert_eq!(maze.get(entrance), CellState::Entrance);
            assert_eq!(maze.get(exit), CellState::Exit);
            for coord in [entrance, exit] {
                assert!(coord.0 == 0 || coord.0 == 12);
                assert_eq!(coord.1 % 2, 1);
            }
            assert_eq!(maze.markers(), (Some(entrance), Some(exit)));
        }
    }

    #[test]
    fn test_both_placements_happen() {
        let mut opposite = false;
        let mut same_side = false;
        for seed in 0..64 {
            let mut rng = get_rng(Some(seed));
            let mut maze = Maze::new(4, 4).unwrap();
            let (entrance, exit) = place_entrance_exit(&mut maze, &mut rng, None).unwrap();
            if entrance.0 == exit.0 {
                same_side = true;
            } else {
                opposite = true;
            }
        }
        assert!(opposite && same_side);
    }

    #[test]
    fn test_no_candidates() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.prepare(CellSeeding::Closed);
        assert_eq!(
            place_entrance_exit(&mut maze, &mut get_rng(Some(1)), None),
            Err(MazeError::NoEntranceExitCandidates)
        );
    }

    #[test]
    fn test_single_cell_uses_both_sides() {
        let maze = Maze::new(1, 1).unwrap();
        for seed in 0..16 {
            let mut maze = maze.clone();
            let placed = place_entrance_exit(&mut maze, &mut get_rng(Some(seed)), None);
            assert_eq!(placed, Ok(((0, 1), (2, 1))));
        }
    }

    #[test]
    fn test_single_candidate_is_degenerate() {
        // Right border already open, so only the left opening remains
        let mut maze = Maze::new(1, 1).unwrap();
        maze.set((2, 1), CellState::Passage);
        assert_eq!(
            place_entrance_exit(&mut maze, &mut get_rng(Some(5)), None),
            Err(MazeError::DegenerateEntranceExit)
        );
        assert_eq!(maze.markers(), (None, None));
    }

    #[test]
    fn test_regenerate_and_replace_keeps_one_entrance_and_exit() {
        let count = |maze: &Maze, state: CellState| {
            maze.grid().cells().iter().filter(|&&cell| cell == state).count()
        };
        let mut maze = Maze::new(6, 6).unwrap();
        let mut rng = get_rng(Some(3));
        generate_maze(&mut maze, Generator::Prim, &mut rng, None);
        place_entrance_exit(&mut maze, &mut rng, None).unwrap();
        generate_maze(&mut maze, Generator::Wilson, &mut rng, None);
        assert_eq!((count(&maze, CellState::Entrance), count(&maze, CellState::Exit)), (0, 0));

        let (entrance, exit) = place_entrance_exit(&mut maze, &mut rng, None).unwrap();
        assert_eq!((count(&maze, CellState::Entrance), count(&maze, CellState::Exit)), (1, 1));
        assert_eq!(maze.markers(), (Some(entrance), Some(exit)));

        // Placing again on the same maze moves the markers instead of adding more
        let (entrance, exit) = place_entrance_exit(&mut maze, &mut rng, None).unwrap();
        assert_eq!((count(&maze, CellState::Entrance), count(&maze, CellState::Exit)), (1, 1));
        assert_eq!(maze.markers(), (Some(entrance), Some(exit)));
    }
}
