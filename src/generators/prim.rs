use rand::Rng;

use crate::generators::random_cell;
use crate::maze::{Cell, CellSeeding, CellState, Maze, StepKind, StepObserver, observer::Notifier};

/// Randomized Prim's algorithm over a frontier of walls.
///
/// The maze starts solid. Each round a uniformly random frontier wall is taken out of the
/// frontier; if exactly one side of it already belongs to the maze, the wall and the cell
/// behind it are opened and the new cell's walls join the frontier.
pub fn randomized_prim<R: Rng + ?Sized>(
    maze: &mut Maze,
    rng: &mut R,
    observer: Option<&mut dyn StepObserver>,
) {
    let mut notifier = Notifier::new(maze, observer);
    maze.prepare(CellSeeding::Closed);
    notifier.emit(maze, StepKind::Reset);

    let mut in_maze = vec![false; maze.cell_count()];

    // Initialize the starting point
    let start = random_cell(maze, rng);
    in_maze[maze.cell_index(start)] = true;
    maze.set_cell(start, CellState::Passage);
    notifier.emit(maze, StepKind::Carve);

    // Walls are kept as the pair of cells they separate, the first one inside the maze
    let mut frontier: Vec<(Cell, Cell)> = maze
        .neighbors_of_cell(start)
        .map(|neighbor| (start, neighbor))
        .collect();

    while !frontier.is_empty() {
        // Randomly select a wall from the frontier
        let idx = rng.random_range(0..frontier.len());
        let (inside, outside) = frontier.swap_remove(idx);

        if in_maze[maze.cell_index(outside)] {
            // Both sides already joined through another wall
            continue;
        }

        maze.carve_between(inside, outside);
        maze.set_cell(outside, CellState::Passage);
        in_maze[maze.cell_index(outside)] = true;

        frontier.extend(
            maze.neighbors_of_cell(outside)
                .filter(|&neighbor| !in_maze[maze.cell_index(neighbor)])
                .map(|neighbor| (outside, neighbor)),
        );
        notifier.emit(maze, StepKind::Carve);
    }
    notifier.finish(maze);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_randomized_prim() {
        let mut maze = Maze::new(7, 7).unwrap();
        randomized_prim(&mut maze, &mut get_rng(Some(0)), None);
        assert!(maze.is_perfect());
        // Check that there are some walls left inside the maze
        assert!(maze.get((2, 2)) == CellState::Wall);
    }

    #[test]
    fn test_prim_starts_from_solid_maze() {
        let mut maze = Maze::new(4, 4).unwrap();
        let mut first_open_cells = None;
        {
            let mut check = |event: crate::maze::StepEvent<'_>| {
                if event.kind == StepKind::Carve && first_open_cells.is_none() {
                    let open = event.grid.cells().iter().filter(|c| c.is_open()).count();
                    first_open_cells = Some(open);
                }
            };
            let observer: &mut dyn StepObserver = &mut check;
            randomized_prim(&mut maze, &mut get_rng(Some(4)), Some(observer));
        }
        assert_eq!(first_open_cells, Some(1));
        assert!(maze.is_perfect());
    }
}
