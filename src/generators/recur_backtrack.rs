use crate::{
    generators::random_cell,
    maze::{CellSeeding, CellState, Direction, Maze, StepKind, StepObserver, observer::Notifier},
};
use rand::{Rng, seq::SliceRandom};

/// Randomized depth-first search with an explicit stack.
///
/// Long winding corridors with few branches.
pub fn recursive_backtrack<R: Rng + ?Sized>(
    maze: &mut Maze,
    rng: &mut R,
    observer: Option<&mut dyn StepObserver>,
) {
    let mut notifier = Notifier::new(maze, observer);
    maze.prepare(CellSeeding::Open);
    notifier.emit(maze, StepKind::Reset);

    let mut visited = vec![false; maze.cell_count()];

    // Initialize the starting point
    let start = random_cell(maze, rng);
    visited[maze.cell_index(start)] = true;
    // Cells on the stack are shown in progress until they are backtracked over
    maze.set_cell(start, CellState::InProgress);
    notifier.emit(maze, StepKind::Walk);

    // Initialize the stack with the starting point
    let mut stack = vec![start];
    let mut directions = Direction::ALL;

    while let Some(&cell) = stack.last() {
        directions.shuffle(rng);
        let next = directions
            .iter()
            .filter_map(|&direction| maze.neighbor(cell, direction))
            .find(|&neighbor| !visited[maze.cell_index(neighbor)]);

        match next {
            Some(neighbor) => {
                maze.carve_between(cell, neighbor);
                maze.set_cell(neighbor, CellState::InProgress);
                visited[maze.cell_index(neighbor)] = true;
                // Carve on from the neighbor; this cell stays below it to be revisited
                stack.push(neighbor);
                notifier.emit(maze, StepKind::Carve);
            }
            None => {
                stack.pop();
                maze.set_cell(cell, CellState::Passage);
                notifier.emit(maze, StepKind::Backtrack);
            }
        }
    }
    notifier.finish(maze);
}
