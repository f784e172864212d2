use crate::{
    generators::random_cell,
    maze::{CellSeeding, CellState, Maze, StepKind, StepObserver, observer::Notifier},
};
use rand::{Rng, seq::IndexedRandom};

/// Aldous-Broder random walk.
///
/// Wanders to a uniformly random neighbor at every step, opening the wall whenever it steps
/// into a cell it has never seen. The result is a uniform spanning tree, at the price of many
/// steps through cells that are already part of the maze.
pub fn aldous_broder<R: Rng + ?Sized>(
    maze: &mut Maze,
    rng: &mut R,
    observer: Option<&mut dyn StepObserver>,
) {
    let mut notifier = Notifier::new(maze, observer);
    maze.prepare(CellSeeding::Open);
    notifier.emit(maze, StepKind::Reset);

    let mut visited = vec![false; maze.cell_count()];
    let mut current = random_cell(maze, rng);
    visited[maze.cell_index(current)] = true;
    let mut remaining = maze.cell_count() - 1;
    // The walker is the only cell shown in progress
    maze.set_cell(current, CellState::InProgress);
    notifier.emit(maze, StepKind::Walk);

    let mut steps: usize = 0;
    let mut neighbors = Vec::with_capacity(4);
    while remaining > 0 {
        neighbors.clear();
        neighbors.extend(maze.neighbors_of_cell(current));
        let Some(&next) = neighbors.choose(rng) else {
            // A single cell has no neighbors, but then nothing remains either
            break;
        };
        steps += 1;

        let kind = if visited[maze.cell_index(next)] {
            StepKind::Walk
        } else {
            maze.carve_between(current, next);
            visited[maze.cell_index(next)] = true;
            remaining -= 1;
            StepKind::Carve
        };
        maze.set_cell(current, CellState::Passage);
        maze.set_cell(next, CellState::InProgress);
        current = next;
        notifier.emit(maze, kind);
    }

    maze.set_cell(current, CellState::Passage);
    notifier.emit(maze, StepKind::Walk);
    tracing::debug!(
        "[generate] Aldous-Broder walk took {} steps for {} cells",
        steps,
        maze.cell_count()
    );
    notifier.finish(maze);
}
