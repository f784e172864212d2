use crate::{
    generators::random_cell,
    maze::{Cell, CellSeeding, CellState, Maze, StepKind, StepObserver, observer::Notifier},
};
use rand::{Rng, seq::IndexedRandom};

/// Wilson's algorithm: loop-erased random walks grafted onto a growing tree.
///
/// Each walk starts from a random cell outside the tree and wanders until it touches the tree.
/// Whenever the walk crosses its own trail the loop is erased, so what gets carved is always a
/// simple path. Like Aldous-Broder the result is a uniform spanning tree.
pub fn wilson<R: Rng + ?Sized>(
    maze: &mut Maze,
    rng: &mut R,
    observer: Option<&mut dyn StepObserver>,
) {
    let mut notifier = Notifier::new(maze, observer);
    maze.prepare(CellSeeding::Open);
    notifier.emit(maze, StepKind::Reset);

    let cell_count = maze.cell_count();
    let mut in_tree = vec![false; cell_count];
    let root = random_cell(maze, rng);
    in_tree[maze.cell_index(root)] = true;

    let mut outside: Vec<usize> = (0..cell_count)
        .filter(|&index| !in_tree[index])
        .collect();
    // Position of each cell on the current walk, if it is on it
    let mut walk_position: Vec<Option<usize>> = vec![None; cell_count];
    let mut walk: Vec<Cell> = Vec::new();
    let mut neighbors = Vec::with_capacity(4);
    let mut walks: usize = 0;

    while !outside.is_empty() {
        // Cells grafted by earlier walks are dropped lazily as they get drawn
        let pick = rng.random_range(0..outside.len());
        let start_index = outside[pick];
        if in_tree[start_index] {
            outside.swap_remove(pick);
            continue;
        }
        walks += 1;
        let start = maze.cell_at(start_index);
        walk.push(start);
        walk_position[start_index] = Some(0);
        maze.set_cell(start, CellState::InProgress);
        notifier.emit(maze, StepKind::Walk);

        let mut current = start;
        while !in_tree[maze.cell_index(current)] {
            neighbors.clear();
            neighbors.extend(maze.neighbors_of_cell(current));
            let Some(&next) = neighbors.choose(rng) else {
                break;
            };
            let next_index = maze.cell_index(next);

            if let Some(position) = walk_position[next_index] {
                // Erase the loop, keeping `next` as the tip of the walk
                for &erased in &walk[position + 1..] {
                    walk_position[maze.cell_index(erased)] = None;
                    maze.set_cell(erased, CellState::Passage);
                }
                walk.truncate(position + 1);
                notifier.emit(maze, StepKind::EraseLoop);
            } else {
                walk_position[next_index] = Some(walk.len());
                walk.push(next);
                if !in_tree[next_index] {
                    maze.set_cell(next, CellState::InProgress);
                }
                notifier.emit(maze, StepKind::Walk);
            }
            current = next;
        }

        // The last cell of the walk is already in the tree
        for pair in walk.windows(2) {
            maze.carve_between(pair[0], pair[1]);
        }
        for &cell in &walk {
            let index = maze.cell_index(cell);
            in_tree[index] = true;
            walk_position[index] = None;
            maze.set_cell(cell, CellState::Passage);
        }
        walk.clear();
        notifier.emit(maze, StepKind::Finalize);
    }

    tracing::debug!(
        "[generate] Wilson grafted {} walks onto the tree",
        walks
    );
    notifier.finish(maze);
}
