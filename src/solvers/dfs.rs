use crate::maze::{Cell, CellState, Direction, Maze, StepKind, observer::Notifier};

/// Depth-first search with backtracking, on an explicit stack.
///
/// Directions are tried in `order` at every cell; callers normally pass [`Direction::ALL`]. Cells are marked in progress
/// when entered and turned back into passages when the search backs out of them, so only the
/// current branch is ever marked. The path found is valid but not necessarily the shortest.
pub(super) fn solve_dfs(
    maze: &mut Maze,
    start: Cell,
    goal: Cell,
    order: &[Direction],
    notifier: &mut Notifier<'_>,
) -> Option<Vec<Cell>> {
    let mut visited = vec![false; maze.cell_count()];
    visited[maze.cell_index(start)] = true;
    maze.set_cell(start, CellState::InProgress);
    notifier.emit(maze, StepKind::Explore);

    // Each frame holds a cell and the index of the next direction to try from it
    let mut stack: Vec<(Cell, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let cell = frame.0;
        if cell == goal {
            return Some(stack.iter().map(|&(cell, _)| cell).collect());
        }

        let mut next = None;
        while frame.1 < order.len() {
            let direction = order[frame.1];
            frame.1 += 1;
            if let Some(neighbor) = maze.neighbor(cell, direction) {
                if !visited[maze.cell_index(neighbor)] && maze.is_open_between(cell, neighbor) {
                    next = Some(neighbor);
                    break;
                }
            }
        }

        match next {
            Some(neighbor) => {
                visited[maze.cell_index(neighbor)] = true;
                let passage = maze.wall_between(cell, neighbor);
                maze.set(passage, CellState::InProgress);
                maze.set_cell(neighbor, CellState::InProgress);
                stack.push((neighbor, 0));
                notifier.emit(maze, StepKind::Explore);
            }
            None => {
                // Dead end: unmark the cell and the passage that led here
                stack.pop();
                maze.set_cell(cell, CellState::Passage);
                if let Some(&(parent, _)) = stack.last() {
                    let passage = maze.wall_between(parent, cell);
                    maze.set(passage, CellState::Passage);
                }
                notifier.emit(maze, StepKind::Retreat);
            }
        }
    }

    None
}
