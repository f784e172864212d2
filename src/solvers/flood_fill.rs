use std::collections::VecDeque;

use crate::maze::{Cell, CellState, Maze, StepKind, observer::Notifier};

/// Breadth-first flood fill from `start`, returning a shortest path to `goal`.
///
/// Cells are taken in FIFO order, so they come out in non-decreasing distance from the start
/// and the first time the goal is popped its parent chain is a shortest path. Exploration marks
/// are removed once the search ends.
pub(super) fn solve_flood_fill(
    maze: &mut Maze,
    start: Cell,
    goal: Cell,
    notifier: &mut Notifier<'_>,
) -> Option<Vec<Cell>> {
    let mut visited = vec![false; maze.cell_count()];
    let mut parents: Vec<Option<Cell>> = vec![None; maze.cell_count()];
    visited[maze.cell_index(start)] = true;
    let mut queue = VecDeque::from([start]);
    let mut reached = false;

    while let Some(cell) = queue.pop_front() {
        maze.set_cell(cell, CellState::InProgress);
        if let Some(parent) = parents[maze.cell_index(cell)] {
            let passage = maze.wall_between(parent, cell);
            maze.set(passage, CellState::InProgress);
        }
        notifier.emit(maze, StepKind::Explore);

        if cell == goal {
            reached = true;
            break;
        }

        for neighbor in maze.neighbors_of_cell(cell) {
            let index = maze.cell_index(neighbor);
            if !visited[index] && maze.is_open_between(cell, neighbor) {
                visited[index] = true;
                parents[index] = Some(cell);
                queue.push_back(neighbor);
            }
        }
    }

    // Exploration marks are scratch state, only the final path stays marked
    maze.clear_annotations();
    notifier.emit(maze, StepKind::Clear);

    if !reached {
        return None;
    }

    let mut path = vec![goal];
    let mut current = goal;
    while let Some(parent) = parents[maze.cell_index(current)] {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flood_fill_takes_the_short_way_round() {
        // A 3x2 loop: the goal is reachable both directly and the long way around
        let mut maze = Maze::new(3, 2).unwrap();
        maze.carve_between((0, 0), (1, 0));
        maze.carve_between((1, 0), (2, 0));
        maze.carve_between((0, 0), (0, 1));
        maze.carve_between((0, 1), (1, 1));
        maze.carve_between((1, 1), (2, 1));
        maze.carve_between((2, 1), (2, 0));
        let mut notifier = Notifier::new(&mut maze, None);
        let path = solve_flood_fill(&mut maze, (0, 0), (2, 0), &mut notifier);
        assert_eq!(path, Some(vec![(0, 0), (1, 0), (2, 0)]));
        assert!(!maze.grid().cells().contains(&CellState::InProgress));
    }

    #[test]
    fn test_flood_fill_unreachable_goal() {
        let mut maze = Maze::new(3, 1).unwrap();
        maze.carve_between((0, 0), (1, 0));
        let mut notifier = Notifier::new(&mut maze, None);
        assert_eq!(solve_flood_fill(&mut maze, (0, 0), (2, 0), &mut notifier), None);
        assert!(!maze.grid().cells().contains(&CellState::InProgress));
    }
}
