mod dfs;
mod flood_fill;

use crate::error::MazeError;
use crate::maze::{
    Cell, CellState, Coord, Direction, Maze, StepKind, StepObserver, observer::Notifier,
};
use dfs::solve_dfs;
use flood_fill::solve_flood_fill;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Dfs,
    FloodFill,
}

impl Solver {
    pub const ALL: [Solver; 2] = [Solver::Dfs, Solver::FloodFill];

    /// Name accepted by [`str::parse`].
    pub fn name(self) -> &'static str {
        match self {
            Solver::Dfs => "dfs",
            Solver::FloodFill => "flood_fill",
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::FloodFill => write!(f, "Flood Fill (BFS)"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        match wanted.as_str() {
            "dfs" => Ok(Solver::Dfs),
            "flood_fill" | "bfs" => Ok(Solver::FloodFill),
            _ => Err(MazeError::UnknownSolver(s.to_string())),
        }
    }
}

/// Cells walked from the one behind the entrance to the one behind the exit, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells on the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The path on grid coordinates, with the passages between consecutive cells.
    pub fn grid_route(&self) -> Vec<Coord> {
        let mut route = Vec::with_capacity(self.cells.len() * 2);
        for (i, &cell) in self.cells.iter().enumerate() {
            if i > 0 {
                let (px, py) = Maze::to_grid(self.cells[i - 1]);
                let (cx, cy) = Maze::to_grid(cell);
                route.push(((px + cx) / 2, (py + cy) / 2));
            }
            route.push(Maze::to_grid(cell));
        }
        route
    }
}

/// Outcome of a solve. Not reaching the exit is a regular result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    Solved(Path),
    Unsolvable,
}

impl SolveResult {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SolveResult::Solved(path) => Some(path),
            SolveResult::Unsolvable => None,
        }
    }
}

/// Finds a path from the entrance to the exit and marks it on the grid as `Solution`.
///
/// Marks left by an earlier solve are cleared first, so solving twice gives the same grid.
/// DFS tries directions in the [`Direction::ALL`] order.
pub fn solve_maze(
    maze: &mut Maze,
    solver: Solver,
    observer: Option<&mut dyn StepObserver>,
) -> Result<SolveResult, MazeError> {
    solve_maze_with_order(maze, solver, Direction::ALL, observer)
}

/// Like [`solve_maze`], with the direction order DFS tries at every cell.
///
/// Flood fill always finds a shortest path and ignores `order`.
pub fn solve_maze_with_order(
    maze: &mut Maze,
    solver: Solver,
    order: [Direction; 4],
    observer: Option<&mut dyn StepObserver>,
) -> Result<SolveResult, MazeError> {
    let (Some(entrance), Some(exit)) = maze.markers() else {
        return Err(MazeError::MissingEntranceOrExit);
    };
    let start = maze
        .cell_behind(entrance)
        .ok_or(MazeError::MissingEntranceOrExit)?;
    let goal = maze
        .cell_behind(exit)
        .ok_or(MazeError::MissingEntranceOrExit)?;

    let mut notifier = Notifier::new(maze, observer);
    maze.clear_annotations();
    notifier.emit(maze, StepKind::Clear);

    tracing::debug!(
        "[solve] {} from {:?} to {:?}",
        solver,
        start,
        goal
    );
    let found = match solver {
        Solver::Dfs => solve_dfs(maze, start, goal, &order, &mut notifier),
        Solver::FloodFill => solve_flood_fill(maze, start, goal, &mut notifier),
    };

    let result = match found {
        Some(cells) => {
            let path = Path { cells };
            for coord in path.grid_route() {
                maze.set(coord, CellState::Solution);
            }
            notifier.emit(maze, StepKind::Trace);
            tracing::debug!("[solve] {} found a path of {} cells", solver, path.len());
            SolveResult::Solved(path)
        }
        None => {
            tracing::warn!("[solve] {} could not reach the exit", solver);
            SolveResult::Unsolvable
        }
    };
    notifier.finish(maze);
    Ok(result)
}
