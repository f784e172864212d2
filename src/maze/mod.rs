pub mod cell;
pub mod grid;
pub mod observer;

use std::collections::VecDeque;
use std::fmt;

pub use cell::CellState;
pub use grid::Grid;
pub use observer::{StepEvent, StepKind, StepObserver};

use crate::error::MazeError;

/// A logical cell position `(x, y)`, with `x < width` and `y < height`.
pub type Cell = (u8, u8);
/// A position on the underlying grid, walls included.
pub type Coord = (u16, u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Fixed exploration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];
}

/// How the cells of a maze are filled before a generator starts carving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSeeding {
    /// Every cell is a passage, every wall between cells is intact.
    Open,
    /// Everything is a wall; cells are opened as they join the maze.
    Closed,
}

/// A rectangular maze of `width * height` logical cells.
///
/// The cells live on a `(2 * width + 1) x (2 * height + 1)` grid: cell `(x, y)` sits at grid
/// coordinate `(2x + 1, 2y + 1)` and the coordinate halfway between two adjacent cells is the
/// wall (or passage) connecting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    width: u8,
    height: u8,
}

impl Maze {
    /// Creates a new maze with the given width and height, in cells.
    /// Every cell starts as a passage with all walls around it intact.
    pub fn new(width: u8, height: u8) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions {
                width: width as u32,
                height: height as u32,
            });
        }
        // n cells in each dimension -> n + 1 walls -> 2n + 1 total
        let grid_width = width as u16 * 2 + 1;
        let grid_height = height as u16 * 2 + 1;
        let mut maze = Maze {
            grid: Grid::new(grid_width, grid_height, CellState::Wall),
            width,
            height,
        };
        maze.prepare(CellSeeding::Open);
        Ok(maze)
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn get(&self, coord: Coord) -> CellState {
        self.grid.get(coord)
    }

    pub fn set(&mut self, coord: Coord, cell: CellState) {
        self.grid.set(coord, cell);
    }

    /// Checks if the given cell is within the bounds of the maze.
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.0 < self.width && cell.1 < self.height
    }

    pub fn to_grid(cell: Cell) -> Coord {
        (cell.0 as u16 * 2 + 1, cell.1 as u16 * 2 + 1)
    }

    /// Row-major index of a cell, in `0..cell_count()`.
    pub fn cell_index(&self, cell: Cell) -> usize {
        cell.1 as usize * self.width as usize + cell.0 as usize
    }

    pub fn cell_at(&self, index: usize) -> Cell {
        let width = self.width as usize;
        ((index % width) as u8, (index / width) as u8)
    }

    pub fn set_cell(&mut self, cell: Cell, state: CellState) {
        self.grid.set(Maze::to_grid(cell), state);
    }

    /// Resets the whole grid to the starting pattern of a generator family.
    /// The border is walled up again, dropping any entrance and exit.
    pub fn prepare(&mut self, seeding: CellSeeding) {
        (0..self.grid.height()).for_each(|y| {
            (0..self.grid.width()).for_each(|x| {
                let state = match seeding {
                    CellSeeding::Open if x % 2 == 1 && y % 2 == 1 => CellState::Passage,
                    _ => CellState::Wall,
                };
                self.grid.set((x, y), state);
            })
        });
    }

    /// The cell one step away in the given direction, if it is inside the maze.
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (x, y) = cell;
        let next = match direction {
            Direction::North => (x, y.checked_sub(1)?),
            Direction::South => (x, y.checked_add(1)?),
            Direction::East => (x.checked_add(1)?, y),
            Direction::West => (x.checked_sub(1)?, y),
        };
        self.is_in_bounds(next).then_some(next)
    }

    /// Get neighbors of a cell, in north, south, east, west order.
    /// A neighbor is considered a cell that is one step away in the cardinal directions.
    pub fn neighbors_of_cell(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(cell, direction))
    }

    /// Grid coordinate of the wall slot between two adjacent cells.
    ///
    /// # Panics
    /// If either cell is out of bounds or the cells are not adjacent.
    pub fn wall_between(&self, a: Cell, b: Cell) -> Coord {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            panic!("The given cells {:?} and {:?} are out of bounds", a, b);
        }
        if a.0.abs_diff(b.0) as u16 + a.1.abs_diff(b.1) as u16 != 1 {
            panic!("Cells {:?} and {:?} are not adjacent", a, b);
        }
        (a.0 as u16 + b.0 as u16 + 1, a.1 as u16 + b.1 as u16 + 1)
    }

    /// Whether the wall between two adjacent cells has been removed.
    pub fn is_open_between(&self, a: Cell, b: Cell) -> bool {
        self.grid.get(self.wall_between(a, b)).is_open()
    }

    /// Removes the wall between two adjacent cells.
    /// Returns `true` if a wall was removed, `false` if the passage was already open.
    pub fn carve_between(&mut self, a: Cell, b: Cell) -> bool {
        let wall = self.wall_between(a, b);
        if self.grid.get(wall).is_open() {
            false
        } else {
            self.grid.set(wall, CellState::Passage);
            true
        }
    }

    /// Number of removed walls between adjacent cells.
    pub fn open_wall_count(&self) -> usize {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|cell| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter_map(|direction| self.neighbor(cell, direction))
                    .filter(|&next| self.is_open_between(cell, next))
                    .count()
            })
            .sum()
    }

    /// Whether the passages form a spanning tree over all cells: every cell is open,
    /// reachable from every other, and exactly `width * height - 1` walls are removed.
    pub fn is_perfect(&self) -> bool {
        let all_open = (0..self.cell_count())
            .all(|index| self.grid.get(Maze::to_grid(self.cell_at(index))).is_open());
        if !all_open || self.open_wall_count() != self.cell_count() - 1 {
            return false;
        }

        let mut visited = vec![false; self.cell_count()];
        let mut queue = VecDeque::from([(0, 0)]);
        visited[0] = true;
        let mut reached = 1;
        while let Some(cell) = queue.pop_front() {
            for next in self.neighbors_of_cell(cell) {
                let index = self.cell_index(next);
                if !visited[index] && self.is_open_between(cell, next) {
                    visited[index] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }
        reached == self.cell_count()
    }

    /// Scans the grid once for the entrance and exit markers.
    pub fn markers(&self) -> (Option<Coord>, Option<Coord>) {
        let width = self.grid.width() as usize;
        let mut entrance = None;
        let mut exit = None;
        for (index, state) in self.grid.cells().iter().enumerate() {
            let coord = ((index % width) as u16, (index / width) as u16);
            match state {
                CellState::Entrance if entrance.is_none() => entrance = Some(coord),
                CellState::Exit if exit.is_none() => exit = Some(coord),
                _ => {}
            }
        }
        (entrance, exit)
    }

    /// The logical cell directly behind a border coordinate.
    pub fn cell_behind(&self, border: Coord) -> Option<Cell> {
        let (x, y) = border;
        if y % 2 == 0 || !self.grid.is_in_bounds(x, y) {
            return None;
        }
        let cy = ((y - 1) / 2) as u8;
        if x == 0 {
            Some((0, cy))
        } else if x == self.grid.width() - 1 {
            Some((self.width - 1, cy))
        } else {
            None
        }
    }

    /// Walls up the entrance and exit, if any.
    pub fn clear_markers(&mut self) {
        (0..self.grid.height()).for_each(|y| {
            (0..self.grid.width()).for_each(|x| {
                if matches!(self.grid.get((x, y)), CellState::Entrance | CellState::Exit) {
                    self.grid.set((x, y), CellState::Wall);
                }
            })
        });
    }

    /// Turns every `InProgress` and `Solution` mark back into a plain passage.
    pub fn clear_annotations(&mut self) {
        (0..self.grid.height()).for_each(|y| {
            (0..self.grid.width()).for_each(|x| {
                if self.grid.get((x, y)).is_annotation() {
                    self.grid.set((x, y), CellState::Passage);
                }
            })
        });
    }
}

impl std::ops::Index<Cell> for Maze {
    type Output = CellState;

    fn index(&self, index: Cell) -> &Self::Output {
        &self.grid[Maze::to_grid(index)]
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                write!(f, "{}", self.grid.get((x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_indexing() {
        let mut maze = Maze::new(5, 5).unwrap();
        maze.set_cell((2, 3), CellState::Solution);
        assert_eq!(maze[(2, 3)], CellState::Solution);
        assert_eq!(maze.get((5, 7)), CellState::Solution);
    }

    #[test]
    fn test_new_layout() {
        let maze = Maze::new(3, 2).unwrap();
        assert_eq!(maze.grid().width(), 7);
        assert_eq!(maze.grid().height(), 5);
        assert_eq!(maze.get((1, 1)), CellState::Passage);
        assert_eq!(maze.get((2, 1)), CellState::Wall);
        assert_eq!(maze.get((0, 1)), CellState::Wall);
        assert_eq!(maze.open_wall_count(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Maze::new(0, 4),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
    }

    #[test]
    fn test_remove_wall() {
        let mut maze = Maze::new(5, 5).unwrap();
        assert!(maze.carve_between((1, 1), (2, 1)));
        // Trying to remove the same wall again should return false
        assert!(!maze.carve_between((2, 1), (1, 1)));
        // Check that the wall has been removed in the grid
        assert_eq!(maze.get((4, 3)), CellState::Passage);
        assert!(maze.is_open_between((1, 1), (2, 1)));
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::new(5, 5).unwrap();
        assert!(!maze.is_in_bounds((5, 5)));
        assert!(!maze.is_in_bounds((0, 5)));
        assert!(!maze.is_in_bounds((5, 0)));
        assert!(maze.is_in_bounds((4, 4)));
    }

    #[test]
    fn test_neighbors_of_cell() {
        let maze = Maze::new(3, 3).unwrap();
        let center = maze.neighbors_of_cell((1, 1)).collect::<Vec<_>>();
        assert_eq!(center, vec![(1, 0), (1, 2), (2, 1), (0, 1)]);
        let corner = maze.neighbors_of_cell((0, 0)).collect::<Vec<_>>();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn test_wall_between_non_adjacent_panics() {
        let maze = Maze::new(3, 3).unwrap();
        maze.wall_between((0, 0), (1, 1));
    }

    #[test]
    fn test_perfect_check_rejects_missing_carve() {
        // A 2x2 spanning tree needs three open walls
        let mut maze = Maze::new(2, 2).unwrap();
        maze.carve_between((0, 0), (1, 0));
        maze.carve_between((0, 0), (0, 1));
        assert!(!maze.is_perfect());
        maze.carve_between((1, 0), (1, 1));
        assert!(maze.is_perfect());
        // A fourth wall closes a cycle
        maze.carve_between((0, 1), (1, 1));
        assert!(!maze.is_perfect());
    }

    #[test]
    fn test_single_cell_is_perfect() {
        let maze = Maze::new(1, 1).unwrap();
        assert!(maze.is_perfect());
    }

    #[test]
    fn test_prepare_walls_up_the_border() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.set((0, 1), CellState::Entrance);
        maze.set((4, 3), CellState::Exit);
        maze.prepare(CellSeeding::Closed);
        assert_eq!(maze.get((1, 1)), CellState::Wall);
        assert_eq!(maze.markers(), (None, None));

        maze.set((0, 3), CellState::Passage);
        maze.prepare(CellSeeding::Open);
        assert_eq!(maze.get((0, 3)), CellState::Wall);
        assert_eq!(maze.get((1, 3)), CellState::Passage);
    }

    #[test]
    fn test_clear_markers() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.set((0, 1), CellState::Entrance);
        maze.set((0, 3), CellState::Exit);
        maze.set_cell((1, 1), CellState::Solution);
        maze.clear_markers();
        assert_eq!(maze.markers(), (None, None));
        assert_eq!(maze.get((0, 1)), CellState::Wall);
        assert_eq!(maze[(1, 1)], CellState::Solution);
    }

    #[test]
    fn test_markers_and_cell_behind() {
        let mut maze = Maze::new(3, 2).unwrap();
        assert_eq!(maze.markers(), (None, None));
        maze.set((0, 3), CellState::Entrance);
        maze.set((6, 1), CellState::Exit);
        assert_eq!(maze.markers(), (Some((0, 3)), Some((6, 1))));
        assert_eq!(maze.cell_behind((0, 3)), Some((0, 1)));
        assert_eq!(maze.cell_behind((6, 1)), Some((2, 0)));
        assert_eq!(maze.cell_behind((3, 0)), None);
    }

    #[test]
    fn test_clear_annotations() {
        let mut maze = Maze::new(2, 1).unwrap();
        maze.carve_between((0, 0), (1, 0));
        maze.set_cell((0, 0), CellState::InProgress);
        maze.set((2, 1), CellState::Solution);
        maze.set((0, 1), CellState::Entrance);
        maze.clear_annotations();
        assert_eq!(maze[(0, 0)], CellState::Passage);
        assert_eq!(maze.get((2, 1)), CellState::Passage);
        assert_eq!(maze.get((0, 1)), CellState::Entrance);
    }
}
