use super::cell::CellState;

/// Flat, row-major storage of every grid coordinate of a maze.
///
/// While recording is on, every call to [`Grid::set`] that actually changes a value is
/// logged, so observers can be told which coordinates moved between two steps.
#[derive(Debug, Clone)]
pub struct Grid {
    data: Box<[CellState]>,
    width: u16,
    height: u16,
    changes: Vec<(u16, u16)>,
    recording: bool,
}

impl Grid {
    pub fn new(width: u16, height: u16, cell: CellState) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
            changes: Vec::new(),
            recording: false,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Row-major view of the whole grid.
    pub fn cells(&self) -> &[CellState] {
        &self.data
    }

    pub fn is_in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        if !self.is_in_bounds(x, y) {
            panic!(
                "Grid coordinate ({}, {}) is out of bounds for a {}x{} grid",
                x, y, self.width, self.height
            );
        }
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, coord: (u16, u16)) -> CellState {
        self.data[self.ravel_index(coord.0, coord.1)]
    }

    pub fn set(&mut self, coord: (u16, u16), cell: CellState) {
        let idx = self.ravel_index(coord.0, coord.1);
        if self.data[idx] != cell {
            self.data[idx] = cell;
            if self.recording {
                self.changes.push(coord);
            }
        }
    }

    /// Turns change logging on or off. Anything logged so far is discarded either way.
    pub(crate) fn set_recording(&mut self, recording: bool) {
        self.recording = recording;
        self.changes.clear();
    }

    /// Coordinates changed since the last call, in the order they were set.
    pub(crate) fn take_changes(&mut self) -> Vec<(u16, u16)> {
        std::mem::take(&mut self.changes)
    }

    /// Hands a drained buffer back so the next step reuses its allocation.
    pub(crate) fn recycle_changes(&mut self, mut buffer: Vec<(u16, u16)>) {
        buffer.clear();
        if self.changes.is_empty() {
            self.changes = buffer;
        }
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }
}

impl Eq for Grid {}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = CellState;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}
