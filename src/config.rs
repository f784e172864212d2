use crate::error::MazeError;
use crate::generators::Generator;
use crate::solvers::Solver;

/// Everything needed to build, open and solve one maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// Width in cells, 1 to 255.
    pub width: u32,
    /// Height in cells, 1 to 255.
    pub height: u32,
    pub generator: Generator,
    pub solver: Solver,
    /// Seed for reproducible runs; `None` draws one from the operating system.
    pub seed: Option<u64>,
    /// Upper bound on `width * height`, for callers that need to bound generation time.
    pub max_cells: Option<u32>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            generator: Generator::RecurBacktrack,
            solver: Solver::FloodFill,
            seed: None,
            max_cells: None,
        }
    }
}

impl MazeConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_generator(mut self, generator: Generator) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_cells(mut self, max_cells: u32) -> Self {
        self.max_cells = Some(max_cells);
        self
    }

    /// Checks the dimensions and returns them as maze sizes.
    pub fn validate(&self) -> Result<(u8, u8), MazeError> {
        let invalid = MazeError::InvalidDimensions {
            width: self.width,
            height: self.height,
        };
        let width = u8::try_from(self.width).map_err(|_| invalid.clone())?;
        let height = u8::try_from(self.height).map_err(|_| invalid.clone())?;
        if width == 0 || height == 0 {
            return Err(invalid);
        }

        let cells = self.width * self.height;
        if let Some(max) = self.max_cells {
            if cells > max {
                return Err(MazeError::TooManyCells { cells, max });
            }
        }
        Ok((width, height))
    }
}
