use crossterm::style::{Color, Stylize};

use std::fmt;

/// State of a single grid coordinate, either a logical cell or the wall slot between two cells.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Wall,
    Passage,
    /// Border opening where solving starts.
    Entrance,
    /// Border opening where solving ends.
    Exit,
    /// Being explored by a solver, or on the current walk of a generator.
    InProgress,
    /// Member of the solution path.
    Solution,
}

impl CellState {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Whether the coordinate can be walked through.
    pub fn is_open(self) -> bool {
        self != CellState::Wall
    }

    /// Solver scratch marks, removable without touching the maze topology.
    pub fn is_annotation(self) -> bool {
        matches!(self, CellState::InProgress | CellState::Solution)
    }

    /// Plain symbol used when rendering, always [`CellState::CELL_WIDTH`] columns wide.
    pub fn symbol(self) -> &'static str {
        match self {
            CellState::Wall => "██",
            CellState::Passage => "  ",
            CellState::Entrance => "🟩",
            CellState::Exit => "🟥",
            CellState::InProgress => "· ",
            CellState::Solution => "🟨",
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = match self {
            CellState::Wall => Color::White,
            CellState::Passage => Color::Reset,
            CellState::Entrance => Color::Green,
            CellState::Exit => Color::Red,
            CellState::InProgress => Color::Blue,
            CellState::Solution => Color::Yellow,
        };
        let styled_symbol = self.symbol().with(color);

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                CellState::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_symbols_have_fixed_width() {
        for state in [
            CellState::Wall,
            CellState::Passage,
            CellState::Entrance,
            CellState::Exit,
            CellState::InProgress,
            CellState::Solution,
        ] {
            assert_eq!(state.symbol().width(), CellState::CELL_WIDTH as usize);
        }
    }

    #[test]
    fn test_open_and_annotation() {
        assert!(!CellState::Wall.is_open());
        assert!(CellState::Entrance.is_open());
        assert!(CellState::Solution.is_annotation());
        assert!(!CellState::Passage.is_annotation());
    }
}
