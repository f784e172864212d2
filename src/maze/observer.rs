use super::{Maze, grid::Grid};

/// What kind of mutation produced a [`StepEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Everything inside the border was reset to a generator's starting fill.
    Reset,
    /// A wall between two cells was opened.
    Carve,
    /// The recursive backtracker gave up on a dead end.
    Backtrack,
    /// A generator entered a new cell.
    Walk,
    /// A random walk ran into itself and dropped the loop.
    EraseLoop,
    /// A loop-erased walk was carved into the maze.
    Finalize,
    /// Entrance and exit were marked on the border.
    Place,
    /// A solver entered a cell.
    Explore,
    /// A solver left a dead end.
    Retreat,
    /// The solution path was marked.
    Trace,
    /// Solver marks, or an earlier entrance and exit, were removed.
    Clear,
}

/// Notification handed to a [`StepObserver`] after a mutating step.
#[derive(Debug, Clone, Copy)]
pub struct StepEvent<'a> {
    pub kind: StepKind,
    /// Grid coordinates whose state changed since the previous event.
    pub changed: &'a [(u16, u16)],
    pub grid: &'a Grid,
}

/// Receives every mutating step of generation, placement and solving, synchronously.
pub trait StepObserver {
    fn on_step(&mut self, event: StepEvent<'_>);
}

impl<F> StepObserver for F
where
    F: FnMut(StepEvent<'_>),
{
    fn on_step(&mut self, event: StepEvent<'_>) {
        self(event)
    }
}

/// Lends an optional observer out for one phase while keeping it for the next.
pub fn reborrow<'a>(
    observer: &'a mut Option<&mut dyn StepObserver>,
) -> Option<&'a mut dyn StepObserver> {
    match observer {
        Some(observer) => Some(&mut **observer),
        None => None,
    }
}

/// Forwards pending grid changes to an optional observer.
///
/// The grid only logs changes between [`Notifier::new`] and [`Notifier::finish`], and only when
/// an observer is attached. Writes made outside a phase are never reported.
pub(crate) struct Notifier<'o> {
    observer: Option<&'o mut dyn StepObserver>,
}

impl<'o> Notifier<'o> {
    pub(crate) fn new(maze: &mut Maze, observer: Option<&'o mut dyn StepObserver>) -> Self {
        maze.grid.set_recording(observer.is_some());
        Notifier { observer }
    }

    /// Ends the phase: changes not emitted by now are dropped and logging stops.
    pub(crate) fn finish(self, maze: &mut Maze) {
        maze.grid.set_recording(false);
    }

    pub(crate) fn emit(&mut self, maze: &mut Maze, kind: StepKind) {
        let changed = maze.grid.take_changes();
        if let Some(observer) = self.observer.as_deref_mut() {
            if !changed.is_empty() {
                observer.on_step(StepEvent {
                    kind,
                    changed: &changed,
                    grid: &maze.grid,
                });
            }
        }
        maze.grid.recycle_changes(changed);
    }
}
