//! Perfect maze generation and solving.
//!
//! A [`maze::Maze`] is carved by one of the [`generators::Generator`] algorithms, opened on
//! its left and right borders by [`placement::place_entrance_exit`] and solved by one of the
//! [`solvers::Solver`] algorithms. [`engine::run`] chains the three from a
//! [`config::MazeConfig`]. Every step can be watched through a [`maze::StepObserver`].

pub mod config;
pub mod engine;
pub mod error;
pub mod generators;
pub mod maze;
pub mod placement;
pub mod solvers;
pub mod union_find;

pub use error::MazeError;
