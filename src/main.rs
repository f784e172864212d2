use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use mazecraft::{
    config::MazeConfig,
    engine,
    generators::Generator,
    maze::{StepEvent, StepObserver},
    solvers::{SolveResult, Solver},
};

/// Generate a perfect maze, open it on the borders and solve it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells (1-255)
    #[arg(long, default_value_t = 15)]
    width: u32,

    /// Maze height in cells (1-255)
    #[arg(long, default_value_t = 15)]
    height: u32,

    /// Generation algorithm: dfs, aldous_broder, wilson, prim or kruskal
    #[arg(long, default_value = "dfs")]
    generator: Generator,

    /// Solving algorithm: dfs or flood_fill
    #[arg(long, default_value = "flood_fill")]
    solver: Solver,

    /// Random seed, for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Refuse mazes with more cells than this
    #[arg(long)]
    max_cells: Option<u32>,

    /// Log verbosity
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Only print the generated maze, without the solution marks
    #[arg(long)]
    no_solve: bool,
}

/// Counts the observed steps of a run.
#[derive(Default, Debug)]
struct StepCounter {
    steps: usize,
    changed: usize,
}

impl StepObserver for StepCounter {
    fn on_step(&mut self, event: StepEvent<'_>) {
        self.steps += 1;
        self.changed += event.changed.len();
    }
}

/// Installs the global subscriber. The returned guard flushes file logs when dropped.
fn init_tracing(
    level: Level,
    log_file: Option<&PathBuf>,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(args.log_level, args.log_file.as_ref())?;

    let mut config = MazeConfig::new(args.width, args.height)
        .with_generator(args.generator)
        .with_solver(args.solver);
    config.seed = args.seed;
    config.max_cells = args.max_cells;

    let mut counter = StepCounter::default();
    let observer: &mut dyn StepObserver = &mut counter;
    let mut run = engine::run(&config, Some(observer))
        .with_context(|| format!("cannot build a {}x{} maze", args.width, args.height))?;
    tracing::info!(
        "Run took {} steps touching {} grid coordinates",
        counter.steps,
        counter.changed
    );

    if args.no_solve {
        run.maze.clear_annotations();
    }
    print!("{}", run.maze);
    println!("Generator: {}", config.generator);
    match &run.result {
        SolveResult::Solved(path) if !args.no_solve => {
            println!("Solver: {}", config.solver);
            println!("Path length: {} cells", path.len());
        }
        SolveResult::Solved(_) => {}
        SolveResult::Unsolvable => println!("No path found to the exit."),
    }
    Ok(())
}
