use std::time::{Duration, Instant};

use mazecraft::{config::MazeConfig, engine, generators::Generator, solvers::Solver};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(3);

    for generator in Generator::ALL {
        for solver in Solver::ALL {
            let mut total = Duration::ZERO;
            for iter in 0..num_iters {
                let config = MazeConfig::new(u8::MAX as u32, u8::MAX as u32)
                    .with_generator(generator)
                    .with_solver(solver)
                    .with_seed(iter as u64);
                let started = Instant::now();
                let run = engine::run(&config, None)?;
                total += started.elapsed();
                anyhow::ensure!(run.maze.is_perfect(), "{} produced an imperfect maze", generator);
            }
            tracing::info!(
                "[profile] {} + {}: {:?} per run over {} runs",
                generator,
                solver,
                total / num_iters.max(1) as u32,
                num_iters
            );
        }
    }
    Ok(())
}
