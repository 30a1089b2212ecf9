use std::time::{Duration, Instant};

use mazerun::{config::Config, generators::MazeGenerator};

fn main() -> std::io::Result<()> {
    let config = Config::from_env();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);
    let size = args
        .next()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(u8::MAX as u16);

    let mut generator = MazeGenerator::new(config.seed);
    let mut generate_time = Duration::ZERO;
    let mut solve_time = Duration::ZERO;
    let mut path_edges = 0;

    for _ in 0..num_iters {
        let start = Instant::now();
        let maze = generator
            .generate(size, size)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;
        generate_time += start.elapsed();

        let start = Instant::now();
        path_edges += maze.escape_path().len();
        solve_time += start.elapsed();
    }

    let runs = num_iters.max(1) as u32;
    println!("{} runs of a {}x{} maze", num_iters, size, size);
    println!("  generate: {:?} per run", generate_time / runs);
    println!("  solve:    {:?} per run", solve_time / runs);
    println!("  average escape path: {} edges", path_edges / num_iters.max(1));
    Ok(())
}
