//! Performance benchmark comparing serial and parallel generation steps

use std::time::Instant;

use aged_life::{EngineError, GridEngine};
use rand::{SeedableRng, rngs::StdRng};

fn seeded_engine(size: usize) -> Result<GridEngine, EngineError> {
    let mut engine = GridEngine::new(size, size)?;
    engine.randomize_with(&mut StdRng::seed_from_u64(0xC0FFEE), 0.15)?;
    Ok(engine)
}

fn benchmark_serial(size: usize, iterations: u32) -> Result<f64, EngineError> {
    let mut engine = seeded_engine(size)?;

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn benchmark_parallel(size: usize, iterations: u32) -> Result<f64, EngineError> {
    let mut engine = seeded_engine(size)?;

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step_parallel();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> anyhow::Result<()> {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [64, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10} {:>14}", "Size", "Serial", "Parallel", "Speedup", "Cells/sec");
    println!("{:-<62}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations)?;
        let parallel_ms = benchmark_parallel(size, iterations)?;
        let cells = (size * size) as f64;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x {:>13.1}M",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            cells / (parallel_ms / 1000.0) / 1_000_000.0
        );
    }

    Ok(())
}
