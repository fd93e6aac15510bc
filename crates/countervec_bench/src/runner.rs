use std::{
    io::Write,
    time::{Duration, Instant},
};

use anyhow::Result;
use rand::{Rng, SeedableRng};

use crate::container::ContainerBenchmark;

/// Which containers a benchmark run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    CounterVec,
    StdVec,
}

#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub containers: Vec<Container>,
    pub counter_count: usize,
    pub random_read_count: usize,
    pub num_iterations: usize,
    pub random_seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            containers: vec![Container::CounterVec, Container::StdVec],
            counter_count: 1_000_000,
            random_read_count: 1_000_000,
            num_iterations: 5,
            random_seed: 42,
        }
    }
}

pub struct BenchmarkResult {
    pub name: String,
    pub fill_time: Duration,
    pub len_time: Duration,
    pub forward_scan_time: Duration,
    pub reverse_scan_time: Duration,
    pub random_read_time: Duration,
    pub config: BenchConfig,
    pub run_index: usize,
}

impl BenchmarkResult {
    fn format_duration(d: Duration) -> String {
        let secs = d.as_secs_f64();
        if secs < 1.0 {
            format!("{:.2} ms", secs * 1000.0)
        } else if secs < 60.0 {
            format!("{:.2} s", secs)
        } else {
            let mins = (secs / 60.0).floor();
            let secs = secs % 60.0;
            format!("{:.0}m {:.2}s", mins, secs)
        }
    }

    fn format_throughput(ops: u64, duration: Duration) -> String {
        let secs = duration.as_secs_f64();
        if secs < 0.000001 {
            return String::from("N/A");
        }
        let ops_per_sec = ops as f64 / secs;
        if ops_per_sec >= 1_000_000.0 {
            format!("{:.2} M ops/s", ops_per_sec / 1_000_000.0)
        } else if ops_per_sec >= 1_000.0 {
            format!("{:.2} K ops/s", ops_per_sec / 1_000.0)
        } else {
            format!("{:.2} ops/s", ops_per_sec)
        }
    }
}

pub struct BenchmarkRunner {
    config: BenchConfig,
}

impl BenchmarkRunner {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Same indices for every container and iteration.
    pub fn generate_random_indices(&self) -> Vec<usize> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(self.config.random_seed);
        (0..self.config.random_read_count)
            .map(|_| rng.random_range(0..self.config.counter_count))
            .collect()
    }

    pub fn prepare_container<C: ContainerBenchmark>(&self) -> Result<(C, Duration)> {
        print!("  {} ... ", C::name());
        std::io::stdout().flush().ok();

        let mut container = C::create()?;

        let start = Instant::now();
        container.fill_sequential(self.config.counter_count)?;
        let fill_time = start.elapsed();

        println!("done");

        Ok((container, fill_time))
    }

    pub fn print_summary(results: &[BenchmarkResult]) {
        println!("\nRESULTS\n");

        for result in results {
            let scan_ops = result.config.counter_count as u64;
            let random_ops = result.config.random_read_count as u64;

            println!("{} (run {})", result.name, result.run_index + 1);
            println!(
                "  Fill:        {}",
                BenchmarkResult::format_throughput(scan_ops, result.fill_time)
            );
            println!(
                "  len():       {}",
                BenchmarkResult::format_duration(result.len_time)
            );
            println!(
                "  Forward:     {}",
                BenchmarkResult::format_throughput(scan_ops, result.forward_scan_time)
            );
            println!(
                "  Reverse:     {}",
                BenchmarkResult::format_throughput(scan_ops, result.reverse_scan_time)
            );
            println!(
                "  Random:      {}",
                BenchmarkResult::format_throughput(random_ops, result.random_read_time)
            );
            println!();
        }
    }
}
