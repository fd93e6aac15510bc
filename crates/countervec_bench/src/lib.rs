use std::time::Duration;

use anyhow::Result;

mod container;
mod countervec_impl;
mod runner;
mod std_vec_impl;

use container::ContainerBenchmark;
use countervec_impl::*;
use runner::*;
pub use runner::{BenchConfig, Container};
use std_vec_impl::*;

struct AccumulatedTimes {
    len: Vec<Duration>,
    forward: Vec<Duration>,
    reverse: Vec<Duration>,
    random: Vec<Duration>,
}

impl AccumulatedTimes {
    fn new() -> Self {
        Self {
            len: Vec::new(),
            forward: Vec::new(),
            reverse: Vec::new(),
            random: Vec::new(),
        }
    }

    fn to_result(
        &self,
        name: String,
        fill_time: Duration,
        config: BenchConfig,
        run_index: usize,
    ) -> BenchmarkResult {
        BenchmarkResult {
            name,
            fill_time,
            len_time: avg(&self.len),
            forward_scan_time: avg(&self.forward),
            reverse_scan_time: avg(&self.reverse),
            random_read_time: avg(&self.random),
            config,
            run_index,
        }
    }
}

trait ContainerBenchmarkTrait {
    fn run_len(&mut self) -> Result<Duration>;
    fn run_scan_forward(&mut self) -> Result<Duration>;
    fn run_scan_reverse(&mut self) -> Result<Duration>;
    fn run_read_random(&mut self, indices: &[usize]) -> Result<Duration>;
    fn push_len(&mut self, duration: Duration);
    fn push_forward(&mut self, duration: Duration);
    fn push_reverse(&mut self, duration: Duration);
    fn push_random(&mut self, duration: Duration);
    fn to_result(&self, config: &BenchConfig, run_index: usize) -> BenchmarkResult;
}

struct ContainerRun<C: ContainerBenchmark> {
    container: C,
    fill_time: Duration,
    times: AccumulatedTimes,
}

impl<C: ContainerBenchmark> ContainerRun<C> {
    fn new(runner: &BenchmarkRunner) -> Result<Self> {
        let (container, fill_time) = runner.prepare_container::<C>()?;
        Ok(Self {
            container,
            fill_time,
            times: AccumulatedTimes::new(),
        })
    }
}

impl<C: ContainerBenchmark + 'static> ContainerBenchmarkTrait for ContainerRun<C> {
    fn run_len(&mut self) -> Result<Duration> {
        let start = std::time::Instant::now();
        let _len = self.container.len()?;
        let duration = start.elapsed();
        Ok(duration)
    }

    fn run_scan_forward(&mut self) -> Result<Duration> {
        let start = std::time::Instant::now();
        let _sum = self.container.scan_forward()?;
        let duration = start.elapsed();
        Ok(duration)
    }

    fn run_scan_reverse(&mut self) -> Result<Duration> {
        let start = std::time::Instant::now();
        let _sum = self.container.scan_reverse()?;
        let duration = start.elapsed();
        Ok(duration)
    }

    fn run_read_random(&mut self, indices: &[usize]) -> Result<Duration> {
        let start = std::time::Instant::now();
        let _sum = self.container.read_random(indices)?;
        let duration = start.elapsed();
        Ok(duration)
    }

    fn push_len(&mut self, duration: Duration) {
        self.times.len.push(duration);
    }

    fn push_forward(&mut self, duration: Duration) {
        self.times.forward.push(duration);
    }

    fn push_reverse(&mut self, duration: Duration) {
        self.times.reverse.push(duration);
    }

    fn push_random(&mut self, duration: Duration) {
        self.times.random.push(duration);
    }

    fn to_result(&self, config: &BenchConfig, run_index: usize) -> BenchmarkResult {
        self.times.to_result(
            C::name().to_string(),
            self.fill_time,
            config.clone(),
            run_index,
        )
    }
}

pub fn run(configs: &[BenchConfig]) -> Result<()> {
    println!("CounterVec Benchmark Suite");

    let mut all_results = Vec::new();

    for (config_idx, config) in configs.iter().enumerate() {
        println!("\n=== Running Benchmark {} ===", config_idx + 1);
        println!(
            "Config: {} counters, {} random reads, {} iterations",
            config.counter_count, config.random_read_count, config.num_iterations
        );

        let runner = BenchmarkRunner::new(config.clone());

        // Generate random indices (same for all containers and iterations)
        let indices = runner.generate_random_indices();

        // Phase 1: Prepare all containers (fill data)
        println!("\nPreparing containers:");
        let mut container_benches: Vec<Box<dyn ContainerBenchmarkTrait>> = Vec::new();

        for container in &config.containers {
            match container {
                Container::CounterVec => {
                    container_benches
                        .push(Box::new(ContainerRun::<CounterVecBench>::new(&runner)?));
                }
                Container::StdVec => {
                    container_benches.push(Box::new(ContainerRun::<StdVecBench>::new(&runner)?));
                }
            }
        }

        // Phase 2: Run interleaved iterations
        println!("\nRunning iterations:");
        for i in 1..=config.num_iterations {
            println!("  Iteration {}/{}:", i, config.num_iterations);

            // len()
            print!("    len() ... ");
            std::io::Write::flush(&mut std::io::stdout()).ok();
            for container_bench in &mut container_benches {
                let duration = container_bench.run_len()?;
                container_bench.push_len(duration);
            }
            println!("done");

            // scan_forward
            print!("    scan_forward ... ");
            std::io::Write::flush(&mut std::io::stdout()).ok();
            for container_bench in &mut container_benches {
                let duration = container_bench.run_scan_forward()?;
                container_bench.push_forward(duration);
            }
            println!("done");

            // scan_reverse
            print!("    scan_reverse ... ");
            std::io::Write::flush(&mut std::io::stdout()).ok();
            for container_bench in &mut container_benches {
                let duration = container_bench.run_scan_reverse()?;
                container_bench.push_reverse(duration);
            }
            println!("done");

            // read_random
            print!("    read_random ... ");
            std::io::Write::flush(&mut std::io::stdout()).ok();
            for container_bench in &mut container_benches {
                let duration = container_bench.run_read_random(&indices)?;
                container_bench.push_random(duration);
            }
            println!("done");
        }

        // Phase 3: Build results
        for container_bench in container_benches {
            all_results.push(container_bench.to_result(config, config_idx));
        }
    }

    // Print summary
    println!();
    BenchmarkRunner::print_summary(&all_results);

    Ok(())
}

fn avg(durations: &[Duration]) -> Duration {
    if durations.is_empty() {
        return Duration::from_secs(0);
    }
    let total: Duration = durations.iter().sum();
    total / durations.len() as u32
}
