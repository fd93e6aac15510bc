use countervec_bench::{BenchConfig, Container, run};

fn main() {
    // Run with default configuration
    let configs = vec![
        BenchConfig::default(),
        BenchConfig {
            containers: vec![Container::CounterVec, Container::StdVec],
            counter_count: 10_000_000,
            random_seed: 21,
            ..Default::default()
        },
    ];
    run(&configs).unwrap();
}
