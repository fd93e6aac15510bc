use anyhow::Result;
use countervec::Counter;

use crate::container::ContainerBenchmark;

pub struct StdVecBench {
    vec: Vec<Counter>,
}

impl ContainerBenchmark for StdVecBench {
    fn name() -> &'static str {
        "std_vec"
    }

    fn create() -> Result<Self> {
        Ok(Self { vec: Vec::new() })
    }

    fn fill_sequential(&mut self, count: usize) -> Result<()> {
        for i in 0..count {
            self.vec.push(Counter::new(&format!("n{i}"), i as u32));
        }
        Ok(())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.vec.len())
    }

    fn scan_forward(&self) -> Result<u64> {
        let mut sum = 0u64;
        for counter in &self.vec {
            sum = sum.wrapping_add(u64::from(counter.count()));
        }
        Ok(sum)
    }

    fn scan_reverse(&mut self) -> Result<u64> {
        let mut sum = 0u64;
        for counter in self.vec.iter().rev() {
            sum = sum.wrapping_add(u64::from(counter.count()));
        }
        Ok(sum)
    }

    fn read_random(&self, indices: &[usize]) -> Result<u64> {
        let mut sum = 0u64;
        for &i in indices {
            if let Some(counter) = self.vec.get(i) {
                sum = sum.wrapping_add(u64::from(counter.count()));
            }
        }
        Ok(sum)
    }
}
