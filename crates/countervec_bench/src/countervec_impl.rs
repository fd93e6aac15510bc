use anyhow::Result;
use countervec::CounterVec;

use crate::container::ContainerBenchmark;

pub struct CounterVecBench {
    vec: CounterVec,
}

impl ContainerBenchmark for CounterVecBench {
    fn name() -> &'static str {
        "countervec"
    }

    fn create() -> Result<Self> {
        Ok(Self {
            vec: CounterVec::new(),
        })
    }

    fn fill_sequential(&mut self, count: usize) -> Result<()> {
        for i in 0..count {
            self.vec.push_new(&format!("n{i}"), i as u32);
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
        let mut cursor = self.vec.rev_iter();
        while let Some(counter) = cursor.current() {
            sum = sum.wrapping_add(u64::from(counter.count()));
            cursor.advance();
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
