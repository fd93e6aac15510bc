use anyhow::Result;

/// Common interface for all container benchmarks
pub trait ContainerBenchmark: Sized {
    /// Name of the container for reporting
    fn name() -> &'static str;

    /// Create an empty container
    fn create() -> Result<Self>;

    /// Append `count` generated counters
    fn fill_sequential(&mut self, count: usize) -> Result<()>;

    /// Number of stored counters
    fn len(&self) -> Result<usize>;

    /// Walk front to back, returning a checksum of the counts
    fn scan_forward(&self) -> Result<u64>;

    /// Walk back to front, returning a checksum of the counts
    fn scan_reverse(&mut self) -> Result<u64>;

    /// Read the counters at the given indices, returning a checksum
    fn read_random(&self, indices: &[usize]) -> Result<u64>;
}
