#[derive(Debug)]
pub struct SampleSizeError {
    pub requested: usize,
    pub available: usize,
}

impl std::fmt::Display for SampleSizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cannot sample {} courses from a catalog of {}!",
            self.requested, self.available
        )
    }
}

impl std::error::Error for SampleSizeError {}
