/// Configuration options for extracting the latest changes
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    /// Stop at the next markdown heading instead of reading to the end of the file
    pub stop_at_next_header: bool,
}

impl ExtractConfig {
    /// Sets whether extraction ends at the next markdown heading
    #[must_use]
    pub fn with_stop_at_next_header(mut self, stop: bool) -> Self {
        self.stop_at_next_header = stop;
        self
    }
}
