use crate::options::OutputFormat;
use derive_builder::Builder;

/// Buffer between the segment producer and the counting pool.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// Largest span the `--verify` scan is willing to walk.
pub const DEFAULT_VERIFY_LIMIT: u64 = 1_000_000;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Abort on the first malformed segment instead of skipping it.
    #[builder(default = "true")]
    pub strict: bool,
    #[builder(default = "num_cpus::get()")]
    pub jobs: usize,
    #[builder(default = "DEFAULT_CHANNEL_CAPACITY")]
    pub channel_capacity: usize,

    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub breakdown: bool,

    #[builder(default)]
    pub verify: bool,
    #[builder(default = "DEFAULT_VERIFY_LIMIT")]
    pub verify_limit: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: true,
            jobs: num_cpus::get(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            format: OutputFormat::default(),
            breakdown: false,
            verify: false,
            verify_limit: DEFAULT_VERIFY_LIMIT,
        }
    }
}
