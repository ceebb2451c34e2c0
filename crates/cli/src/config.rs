// crates/cli/src/config.rs
use crate::args::Args;
use crate::input::InputSource;
pub use invalid_ids_engine::config::{Config, ConfigBuilder};
use invalid_ids_engine::options as engine_options;
use invalid_ids_shared_kernel::InvalidIdsError;
use log::LevelFilter;

/// Everything the binary needs for one run.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub engine: Config,
    pub input: InputSource,
    pub log_level: LevelFilter,
}

impl TryFrom<Args> for CliConfig {
    type Error = InvalidIdsError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let format: engine_options::OutputFormat = args.output.format.into();
        let behavior = &args.behavior;

        let mut builder = ConfigBuilder::default();
        builder
            .strict(!behavior.lenient)
            .format(format)
            .breakdown(args.output.breakdown)
            .verify(behavior.verify);
        if let Some(jobs) = behavior.jobs {
            builder.jobs(jobs);
        }
        if let Some(limit) = behavior.verify_limit {
            builder.verify_limit(limit);
        }
        let engine = builder
            .build()
            .map_err(|e| InvalidIdsError::InvalidConfiguration {
                reason: e.to_string(),
            })?;

        let log_level = log_level_from_flags(behavior.verbose, behavior.quiet);
        let input = InputSource::from_args(args.ranges, args.input);

        Ok(Self {
            engine,
            input,
            log_level,
        })
    }
}

/// Warnings by default; each `-v` opens one more level.
pub const fn log_level_from_flags(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
