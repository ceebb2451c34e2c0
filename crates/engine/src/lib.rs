// crates/engine/src/lib.rs
use rayon::prelude::*;

pub mod config;
pub mod counter;
pub mod error;
pub mod normalize;
pub mod options;
pub mod parser;
pub mod processor;
pub mod source;
pub mod stats;

pub use invalid_ids_shared_kernel::{Bound, IdSum, Range};

use crate::config::Config;
use crate::error::{InvalidIdsError, Result};
use crate::stats::{RangeReport, RunResult};
use log::info;

/// Sum the repeated-digit identifiers of every range in `input`.
///
/// Segments are parsed on a producer thread and counted concurrently on a
/// dedicated rayon pool, one unit per range. The total is only formed once
/// every unit has finished.
///
/// # Errors
///
/// In strict mode the first malformed segment aborts the run and no total is
/// produced. In lenient mode malformed segments are collected in
/// `RunResult::skipped` instead. Verification mismatches and thread pool
/// failures are always returned as errors.
pub fn run(input: &str, config: &Config) -> Result<RunResult> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()
        .map_err(|e| InvalidIdsError::ThreadPoolCreation {
            details: e.to_string(),
        })?;

    let (tx, rx) = crossbeam_channel::bounded(config.channel_capacity);
    let (err_tx, err_rx) = std::sync::mpsc::channel();
    let strict = config.strict;

    let counted = std::thread::scope(|scope| {
        scope.spawn(move || crate::source::feed_ranges(input, strict, &tx, &err_tx));

        // Dropping the bridge on an early error disconnects the producer.
        pool.install(|| {
            rx.into_iter()
                .par_bridge()
                .map(|item| processor::process_range(item, config))
                .collect::<Result<Vec<_>>>()
        })
    });

    // Segment errors from the producer thread
    let mut skipped: Vec<_> = err_rx.try_iter().collect();
    if strict && let Some(first) = skipped.drain(..).next() {
        return Err(first.into());
    }

    let mut reports: Vec<RangeReport> = counted?;
    reports.sort_unstable_by_key(|r| r.index);
    skipped.sort_unstable_by_key(|e| e.index);

    let total: IdSum = reports.iter().map(|r| r.sum).sum();
    info!(
        "counted {} range(s), skipped {}, total {total}",
        reports.len(),
        skipped.len()
    );

    Ok(RunResult {
        total,
        reports,
        skipped,
    })
}
