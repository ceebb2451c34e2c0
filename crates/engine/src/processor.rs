use crate::config::Config;
use crate::counter::{brute_force, sum_invalid_ids};
use crate::error::{InvalidIdsError, Result};
use crate::normalize::windows;
use crate::stats::RangeReport;
use invalid_ids_shared_kernel::{IdSum, Range};
use log::{debug, trace};

/// Normalize and count a single range.
///
/// # Errors
/// Only fails when `config.verify` is set and the linear scan disagrees with
/// the closed form.
pub fn process_range((index, range): (usize, Range), config: &Config) -> Result<RangeReport> {
    let windows: Vec<Range> = windows(&range).collect();

    let sum: IdSum = windows
        .iter()
        .map(|window| {
            let partial = sum_invalid_ids(window);
            trace!("segment {index}: window {window} -> {partial}");
            partial
        })
        .sum();

    debug!(
        "segment {index}: range {range}, {} window(s), sum {sum}",
        windows.len()
    );

    if config.verify {
        verify(index, &range, sum, config.verify_limit)?;
    }

    Ok(RangeReport {
        index,
        range,
        windows,
        sum,
    })
}

fn verify(index: usize, range: &Range, actual: IdSum, limit: u64) -> Result<()> {
    if range.span() > limit {
        debug!("segment {index}: span {} exceeds verify limit {limit}, not scanned", range.span());
        return Ok(());
    }

    let expected = brute_force(range);
    if expected != actual {
        return Err(InvalidIdsError::Verification {
            index,
            range: range.to_string(),
            expected: expected.value(),
            actual: actual.value(),
        });
    }
    Ok(())
}
