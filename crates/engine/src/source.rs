// crates/engine/src/source.rs
use crate::error::SegmentError;
use crate::parser::parse_ranges;
use crossbeam_channel::Sender;
use invalid_ids_shared_kernel::Range;
use log::warn;

/// Feed parsed ranges into `tx`.
///
/// Bad segments go to `err_tx`. In strict mode the first one ends the feed,
/// otherwise it is skipped. Returns early once the receiving side is gone.
pub fn feed_ranges(
    input: &str,
    strict: bool,
    tx: &Sender<(usize, Range)>,
    err_tx: &std::sync::mpsc::Sender<SegmentError>,
) {
    for (index, parsed) in parse_ranges(input) {
        match parsed {
            Ok(range) => {
                if tx.send((index, range)).is_err() {
                    return;
                }
            }
            Err(e) => {
                if !strict {
                    warn!("skipping {e}");
                }
                let _ = err_tx.send(e);
                if strict {
                    return;
                }
            }
        }
    }
}
