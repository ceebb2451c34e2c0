// crates/engine/tests/pipeline.rs
use invalid_ids_engine::config::{Config, ConfigBuilder};
use invalid_ids_engine::counter::brute_force;
use invalid_ids_engine::error::{InvalidIdsError, SegmentFault};
use invalid_ids_engine::{Range, run};

const SAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
824824821-824824827,2121212118-2121212124";

fn total(input: &str) -> u128 {
    run(input, &Config::default()).unwrap().total.value()
}

#[test]
fn sample_total() {
    assert_eq!(total(SAMPLE), 1_227_775_554);
}

#[test]
fn sample_with_line_breaks() {
    let wrapped = SAMPLE.replace(',', ",\n").replace("1188511880", "11885\n11880");
    assert_eq!(total(&wrapped), 1_227_775_554);
}

#[test]
fn scenarios() {
    assert_eq!(total("50-50"), 0);
    assert_eq!(total("11-22"), 33);
    assert_eq!(total("1-9"), 0);
    assert_eq!(total("100-130"), 0);
    assert_eq!(total("95-105"), 99);
    assert_eq!(total("11-22,63-64"), 33);
}

#[test]
fn empty_input_totals_zero() {
    let result = run("", &Config::default()).unwrap();
    assert!(result.total.is_zero());
    assert!(result.reports.is_empty());
}

#[test]
fn reports_follow_input_order() {
    let result = run("95-105,11-22,1-9", &Config::default()).unwrap();
    let indices: Vec<usize> = result.reports.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(result.reports[0].sum, 99u128);
    assert_eq!(result.reports[1].sum, 33u128);
    assert!(result.reports[2].windows.is_empty());
}

#[test]
fn strict_mode_fails_without_total() {
    let err = run("11-22,12x-40,95-105", &Config::default()).unwrap_err();
    match err {
        InvalidIdsError::Segment(e) => {
            assert_eq!(e.index, 1);
            assert_eq!(e.segment, "12x-40");
            assert!(matches!(e.fault, SegmentFault::Parse(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strict_mode_rejects_descending_range() {
    let err = run("22-11", &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        InvalidIdsError::Segment(ref e) if matches!(e.fault, SegmentFault::Invariant(_))
    ));
}

#[test]
fn lenient_mode_skips_and_reports() {
    let config = ConfigBuilder::default().strict(false).build().unwrap();
    let result = run("11-22,12x-40,95-105,0011-0022", &config).unwrap();
    assert_eq!(result.total, 132u128);
    assert_eq!(result.range_count(), 2);
    let skipped: Vec<usize> = result.skipped.iter().map(|e| e.index).collect();
    assert_eq!(skipped, vec![1, 3]);
}

#[test]
fn single_worker_and_rendezvous_channel() {
    let config = ConfigBuilder::default()
        .jobs(1usize)
        .channel_capacity(0usize)
        .build()
        .unwrap();
    assert_eq!(run(SAMPLE, &config).unwrap().total, 1_227_775_554u128);
}

#[test]
fn many_ranges_through_small_channel() {
    let input = (0..2_000)
        .map(|i| format!("{}-{}", 1_000 + i, 1_000 + i))
        .collect::<Vec<_>>()
        .join(",");
    let config = ConfigBuilder::default()
        .channel_capacity(4usize)
        .build()
        .unwrap();
    let expected = brute_force(&Range::from_values(1_000, 2_999).unwrap());
    assert_eq!(run(&input, &config).unwrap().total, expected);
}

#[test]
fn strict_error_with_backlog_does_not_hang() {
    let mut input = (0..500)
        .map(|i| format!("{0}-{0}", 10 + i))
        .collect::<Vec<_>>()
        .join(",");
    input.push_str(",bad");
    let config = ConfigBuilder::default()
        .jobs(1usize)
        .channel_capacity(1usize)
        .build()
        .unwrap();
    assert!(run(&input, &config).is_err());
}

#[test]
fn verify_mode_agrees_with_scan() {
    let config = ConfigBuilder::default().verify(true).build().unwrap();
    let result = run("1-100000,123000-456000,9-11", &config).unwrap();
    let expected = brute_force(&Range::from_values(1, 100_000).unwrap())
        + brute_force(&Range::from_values(123_000, 456_000).unwrap())
        + brute_force(&Range::from_values(9, 11).unwrap());
    assert_eq!(result.total, expected);
}

#[test]
fn idempotent() {
    let first = run(SAMPLE, &Config::default()).unwrap();
    let second = run(SAMPLE, &Config::default()).unwrap();
    assert_eq!(first.total, second.total);
    assert_eq!(first.reports, second.reports);
}
