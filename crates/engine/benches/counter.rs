use criterion::{Criterion, criterion_group, criterion_main};
use invalid_ids_engine::config::Config;
use invalid_ids_engine::counter::{brute_force, sum_invalid_ids};
use invalid_ids_engine::normalize::windows;
use invalid_ids_engine::{Range, run};
use std::hint::black_box;

const SAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
824824821-824824827,2121212118-2121212124";

fn benchmark_closed_form_vs_scan(c: &mut Criterion) {
    let range = Range::from_values(1, 1_000_000).unwrap();

    c.bench_function("closed_form_1e6", |b| {
        b.iter(|| {
            let sum: invalid_ids_engine::IdSum = windows(black_box(&range))
                .map(|w| sum_invalid_ids(&w))
                .sum();
            black_box(sum);
        })
    });

    c.bench_function("scan_1e6", |b| {
        b.iter(|| black_box(brute_force(black_box(&range))))
    });
}

fn benchmark_run_sample(c: &mut Criterion) {
    let config = Config::default();
    c.bench_function("run_sample", |b| {
        b.iter(|| black_box(run(black_box(SAMPLE), &config).unwrap().total))
    });
}

criterion_group!(benches, benchmark_closed_form_vs_scan, benchmark_run_sample);
criterion_main!(benches);
