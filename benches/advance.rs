//! Benchmark – the scan primitive and the `satisfy` parser.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use scankit::{Bounds, InputRange, ScanState, satisfy};

/// Deterministic payload: runs of nine letters separated by single spaces.
fn make_payload(len: usize) -> Vec<char> {
    (0..len).map(|i| if i % 10 == 9 { ' ' } else { 'a' }).collect()
}

/// Tokenize the whole payload with alternating word/space scans, returning
/// the number of word characters matched so the result can be black-boxed.
fn scan_words(payload: &[char]) -> usize {
    let mut state = ScanState::new(InputRange::new(payload));
    let mut matched = 0usize;
    loop {
        let word = state.advance(|ch, _| ch != ' ', Bounds::default());
        matched += word.range.remaining();
        if state.at_end() {
            break;
        }
        let _ = state.skip(|ch, _| ch == ' ', Bounds::at_least(1));
    }
    matched
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    for &size in &[1_000usize, 10_000, 100_000] {
        let payload = make_payload(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, payload| {
            b.iter(|| black_box(scan_words(payload)));
        });
    }
    group.finish();
}

fn bench_satisfy(c: &mut Criterion) {
    let payload = make_payload(10_000);
    let word = satisfy(|ch, _| ch != ' ', "word", Bounds::at_least(1));
    c.bench_function("satisfy/word_prefix", |b| {
        b.iter(|| {
            let reply = word.run(ScanState::new(InputRange::new(&payload)));
            black_box(reply.result.map(|range| range.remaining()).unwrap_or(0))
        });
    });
}

criterion_group!(benches, bench_advance, bench_satisfy);
criterion_main!(benches);
