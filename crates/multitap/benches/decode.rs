//! Benchmark – `multitap::decode` and chunked `Decoder` feeding
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use multitap::{Decoder, Keypad, decode};

/// Produce a deterministic key-press string at least `target_len` characters
/// long by repeating a message that mixes runs, separators, literal spaces and
/// backspaces.
fn make_presses(target_len: usize) -> String {
    const MESSAGE: &str = "4427 7999 2226663444664*40";
    let mut s = String::with_capacity(target_len + MESSAGE.len() + 1);
    while s.len() < target_len {
        s.push_str(MESSAGE);
    }
    s.push('#');
    s
}

/// Feed `presses` to a decoder in `parts` roughly equal chunks and return the
/// decoded length so Criterion can black-box it.
fn run_chunked(keypad: &Keypad, presses: &str, parts: usize) -> usize {
    assert!(parts > 0);
    let chunk_size = presses.len().div_ceil(parts);

    let mut decoder = Decoder::new(keypad);
    for chunk in presses.as_bytes().chunks(chunk_size) {
        decoder.feed_bytes(chunk);
    }
    decoder.finish().len()
}

fn bench_decode(c: &mut Criterion) {
    let keypad = Keypad::standard();
    let mut group = c.benchmark_group("decode");
    group.measurement_time(Duration::from_secs(5));

    for len in [64usize, 4 * 1024, 256 * 1024] {
        let presses = make_presses(len);
        group.bench_with_input(BenchmarkId::new("single", len), &presses, |b, p| {
            b.iter(|| decode(&keypad, black_box(p)).len());
        });
        for parts in [16usize, 1024] {
            group.bench_with_input(
                BenchmarkId::new(format!("chunked_{parts}"), len),
                &presses,
                |b, p| b.iter(|| run_chunked(&keypad, black_box(p), parts)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
