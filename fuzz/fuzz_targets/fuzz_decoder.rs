#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use multitap::{Decoder, DecoderOptions, Keypad, LetterCase, decode_bytes, decode_with};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

const HEADER: usize = 5; // 1 flag + 4-byte seed

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Keypad alphabet, weighted towards letter buttons so runs dominate.
static KEY_TABLE: &[u8] = b"22334455667788990000    1**##x";

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x03);
        data[1..5].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));

        let mut prefix = HEADER;
        while prefix < size.max(HEADER + 1) && prefix < max_size {
            prefix += append_run(&mut data[prefix..], max_size - prefix);
        }
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append one run of a single keypad key, 1‒9 presses long, never exceeding
/// `limit`. Returns the number of bytes written.
fn append_run(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        let key = KEY_TABLE[rng.random_range(0..KEY_TABLE.len())];
        let len = rng.random_range(1..=9).min(limit);
        buf[..len].fill(key);
        len
    })
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
struct Markers {
    backspace: char,
    send: char,
}

fn decoder(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let split_seed = u32::from_le_bytes(data[1..5].try_into().unwrap()) as u64;
    let data = &data[HEADER..];

    let keypad = Keypad::standard();
    let whole = decode_bytes(&keypad, data);
    assert!(whole.chars().all(|ch| ch == ' ' || ch.is_ascii_lowercase()));

    // Chunked feeding must agree with a single feed, wherever the splits land.
    let mut streamed = Decoder::new(&keypad);
    for chunk in split_into_chunks(data, split_seed) {
        streamed.feed_bytes(chunk);
    }
    assert_eq!(streamed.finish(), whole);

    // Arbitrary markers: decoding may not panic, valid or not.
    if flags & 1 != 0 {
        if let Ok(markers) = Markers::arbitrary(&mut arbitrary::Unstructured::new(data)) {
            let options = DecoderOptions {
                backspace: markers.backspace,
                send: markers.send,
                letter_case: if flags & 2 != 0 {
                    LetterCase::Upper
                } else {
                    LetterCase::Lower
                },
            };
            let _ = options.validate();
            let text = String::from_utf8_lossy(data);
            let _ = decode_with(&keypad, &text, options);
        }
    }
}

fuzz_target!(|data: &[u8]| decoder(data));

/// Split `data` into chunks using a deterministic value to generate splits.
///
/// * `split_seed` may be any `u64`.
/// * Each chunk is at least one byte.
/// * Chunks may end inside a multi-byte character; the decoder must cope.
fn split_into_chunks(data: &[u8], split_seed: u64) -> Vec<&[u8]> {
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < data.len() {
        let remaining = data.len() - start;
        let size = (split_seed as usize % remaining) + 1;
        chunks.push(&data[start..start + size]);
        start += size;
    }

    chunks
}
