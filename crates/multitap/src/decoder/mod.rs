//! Multi-tap decoder: raw key presses in, text out.
//!
//! Overview
//! - Input is scanned left to right, one character at a time. Each character
//!   is classified on its own (see [`Key`]); everything positional lives in the
//!   decoder state.
//! - A run of identical letter-button presses selects one letter. The run
//!   length is only known once a different character arrives, so the run is
//!   held in [`Pending::Run`] until then.
//! - A space run (any mix of `0` and `' '`) is resolved by the first character
//!   after it. It is a separator, and types nothing, when it sits between two
//!   runs of the same button with text already decoded: `555 555` is `ll`,
//!   where `555555` would be a single `l`. In every other position it types
//!   exactly one space: `999 222` is `y c`.
//! - Backspace pops the last decoded character, whatever it is. Send stops
//!   the scan; nothing after it is examined.
//!
//! Streaming
//! - Both kinds of pending state wait for a lookahead character, so the
//!   decoder can be fed in arbitrary chunks and produces the same text as a
//!   single feed. [`Decoder::finish`] resolves whatever is still pending as
//!   end of input.
//! - Byte input may end in the middle of a UTF-8 sequence. The incomplete
//!   tail is held back until the next feed completes it, so a multi-byte
//!   marker split across feeds is still recognized. A tail that never
//!   completes is read as U+FFFD.
//!
//! Invariants
//! - The output only ever contains letters of the keypad (in the configured
//!   case) and `' '`.
//! - No input makes the decoder fail or panic.

mod key;

use alloc::{string::String, vec::Vec};

use key::Key;

use crate::{
    error::OptionsError,
    keypad::{Keypad, cycle},
    options::{DecoderOptions, LetterCase},
};

/// Input whose meaning depends on characters that have not arrived yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Idle,
    /// `presses` consecutive presses of letter button `digit`.
    Run { digit: u8, presses: usize },
    /// A space run. `after_run` is the button of the run that ended right
    /// where the space run began, if it typed a letter.
    Space { after_run: Option<u8> },
}

/// Incremental multi-tap decoder.
///
/// ```rust
/// use multitap::{Decoder, Keypad};
///
/// let keypad = Keypad::standard();
/// let mut decoder = Decoder::new(&keypad);
/// decoder.feed("4433555");
/// assert_eq!(decoder.preview(), "hel");
/// decoder.feed(" 555666#");
/// assert!(decoder.is_sent());
/// assert_eq!(decoder.finish(), "hello");
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<'k> {
    keypad: &'k Keypad,
    options: DecoderOptions,
    output: String,
    pending: Pending,
    /// Leading bytes of a UTF-8 sequence cut off by the end of a byte feed.
    partial: Vec<u8>,
    sent: bool,
}

impl<'k> Decoder<'k> {
    /// A decoder with [`DecoderOptions::default`].
    #[must_use]
    pub fn new(keypad: &'k Keypad) -> Self {
        Self::with_options(keypad, DecoderOptions::default())
    }

    /// A decoder with `options`, which are assumed to be valid. Markers that
    /// collide with buttons take precedence over the buttons.
    #[must_use]
    pub fn with_options(keypad: &'k Keypad, options: DecoderOptions) -> Self {
        Self {
            keypad,
            options,
            output: String::new(),
            pending: Pending::Idle,
            partial: Vec::new(),
            sent: false,
        }
    }

    /// Like [`Decoder::with_options`], validating `options` first.
    ///
    /// # Errors
    ///
    /// Whatever [`DecoderOptions::validate`] rejects.
    pub fn try_with_options(
        keypad: &'k Keypad,
        options: DecoderOptions,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::with_options(keypad, options))
    }

    /// Scans `chunk`. Stops at the send marker; once it has been seen, every
    /// later feed is ignored.
    pub fn feed(&mut self, chunk: &str) {
        self.flush_partial();
        for ch in chunk.chars() {
            if self.sent {
                break;
            }
            self.push(ch);
        }
    }

    /// Scans raw bytes. Invalid UTF-8 is replaced with U+FFFD, which the
    /// decoder ignores like any other unrecognized character. A sequence cut
    /// off at the end of `chunk` waits for the next feed.
    pub fn feed_bytes(&mut self, chunk: &[u8]) {
        let mut joined;
        let mut rest = if self.partial.is_empty() {
            chunk
        } else {
            joined = core::mem::take(&mut self.partial);
            joined.extend_from_slice(chunk);
            &joined[..]
        };

        while !rest.is_empty() && !self.sent {
            let (ch, size) = bstr::decode_utf8(rest);
            match ch {
                Some(ch) => self.push(ch),
                None if size == rest.len() && is_truncated(rest) => {
                    self.partial.extend_from_slice(rest);
                    return;
                }
                None => self.push(char::REPLACEMENT_CHARACTER),
            }
            rest = &rest[size..];
        }
    }

    /// Whether the send marker has been seen.
    #[must_use]
    pub fn is_sent(&self) -> bool {
        self.sent
    }

    /// The text decoded so far, with pending presses resolved as if the input
    /// ended here. This is what a handset shows while the user is typing.
    #[must_use]
    pub fn preview(&self) -> String {
        self.clone().finish()
    }

    /// Ends the input and returns the decoded text.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.flush_partial();
        match core::mem::replace(&mut self.pending, Pending::Idle) {
            Pending::Idle => {}
            Pending::Run { digit, presses } => {
                self.emit_letter(digit, presses);
            }
            Pending::Space { .. } => self.output.push(' '),
        }
        self.output
    }

    /// Reads a held-back incomplete sequence as one unrecognized character.
    fn flush_partial(&mut self) {
        if !self.partial.is_empty() {
            self.partial.clear();
            if !self.sent {
                self.push(char::REPLACEMENT_CHARACTER);
            }
        }
    }

    fn push(&mut self, ch: char) {
        let key = Key::classify(ch, &self.options);

        let after_run = match self.pending {
            Pending::Idle => None,
            Pending::Run { digit, presses } => {
                if key == Key::Button(digit) {
                    self.pending = Pending::Run {
                        digit,
                        presses: presses.saturating_add(1),
                    };
                    return;
                }
                self.pending = Pending::Idle;
                self.emit_letter(digit, presses).then_some(digit)
            }
            Pending::Space { after_run } => {
                if key == Key::Space {
                    return;
                }
                self.pending = Pending::Idle;
                let separator = !self.output.is_empty()
                    && after_run.is_some_and(|digit| key == Key::Button(digit));
                if !separator {
                    self.output.push(' ');
                }
                None
            }
        };

        match key {
            Key::Send => self.sent = true,
            Key::Backspace => {
                self.output.pop();
            }
            Key::Space => self.pending = Pending::Space { after_run },
            Key::Button(digit) => self.pending = Pending::Run { digit, presses: 1 },
            Key::Other => {}
        }
    }

    /// Appends the letter `presses` selects on `digit`. Returns `false` when
    /// the button has no letters.
    fn emit_letter(&mut self, digit: u8, presses: usize) -> bool {
        let Some(letter) = self
            .keypad
            .letters(digit)
            .and_then(|letters| cycle(letters, presses))
        else {
            return false;
        };
        self.output.push(match self.options.letter_case {
            LetterCase::Lower => letter.to_ascii_lowercase(),
            LetterCase::Upper => letter,
        });
        true
    }
}

/// Whether `bytes` is a valid UTF-8 prefix that only lacks continuation
/// bytes. `bytes` must already be known not to contain an invalid byte.
fn is_truncated(bytes: &[u8]) -> bool {
    let expected = match bytes[0] {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return false,
    };
    bytes.len() < expected
}

/// Decodes a complete key-press string with the default options.
///
/// Input does not need to end with the send marker; without one the whole
/// string is decoded.
///
/// ```rust
/// use multitap::{Keypad, decode};
///
/// let keypad = Keypad::standard();
/// assert_eq!(decode(&keypad, "8 88777444666*664#"), "turing");
/// assert_eq!(decode(&keypad, "1111#"), "");
/// ```
#[must_use]
pub fn decode(keypad: &Keypad, input: &str) -> String {
    decode_with(keypad, input, DecoderOptions::default())
}

/// Decodes a complete key-press string with `options`.
#[must_use]
pub fn decode_with(keypad: &Keypad, input: &str, options: DecoderOptions) -> String {
    let mut decoder = Decoder::with_options(keypad, options);
    decoder.feed(input);
    decoder.finish()
}

/// Decodes raw bytes, such as the output of a serial keypad, with the default
/// options. See [`Decoder::feed_bytes`].
#[must_use]
pub fn decode_bytes(keypad: &Keypad, input: &[u8]) -> String {
    let mut decoder = Decoder::new(keypad);
    decoder.feed_bytes(input);
    decoder.finish()
}
