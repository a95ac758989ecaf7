//! Multi-tap decoding for numeric telephone keypads.
//!
//! A handset without a full keyboard types letters by pressing a button
//! repeatedly: `2` once for `a`, twice for `b`, three times for `c`. This crate
//! turns the raw sequence of presses back into text.
//!
//! ```rust
//! use multitap::{Keypad, decode};
//!
//! let keypad = Keypad::standard();
//! assert_eq!(decode(&keypad, "4433555 555666#"), "hello");
//! assert_eq!(decode(&keypad, "4427 7999 2226663444664#"), "happy coding");
//! ```
//!
//! Input alphabet (with [`DecoderOptions::default`]):
//!
//! - `2`–`9`: letter buttons. A run of identical presses selects a letter,
//!   cycling through the button's letters.
//! - `0` and `' '`: space. Between two runs of the same button the space only
//!   separates them; everywhere else it types a literal space.
//! - `*`: backspace, removes the last decoded character.
//! - `#`: send, ends the message. Anything after it is ignored.
//! - `1` and everything else: ignored.
//!
//! Decoding never fails. The only errors in this crate come from building a
//! custom [`Keypad`] or from validating [`DecoderOptions`].

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod error;
mod keypad;
mod options;

#[cfg(test)]
mod tests;

pub use decoder::{Decoder, decode, decode_bytes, decode_with};
pub use error::{LayoutError, OptionsError};
pub use keypad::{BUTTON_COUNT, Keypad};
pub use options::{DEFAULT_BACKSPACE, DEFAULT_SEND, DecoderOptions, LetterCase};
