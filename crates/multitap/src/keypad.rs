//! The mapping table: which letters sit on which button.
//!
//! Letters are stored upper-case, the way they are printed on a handset.
//! The decoder lower-cases them on the way out unless asked otherwise.

use alloc::{borrow::Cow, string::String};

use crate::error::LayoutError;

/// Number of buttons on a numeric keypad, `0` through `9`.
pub const BUTTON_COUNT: usize = 10;

/// ITU E.161 letter assignment.
const STANDARD: [&str; BUTTON_COUNT] = [
    "", "", "ABC", "DEF", "GHI", "JKL", "MNO", "PQRS", "TUV", "WXYZ",
];

/// An immutable digit-to-letters table.
///
/// Buttons `0` and `1` never carry letters: `0` types a space and `1` types
/// nothing. A `Keypad` is never mutated after construction, so one instance
/// can back any number of decoders, including on different threads.
///
/// ```rust
/// use multitap::Keypad;
///
/// let keypad = Keypad::standard();
/// assert_eq!(keypad.letters(7), Some("PQRS"));
/// assert_eq!(keypad.character_for_press_count(7, 6), Some('Q'));
/// assert_eq!(keypad.letters(1), Some(""));
/// assert_eq!(keypad.letters(10), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[String; 10]", into = "[String; 10]")
)]
pub struct Keypad {
    buttons: [Cow<'static, str>; BUTTON_COUNT],
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// The standard phone layout: `2` is `ABC` through `9` is `WXYZ`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            buttons: STANDARD.map(Cow::Borrowed),
        }
    }

    /// Builds a custom layout from the letters of buttons `0` through `9`.
    ///
    /// Letters may be given in either case and are stored upper-case. Buttons
    /// `2`–`9` may be left empty; presses on an empty button decode to
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] when button `0` or `1` carries letters, when a
    /// letter is not ASCII alphabetic, or when a button repeats a letter.
    pub fn from_buttons(buttons: [&str; BUTTON_COUNT]) -> Result<Self, LayoutError> {
        let mut normalized: [Cow<'static, str>; BUTTON_COUNT] = Default::default();
        for ((digit, letters), slot) in (0u8..).zip(buttons).zip(&mut normalized) {
            *slot = Cow::Owned(normalize_button(digit, letters)?);
        }
        Ok(Self {
            buttons: normalized,
        })
    }

    /// Letters on `digit`, in press order. `None` when `digit` is not a
    /// keypad button.
    #[must_use]
    pub fn letters(&self, digit: u8) -> Option<&str> {
        self.buttons
            .get(usize::from(digit))
            .map(|letters| &**letters)
    }

    /// The letter selected by pressing `digit` `count` times in a row.
    ///
    /// Presses cycle: on a three-letter button the fourth press selects the
    /// first letter again. `None` when the button has no letters, `digit` is
    /// out of range, or `count` is zero.
    #[must_use]
    pub fn character_for_press_count(&self, digit: u8, count: usize) -> Option<char> {
        cycle(self.letters(digit)?, count)
    }

    /// Every button with its letters, `0` first.
    pub fn buttons(&self) -> impl Iterator<Item = (u8, &str)> {
        (0u8..).zip(self.buttons.iter().map(|letters| &**letters))
    }
}

/// `letters[(count - 1) % letters.len()]`, the multi-tap selection rule.
///
/// Both [`Keypad::character_for_press_count`] and the decoder go through
/// here so the two can never disagree.
pub(crate) fn cycle(letters: &str, count: usize) -> Option<char> {
    let letters = letters.as_bytes();
    if letters.is_empty() || count == 0 {
        return None;
    }
    Some(char::from(letters[(count - 1) % letters.len()]))
}

fn normalize_button(digit: u8, letters: &str) -> Result<String, LayoutError> {
    if digit < 2 && !letters.is_empty() {
        return Err(LayoutError::ReservedButton { digit });
    }
    let mut normalized = String::with_capacity(letters.len());
    for letter in letters.chars() {
        if !letter.is_ascii_alphabetic() {
            return Err(LayoutError::InvalidLetter { digit, letter });
        }
        let letter = letter.to_ascii_uppercase();
        if normalized.contains(letter) {
            return Err(LayoutError::DuplicateLetter { digit, letter });
        }
        normalized.push(letter);
    }
    Ok(normalized)
}

impl TryFrom<[String; BUTTON_COUNT]> for Keypad {
    type Error = LayoutError;

    fn try_from(buttons: [String; BUTTON_COUNT]) -> Result<Self, Self::Error> {
        Self::from_buttons(buttons.each_ref().map(String::as_str))
    }
}

impl From<Keypad> for [String; BUTTON_COUNT] {
    fn from(keypad: Keypad) -> Self {
        keypad.buttons.map(Cow::into_owned)
    }
}
