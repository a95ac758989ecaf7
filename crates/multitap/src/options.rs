use crate::error::OptionsError;

/// Marker that deletes the last decoded character.
pub const DEFAULT_BACKSPACE: char = '*';

/// Marker that ends the message.
pub const DEFAULT_SEND: char = '#';

/// Case of the letters the decoder emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LetterCase {
    /// `hello`
    #[default]
    Lower,
    /// `HELLO`, as a handset screen shows it.
    Upper,
}

/// Configuration options for the decoder.
///
/// # Examples
///
/// ```rust
/// use multitap::{DecoderOptions, Keypad, LetterCase, decode_with};
///
/// let options = DecoderOptions {
///     letter_case: LetterCase::Upper,
///     ..Default::default()
/// };
/// assert_eq!(decode_with(&Keypad::standard(), "2#", options), "A");
/// ```
///
/// # Default
///
/// `*` for backspace, `#` for send, lower-case output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderOptions {
    /// Character that deletes the most recently decoded character.
    ///
    /// # Default
    ///
    /// `'*'`
    pub backspace: char,

    /// Character that ends the message. Input after it is never examined.
    ///
    /// # Default
    ///
    /// `'#'`
    pub send: char,

    /// Case of the emitted letters. Spaces are unaffected.
    ///
    /// # Default
    ///
    /// [`LetterCase::Lower`]
    pub letter_case: LetterCase,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            backspace: DEFAULT_BACKSPACE,
            send: DEFAULT_SEND,
            letter_case: LetterCase::Lower,
        }
    }
}

impl DecoderOptions {
    /// Checks that the markers can be told apart from key presses and from
    /// each other.
    ///
    /// # Errors
    ///
    /// [`OptionsError::ReservedMarker`] when a marker is an ASCII digit or the
    /// space character, [`OptionsError::ConflictingMarkers`] when both markers
    /// are the same character.
    pub fn validate(&self) -> Result<(), OptionsError> {
        for marker in [self.backspace, self.send] {
            if marker.is_ascii_digit() || marker == ' ' {
                return Err(OptionsError::ReservedMarker(marker));
            }
        }
        if self.backspace == self.send {
            return Err(OptionsError::ConflictingMarkers(self.send));
        }
        Ok(())
    }
}
