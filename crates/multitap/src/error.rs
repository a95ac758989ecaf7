use thiserror::Error;

/// A custom keypad layout was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Buttons `0` and `1` never carry letters.
    #[error("button {digit} is reserved and cannot carry letters")]
    ReservedButton {
        /// The offending button.
        digit: u8,
    },
    /// Only ASCII letters can be typed.
    #[error("invalid letter '{letter}' on button {digit}")]
    InvalidLetter {
        /// The button the letter was assigned to.
        digit: u8,
        /// The rejected character.
        letter: char,
    },
    /// A button lists the same letter more than once.
    #[error("letter '{letter}' appears more than once on button {digit}")]
    DuplicateLetter {
        /// The button the letter was assigned to.
        digit: u8,
        /// The repeated letter, upper-cased.
        letter: char,
    },
}

/// Decoder options were rejected by [`DecoderOptions::validate`].
///
/// [`DecoderOptions::validate`]: crate::DecoderOptions::validate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsError {
    /// A control marker shadows a keypad button or the space key.
    #[error("marker '{0}' collides with a keypad button")]
    ReservedMarker(char),
    /// Backspace and send use the same character.
    #[error("backspace and send markers are both '{0}'")]
    ConflictingMarkers(char),
}
