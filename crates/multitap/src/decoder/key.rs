use crate::options::DecoderOptions;

/// Lexical class of one input character. Classification never looks at
/// neighbouring characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Key {
    /// Ends the message.
    Send,
    /// Deletes the last decoded character.
    Backspace,
    /// `0` or `' '`. Consecutive spaces collapse into one space run.
    Space,
    /// A letter button, `2` through `9`.
    Button(u8),
    /// `1` and anything unrecognized.
    Other,
}

impl Key {
    #[inline]
    pub(crate) fn classify(ch: char, options: &DecoderOptions) -> Self {
        if ch == options.send {
            return Key::Send;
        }
        if ch == options.backspace {
            return Key::Backspace;
        }
        match ch {
            '0' | ' ' => Key::Space,
            '2'..='9' => ch
                .to_digit(10)
                .and_then(|digit| u8::try_from(digit).ok())
                .map_or(Key::Other, Key::Button),
            _ => Key::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(ch: char) -> Key {
        Key::classify(ch, &DecoderOptions::default())
    }

    #[test]
    fn classifies_default_alphabet() {
        assert_eq!(classify('#'), Key::Send);
        assert_eq!(classify('*'), Key::Backspace);
        assert_eq!(classify('0'), Key::Space);
        assert_eq!(classify(' '), Key::Space);
        assert_eq!(classify('2'), Key::Button(2));
        assert_eq!(classify('9'), Key::Button(9));
        assert_eq!(classify('1'), Key::Other);
        assert_eq!(classify('a'), Key::Other);
        assert_eq!(classify('\n'), Key::Other);
        assert_eq!(classify('٣'), Key::Other);
    }

    #[test]
    fn markers_follow_options() {
        let options = DecoderOptions {
            backspace: '<',
            send: '\n',
            ..Default::default()
        };
        assert_eq!(Key::classify('<', &options), Key::Backspace);
        assert_eq!(Key::classify('\n', &options), Key::Send);
        assert_eq!(Key::classify('*', &options), Key::Other);
        assert_eq!(Key::classify('#', &options), Key::Other);
    }
}
