//! Collects terminal key presses into one raw key-press string.
//!
//! Only keys that exist on the phone keypad are accepted: digits, the space
//! key, the backspace marker and the send marker. The terminal's own
//! Backspace edits the raw string itself, before anything is decoded.

use multitap::{DEFAULT_BACKSPACE, DEFAULT_SEND};

/// A key press, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    /// A printable character.
    Char(char),
    /// The terminal's Enter key.
    Enter,
    /// The terminal's Backspace key.
    Backspace,
    /// The terminal's Escape key.
    Escape,
    /// Ctrl+C. Raw mode swallows the signal, so it arrives as a key.
    Interrupt,
    /// Any other key.
    Other,
}

/// What the screen should do in response to a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Print the accepted character.
    Echo(char),
    /// Remove the last echoed character.
    Erase,
    /// The key was rejected; leave the screen alone.
    Ignored,
    /// The message is complete and ends with the send marker.
    Sent,
    /// Escape abandoned the message.
    Cancelled,
    /// Ctrl+C; quit the program.
    Interrupted,
}

impl Step {
    pub fn is_final(self) -> bool {
        matches!(self, Step::Sent | Step::Cancelled | Step::Interrupted)
    }
}

#[derive(Debug, Default)]
pub struct LineCapture {
    raw: String,
}

impl LineCapture {
    pub fn press(&mut self, key: KeyPress) -> Step {
        match key {
            KeyPress::Enter | KeyPress::Char(DEFAULT_SEND) => {
                self.raw.push(DEFAULT_SEND);
                Step::Sent
            }
            KeyPress::Char(ch) if ch.is_ascii_digit() || ch == ' ' || ch == DEFAULT_BACKSPACE => {
                self.raw.push(ch);
                Step::Echo(ch)
            }
            KeyPress::Backspace => {
                if self.raw.pop().is_some() {
                    Step::Erase
                } else {
                    Step::Ignored
                }
            }
            KeyPress::Escape => {
                self.raw.clear();
                Step::Cancelled
            }
            KeyPress::Interrupt => Step::Interrupted,
            KeyPress::Char(_) | KeyPress::Other => Step::Ignored,
        }
    }

    #[cfg(test)]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn into_raw(self) -> String {
        self.raw
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn type_keys(capture: &mut LineCapture, keys: &str) -> Vec<Step> {
        keys.chars()
            .map(|ch| capture.press(KeyPress::Char(ch)))
            .collect()
    }

    #[test]
    fn keypad_keys_are_echoed() {
        let mut capture = LineCapture::default();
        let steps = type_keys(&mut capture, "44 0*");
        assert_eq!(
            steps,
            [
                Step::Echo('4'),
                Step::Echo('4'),
                Step::Echo(' '),
                Step::Echo('0'),
                Step::Echo('*'),
            ]
        );
        assert_eq!(capture.raw(), "44 0*");
    }

    #[rstest]
    #[case::hash(KeyPress::Char('#'))]
    #[case::enter(KeyPress::Enter)]
    fn send_completes_message(#[case] key: KeyPress) {
        let mut capture = LineCapture::default();
        type_keys(&mut capture, "2");
        let step = capture.press(key);
        assert_eq!(step, Step::Sent);
        assert!(step.is_final());
        assert_eq!(capture.into_raw(), "2#");
    }

    #[test]
    fn terminal_backspace_edits_raw_input() {
        let mut capture = LineCapture::default();
        type_keys(&mut capture, "223");
        assert_eq!(capture.press(KeyPress::Backspace), Step::Erase);
        assert_eq!(capture.raw(), "22");

        let mut empty = LineCapture::default();
        assert_eq!(empty.press(KeyPress::Backspace), Step::Ignored);
    }

    #[test]
    fn non_keypad_keys_are_ignored() {
        let mut capture = LineCapture::default();
        let steps = type_keys(&mut capture, "a2!");
        assert_eq!(steps, [Step::Ignored, Step::Echo('2'), Step::Ignored]);
        assert_eq!(capture.press(KeyPress::Other), Step::Ignored);
        assert_eq!(capture.raw(), "2");
    }

    #[test]
    fn escape_cancels() {
        let mut capture = LineCapture::default();
        type_keys(&mut capture, "4433");
        let step = capture.press(KeyPress::Escape);
        assert_eq!(step, Step::Cancelled);
        assert!(step.is_final());
        assert_eq!(capture.raw(), "");
    }

    #[test]
    fn interrupt_is_final() {
        let mut capture = LineCapture::default();
        assert!(capture.press(KeyPress::Interrupt).is_final());
        assert!(!Step::Echo('2').is_final());
    }
}
