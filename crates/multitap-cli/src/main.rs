//! Phone keypad simulator.
//!
//! Reads key presses the way an old handset does, then shows the decoded
//! message. Press `#` or Enter to send, `*` to delete the last letter and
//! Escape to start over.

mod capture;
mod error;
mod terminal;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use capture::{KeyPress, LineCapture, Step};
use error::CliError;
use multitap::{DEFAULT_BACKSPACE, DEFAULT_SEND, Keypad, decode};
use terminal::RawMode;

enum Outcome {
    Message(String),
    Cancelled,
    Interrupted,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("multitap: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let keypad = Keypad::standard();
    let mut out = io::stdout().lock();
    print_welcome(&mut out, &keypad)?;

    loop {
        let input = match read_message(&mut out)? {
            Outcome::Message(input) => input,
            Outcome::Cancelled => continue,
            Outcome::Interrupted => break,
        };

        let message = decode(&keypad, &input);
        writeln!(out, "\n>>> Message: \"{message}\" <<<\n")?;

        if !ask_to_continue(&mut out)? {
            break;
        }
        writeln!(out, "\n--- New Message ---\n")?;
    }

    writeln!(out, "\nHappy Coding! Hope to see you again!")?;
    Ok(())
}

fn print_welcome(out: &mut impl Write, keypad: &Keypad) -> io::Result<()> {
    writeln!(out, "========================================")?;
    writeln!(out, "   Phone Keypad Simulator")?;
    writeln!(out, "========================================\n")?;
    writeln!(out, "Keypad:")?;
    for (digit, letters) in keypad.buttons() {
        if !letters.is_empty() {
            writeln!(out, "  {digit}  {letters}")?;
        }
    }
    writeln!(out, "\nInstructions:")?;
    writeln!(out, "  - Type number keys (0-9) to input text")?;
    writeln!(
        out,
        "  - Press '0' or space for a space (between presses of the same key it only separates them)"
    )?;
    writeln!(
        out,
        "  - Press '{DEFAULT_BACKSPACE}' for backspace (delete last character)"
    )?;
    writeln!(out, "  - Press '{DEFAULT_SEND}' or Enter to send message")?;
    writeln!(out, "  - Press Escape to cancel\n")?;
    writeln!(out, "========================================\n")?;
    Ok(())
}

/// Captures one message. Output written while raw mode is on must not rely
/// on `\n` returning the cursor, so line breaks happen after raw mode ends.
fn read_message(out: &mut impl Write) -> Result<Outcome, CliError> {
    writeln!(out, "Type your message (press {DEFAULT_SEND} or Enter to send):\n")?;
    write!(out, "Input: ")?;
    out.flush()?;

    let mut capture = LineCapture::default();
    let last = {
        let _raw = RawMode::enable()?;
        loop {
            let step = capture.press(terminal::read_key()?);
            match step {
                Step::Echo(ch) => write!(out, "{ch}")?,
                Step::Erase => write!(out, "\u{8} \u{8}")?,
                Step::Sent => write!(out, "{DEFAULT_SEND}")?,
                Step::Ignored | Step::Cancelled | Step::Interrupted => {}
            }
            out.flush()?;
            if step.is_final() {
                break step;
            }
        }
    };
    writeln!(out)?;

    Ok(match last {
        Step::Sent => Outcome::Message(capture.into_raw()),
        Step::Interrupted => Outcome::Interrupted,
        _ => {
            writeln!(out, "\nMessage cancelled.\n")?;
            Outcome::Cancelled
        }
    })
}

fn ask_to_continue(out: &mut impl Write) -> Result<bool, CliError> {
    write!(out, "Do you want to send another message? (Y/N): ")?;
    out.flush()?;

    let key = {
        let _raw = RawMode::enable()?;
        terminal::read_key()?
    };
    let answer = match key {
        KeyPress::Char(ch) => {
            writeln!(out, "{ch}")?;
            ch.eq_ignore_ascii_case(&'y')
        }
        _ => {
            writeln!(out)?;
            false
        }
    };
    Ok(answer)
}
