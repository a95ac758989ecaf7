//! Snapshot of what a handset screen shows after every key press while
//! typing "hello". Catches behaviour changes in run and space resolution.

use alloc::string::String;
use core::fmt::Write;

use insta::assert_snapshot;

use crate::{Decoder, Keypad};

#[test]
fn snapshot_typing_hello() {
    let keypad = Keypad::standard();
    let mut decoder = Decoder::new(&keypad);
    let mut typed = String::new();
    let mut screen = String::new();

    for key in "4433555 555666#".chars() {
        typed.push(key);
        let mut buf = [0u8; 4];
        decoder.feed(key.encode_utf8(&mut buf));
        writeln!(screen, "{typed:?} -> {:?}", decoder.preview()).unwrap();
    }

    assert_snapshot!(screen, @r##"
    "4" -> "g"
    "44" -> "h"
    "443" -> "hd"
    "4433" -> "he"
    "44335" -> "hej"
    "443355" -> "hek"
    "4433555" -> "hel"
    "4433555 " -> "hel "
    "4433555 5" -> "helj"
    "4433555 55" -> "helk"
    "4433555 555" -> "hell"
    "4433555 5556" -> "hellm"
    "4433555 55566" -> "helln"
    "4433555 555666" -> "hello"
    "4433555 555666#" -> "hello"
    "##);
}
