use core::time::Duration;

use rstest::rstest;

use crate::{Keypad, decode};

#[rstest]
#[case::single_press("2#", "a")]
#[case::separator_between_same_button("4433555 555666#", "hello")]
#[case::button_one_only("1111#", "")]
#[case::backspace_mid_word("4433*555 555666#", "hllo")]
#[case::literal_space_between_words("4427 7999 2226663444664#", "happy coding")]
#[case::backspace_then_same_button("8 88777444666*664#", "turing")]
#[case::no_send_marker("4433555 555666", "hello")]
#[case::backspaces_before_anything("**#", "")]
#[case::zero_as_separator_and_space("440444033#", "hi e")]
#[timeout(Duration::from_millis(250))]
fn decodes_scenario(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(decode(&Keypad::standard(), input), expected);
}

#[rstest]
#[case("2#", "A")]
#[case("4433555 555666#", "HELLO")]
#[case("4427 7999 2226663444664#", "HAPPY CODING")]
fn caller_side_upper_case(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(
        decode(&Keypad::standard(), input).to_ascii_uppercase(),
        expected
    );
}
