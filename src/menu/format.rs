//! String building for the two display lines.
//!
//! Every function returns an owned, fixed-capacity [`Text`]; there are no
//! shared scratch buffers. Text that does not fit is cut at the end of the
//! line, while numbers that do not fit their field are replaced by
//! [`NUMERIC_OVERFLOW`] rather than truncated.

use crate::config::{
    DECIMAL_POINT, FIELD_DELIM_L, FIELD_DELIM_R, FIELD_PROMPT, LIST_SEPARATOR, MENU_DELIM_L,
    MENU_DELIM_R, NUMERIC_OVERFLOW, TEXT_CAPACITY,
};

/// One rendered display line.
pub type Text = heapless::String<TEXT_CAPACITY>;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn push_str(text: &mut Text, s: &str) {
    for c in s.chars() {
        if text.push(c).is_err() {
            break;
        }
    }
}

fn push_char(text: &mut Text, c: char) {
    let _ = text.push(c);
}

/// Right-justify `value` in `width` characters of `base` (2..=16),
/// padding on the left with `pad`.
///
/// Negative values get a leading `-`. A value that does not fit, sign
/// included, renders as a single [`NUMERIC_OVERFLOW`] character.
pub fn number_to_string(value: i32, width: u8, base: u8, pad: char) -> Text {
    signed_to_string(value < 0, value.unsigned_abs(), width, base, pad)
}

fn signed_to_string(negative: bool, magnitude: u32, width: u8, base: u8, pad: char) -> Text {
    let base = u32::from(base.clamp(2, 16));
    let width = usize::from(width).min(TEXT_CAPACITY);

    // Digits are produced least significant first.
    let mut digits = [0u8; 32];
    let mut len = 0;
    let mut rest = magnitude;
    loop {
        digits[len] = DIGITS[(rest % base) as usize];
        len += 1;
        rest /= base;
        if rest == 0 {
            break;
        }
    }

    let mut text = Text::new();
    let needed = len + usize::from(negative);
    if needed > width {
        push_char(&mut text, NUMERIC_OVERFLOW);
        return text;
    }

    for _ in needed..width {
        push_char(&mut text, pad);
    }
    if negative {
        push_char(&mut text, '-');
    }
    for &d in digits[..len].iter().rev() {
        push_char(&mut text, char::from(d));
    }
    text
}

/// Render a fixed-point value scaled by 10^`decimals` in `width` characters.
///
/// The whole part is right-justified in `width - decimals - 1` characters,
/// followed by [`DECIMAL_POINT`] and the zero-padded absolute remainder.
/// The sign stays on the whole part even when it is zero, so `-5` with two
/// decimals renders as `-0.05`.
pub fn fixed_to_string(value: i32, width: u8, decimals: u8) -> Text {
    let divisor = 10u32.pow(u32::from(decimals));
    let magnitude = value.unsigned_abs();
    let whole_width = if decimals > 0 {
        width.saturating_sub(decimals.saturating_add(1))
    } else {
        width
    };

    let mut text = signed_to_string(value < 0, magnitude / divisor, whole_width, 10, ' ');
    if decimals > 0 {
        push_char(&mut text, DECIMAL_POINT);
        let fraction = signed_to_string(false, magnitude % divisor, decimals, 10, '0');
        push_str(&mut text, &fraction);
    }
    text
}

/// `label:[body]` - the shape of any value under edit.
pub fn wrap_field(label: &str, body: &str) -> Text {
    let mut text = Text::new();
    push_str(&mut text, label);
    push_char(&mut text, FIELD_PROMPT);
    push_char(&mut text, FIELD_DELIM_L);
    push_str(&mut text, body);
    push_char(&mut text, FIELD_DELIM_R);
    text
}

/// `[label]` - an action field waiting for SELECT.
pub fn wrap_action(label: &str) -> Text {
    let mut text = Text::new();
    push_char(&mut text, FIELD_DELIM_L);
    push_str(&mut text, label);
    push_char(&mut text, FIELD_DELIM_R);
    text
}

/// `<label>` - the current item while browsing a menu.
pub fn wrap_menu_item(label: &str) -> Text {
    let mut text = Text::new();
    push_char(&mut text, MENU_DELIM_L);
    push_str(&mut text, label);
    push_char(&mut text, MENU_DELIM_R);
    text
}

/// Number of entries in a `|`-separated list. An empty string has none.
pub fn list_count(list: &str) -> usize {
    if list.is_empty() {
        0
    } else {
        list.split(LIST_SEPARATOR).count()
    }
}

/// Entry `index` of a `|`-separated list, cut or padded with spaces to
/// exactly `width` characters. A missing entry renders as blanks.
pub fn list_item(list: &str, index: usize, width: u8) -> Text {
    let width = usize::from(width).min(TEXT_CAPACITY);
    let entry = list.split(LIST_SEPARATOR).nth(index).unwrap_or("");

    let mut text = Text::new();
    for c in entry.chars().take(width) {
        push_char(&mut text, c);
    }
    for _ in text.chars().count()..width {
        push_char(&mut text, ' ');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_is_right_justified() {
        assert_eq!(number_to_string(42, 5, 10, ' ').as_str(), "   42");
        assert_eq!(number_to_string(7, 3, 10, '0').as_str(), "007");
        assert_eq!(number_to_string(0, 2, 10, ' ').as_str(), " 0");
    }

    #[test]
    fn hex_digits_are_upper_case() {
        assert_eq!(number_to_string(255, 2, 16, ' ').as_str(), "FF");
        assert_eq!(number_to_string(0xA5, 4, 16, '0').as_str(), "00A5");
    }

    #[test]
    fn binary_base() {
        assert_eq!(number_to_string(5, 4, 2, '0').as_str(), "0101");
    }

    #[test]
    fn negative_numbers_carry_sign() {
        assert_eq!(number_to_string(-42, 4, 10, ' ').as_str(), " -42");
        assert_eq!(number_to_string(-42, 3, 10, ' ').as_str(), "-42");
    }

    #[test]
    fn overflow_shows_marker_instead_of_digits() {
        assert_eq!(number_to_string(1000, 2, 10, ' ').as_str(), "#");
        assert_eq!(number_to_string(-42, 2, 10, ' ').as_str(), "#");
        assert_eq!(number_to_string(1, 0, 10, ' ').as_str(), "#");
    }

    #[test]
    fn extreme_values_do_not_panic() {
        assert_eq!(number_to_string(i32::MIN, 11, 10, ' ').as_str(), "-2147483648");
        assert_eq!(number_to_string(i32::MIN, 10, 10, ' ').as_str(), "#");
        assert_eq!(number_to_string(i32::MAX, 31, 2, ' ').len(), 31);
    }

    #[test]
    fn fixed_point_splits_whole_and_fraction() {
        assert_eq!(fixed_to_string(12345, 6, 2).as_str(), "123.45");
        assert_eq!(fixed_to_string(12345, 8, 2).as_str(), "  123.45");
        assert_eq!(fixed_to_string(7, 5, 2).as_str(), " 0.07");
    }

    #[test]
    fn fixed_point_keeps_sign_on_zero_whole_part() {
        assert_eq!(fixed_to_string(-5, 5, 2).as_str(), "-0.05");
        assert_eq!(fixed_to_string(-1250, 6, 2).as_str(), "-12.50");
    }

    #[test]
    fn fixed_point_whole_overflow() {
        assert_eq!(fixed_to_string(123456, 6, 2).as_str(), "#.56");
    }

    #[test]
    fn fixed_point_without_decimals() {
        assert_eq!(fixed_to_string(42, 3, 0).as_str(), " 42");
    }

    #[test]
    fn wrapped_shapes() {
        assert_eq!(wrap_field("Temp", "150").as_str(), "Temp:[150]");
        assert_eq!(wrap_action("Reset").as_str(), "[Reset]");
        assert_eq!(wrap_menu_item("Bake").as_str(), "<Bake>");
    }

    #[test]
    fn long_text_is_cut_at_capacity() {
        let long = "0123456789012345678901234567890123456789";
        let text = wrap_field(long, "x");
        assert_eq!(text.len(), TEXT_CAPACITY);
        assert!(text.starts_with("0123456789"));
    }

    #[test]
    fn list_entries_are_counted() {
        assert_eq!(list_count(""), 0);
        assert_eq!(list_count("One"), 1);
        assert_eq!(list_count("Apple|Orange|Pear"), 3);
    }

    #[test]
    fn list_entries_are_padded_or_cut() {
        let list = "Apple|Orange|Pear";
        assert_eq!(list_item(list, 0, 6).as_str(), "Apple ");
        assert_eq!(list_item(list, 1, 4).as_str(), "Oran");
        assert_eq!(list_item(list, 2, 4).as_str(), "Pear");
        assert_eq!(list_item(list, 5, 3).as_str(), "   ");
    }
}
