// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::OptionParseError;

/// The shared read position that every [`crate::ParseRule`] obeys.
///
/// A cursor is a `Copy` value. Rules never mutate one in place; they receive a cursor
/// and return a new one (alongside the parsed value) that points at the first
/// unconsumed byte. The input is only ever read forward, and the offset can never move
/// past the end of the raw value.
///
/// The cursor also carries the option's logical name, so that any rule can produce an
/// error that names the flag that failed.
///
/// | input       | offset | remaining  | is at end |
/// | ----------- | ------ | ---------- | --------- |
/// | `"1,2,3"`   | 0      | `"1,2,3"`  | false     |
/// | `"1,2,3"`   | 2      | `"2,3"`    | false     |
/// | `"1,2,3"`   | 5      | `""`       | true      |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseCursor<'a> {
    option_name: &'a str,
    input: &'a str,
    offset: usize,
}

impl<'a> ParseCursor<'a> {
    /// Start a cursor at the beginning of `input`.
    #[must_use]
    pub fn new(option_name: &'a str, input: &'a str) -> Self {
        Self {
            option_name,
            input,
            offset: 0,
        }
    }

    #[must_use]
    pub fn option_name(&self) -> &'a str { self.option_name }

    /// The whole raw value, including what was already consumed.
    #[must_use]
    pub fn input(&self) -> &'a str { self.input }

    /// Byte offset of the first unconsumed character.
    #[must_use]
    pub fn offset(&self) -> usize { self.offset }

    /// Everything from the current position to the end of the raw value.
    #[must_use]
    pub fn remaining(&self) -> &'a str { &self.input[self.offset..] }

    #[must_use]
    pub fn is_at_end(&self) -> bool { self.offset == self.input.len() }

    /// Move the cursor so that `remainder` is what's left to parse. This is how the
    /// output of a [nom] parser (which returns the unconsumed suffix) is turned back into
    /// a cursor position. Only lengths are compared, never slice addresses.
    ///
    /// Returns [`None`] if `remainder` is not a suffix of [`Self::remaining`], since that
    /// would mean moving backwards, or landing somewhere the input doesn't say.
    #[must_use]
    pub fn advance_to(self, remainder: &str) -> Option<Self> {
        let remaining = self.remaining();
        if remainder.len() > remaining.len() || !remaining.ends_with(remainder) {
            return None;
        }
        Some(Self {
            offset: self.input.len() - remainder.len(),
            ..self
        })
    }
}

/// Error constructors. Each one captures the option name, and for positional errors, the
/// raw value and the current offset.
impl ParseCursor<'_> {
    #[must_use]
    pub fn missing_value(&self) -> OptionParseError {
        OptionParseError::MissingValue {
            option_name: self.option_name.to_string(),
        }
    }

    #[must_use]
    pub fn invalid_number(&self) -> OptionParseError {
        OptionParseError::InvalidNumber {
            option_name: self.option_name.to_string(),
            raw_value: self.input.to_string(),
            at: (self.offset, self.next_char_len()).into(),
        }
    }

    #[must_use]
    pub fn expected_separator(&self, separator: char) -> OptionParseError {
        OptionParseError::ExpectedSeparator {
            option_name: self.option_name.to_string(),
            separator,
            raw_value: self.input.to_string(),
            at: (self.offset, self.next_char_len()).into(),
        }
    }

    #[must_use]
    pub fn extra_characters(&self) -> OptionParseError {
        OptionParseError::ExtraCharacters {
            option_name: self.option_name.to_string(),
            raw_value: self.input.to_string(),
            at: (self.offset, self.remaining().len()).into(),
        }
    }

    /// Width of the label under the character at the cursor, zero at end of input.
    fn next_char_len(&self) -> usize {
        self.remaining().chars().next().map_or(0, char::len_utf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OptionErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_cursor_is_at_start() {
        let cursor = ParseCursor::new("start", "1,2,3");
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.remaining(), "1,2,3");
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_empty_input_is_at_end() {
        let cursor = ParseCursor::new("start", "");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.remaining(), "");
    }

    #[test]
    fn test_advance_to_suffix() {
        let cursor = ParseCursor::new("start", "1,2,3");
        let cursor = cursor.advance_to(&cursor.remaining()[2..]).unwrap();
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.remaining(), "2,3");

        let cursor = cursor.advance_to("").unwrap();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.input(), "1,2,3");
    }

    #[test]
    fn test_advance_to_rejects_what_is_not_a_suffix() {
        let cursor = ParseCursor::new("goal", "ab").advance_to("b").unwrap();
        assert_eq!(cursor.offset(), 1);

        // Longer than what is left, so it would move backwards.
        assert_eq!(cursor.advance_to("ab"), None);
        // Same length, different text.
        assert_eq!(cursor.advance_to("x"), None);
        // Staying put is fine.
        assert_eq!(cursor.advance_to("b"), Some(cursor));
    }

    #[test]
    fn test_advance_to_uses_lengths_not_addresses() {
        let input = "4.5";
        let cursor = ParseCursor::new("x", input);

        // An empty slice that lives outside of `input` still means "at the end".
        let elsewhere = String::from("unrelated");
        let cursor = cursor.advance_to(&elsewhere[..0]).unwrap();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.offset(), input.len());
    }

    #[test]
    fn test_errors_capture_position() {
        let cursor = ParseCursor::new("min", "1;2").advance_to(";2").unwrap();

        let error = cursor.expected_separator(',');
        assert_eq!(error.kind(), OptionErrorKind::ExpectedSeparator);
        assert_eq!(error.option_name(), "min");
        assert_eq!(error.offset(), Some(1));

        let error = cursor.extra_characters();
        assert_eq!(error.kind(), OptionErrorKind::ExtraCharacters);
        assert_eq!(error.offset(), Some(1));

        let error = cursor.missing_value();
        assert_eq!(error.offset(), None);
    }
}
