// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The type indexed dispatch table. There is one [`ParseRule`] implementation per result
//! type, and the compiler selects it from the type that the caller asks for:
//!
//! ```text
//! parse_option::<(Quaternion<f64>, Vector3<f64>)>("start", raw)
//!   └─► (A, B)::parse_rule
//!         ├─► Quaternion<f64>::parse_rule ─► Vector4<f64> ─► [f64; 4] ─► f64 × 4
//!         ├─► expect ','
//!         └─► Vector3<f64>::parse_rule    ─► [f64; 3] ─► f64 × 3
//! ```
//!
//! Only [`parse_option()`] checks that the whole raw value was consumed. Nested rules
//! legitimately stop in front of a separator that their caller consumes.

use super::{OptionParseResult, ParseCursor};
use crate::OptionParseError;

/// What every rule returns: the decoded value, and the cursor positioned at the first
/// character the rule did not consume.
pub type RuleResult<'a, T> = Result<(T, ParseCursor<'a>), OptionParseError>;

/// Implement this trait to make a type parseable from an option value.
///
/// A rule consumes a prefix of [`ParseCursor::remaining`] and reports where it stopped.
/// It must not check for trailing characters, and it must not consume past the end of
/// the input (the cursor API makes this impossible).
pub trait ParseRule: Sized {
    /// # Errors
    ///
    /// Returns the first [`OptionParseError`] encountered. No partially built value is
    /// ever returned.
    fn parse_rule(cursor: ParseCursor<'_>) -> RuleResult<'_, Self>;
}

/// Parse the raw value of the option named `option_name` as `T`, and fail with
/// [`OptionParseError::ExtraCharacters`] if anything is left over.
///
/// This is a pure function of its inputs, so calling it repeatedly (from any thread, and
/// with different `T`s) is safe and always gives the same answer.
///
/// ```
/// use mpl_app_options::parse_option;
/// use nalgebra::Vector3;
///
/// let position: Vector3<f64> = parse_option("start", "1,2,3").unwrap();
/// assert_eq!(position, Vector3::new(1.0, 2.0, 3.0));
///
/// assert!(parse_option::<Vector3<f64>>("start", "1,2,3,").is_err());
/// ```
///
/// # Errors
///
/// Returns whatever error the rule for `T` produced, tagged with `option_name`, or
/// [`OptionParseError::ExtraCharacters`] if the rule succeeded without reaching the end
/// of `raw_value`.
pub fn parse_option<T: ParseRule>(
    option_name: &str,
    raw_value: &str,
) -> OptionParseResult<T> {
    let result = T::parse_rule(ParseCursor::new(option_name, raw_value)).and_then(
        |(value, cursor)| {
            if cursor.is_at_end() {
                Ok(value)
            } else {
                Err(cursor.extra_characters())
            }
        },
    );

    if let Err(error) = &result {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "option value did not parse",
            option_name = %option_name,
            raw_value = ?raw_value,
            kind = %error.kind(),
            offset = ?error.offset()
        );
    }

    result
}
