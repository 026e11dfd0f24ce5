// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rules for structured literals. Each one is built out of the rules of its components,
//! interleaved with [`expect_separator`]:
//!
//! | shape              | grammar                      | empty input      |
//! | ------------------ | ---------------------------- | ---------------- |
//! | `[T; N]`           | `t0,t1,...,t(N-1)`           | `MissingValue`   |
//! | `SVector<S, N>`    | same as `[S; N]`             | `MissingValue`   |
//! | `Quaternion<S>`    | same as `[S; 4]`, `i,j,k,w`  | `MissingValue`   |
//! | `(A, B)`           | `a,b`                        | whatever `A` says|
//! | `Option<T>`        | empty, or a `T` literal      | `None`           |

use nalgebra::{Quaternion, SVector, Scalar, Vector4};
use nom::{IResult, Parser, character::complete::char};

use super::{ParseCursor, ParseRule, RuleResult};
use crate::OptionParseError;

/// The only delimiter used between the components of a composite literal.
pub const COMPONENT_SEPARATOR: char = ',';

/// Consume [`COMPONENT_SEPARATOR`] at the cursor, or fail with
/// [`OptionParseError::ExpectedSeparator`] (including at the end of the input).
///
/// # Errors
///
/// See above.
pub fn expect_separator(
    cursor: ParseCursor<'_>,
) -> Result<ParseCursor<'_>, OptionParseError> {
    let result: IResult<&str, char> =
        char(COMPONENT_SEPARATOR).parse(cursor.remaining());
    result
        .ok()
        .and_then(|(remainder, _)| cursor.advance_to(remainder))
        .ok_or_else(|| cursor.expected_separator(COMPONENT_SEPARATOR))
}

/// Fixed length sequence of `N` components. Components are never defaulted: an empty
/// input is a [`OptionParseError::MissingValue`], and a short input fails on the missing
/// separator or number. The cursor is left right after the last component, so a trailing
/// comma is left for the caller to deal with.
impl<T, const N: usize> ParseRule for [T; N]
where
    T: ParseRule + Copy + Default,
{
    fn parse_rule(cursor: ParseCursor<'_>) -> RuleResult<'_, Self> {
        let mut components = [T::default(); N];

        // Nothing to read for an empty array.
        if N == 0 {
            return Ok((components, cursor));
        }

        if cursor.is_at_end() {
            return Err(cursor.missing_value());
        }

        let mut cursor = cursor;
        for (index, component) in components.iter_mut().enumerate() {
            if index > 0 {
                cursor = expect_separator(cursor)?;
            }
            let (value, next_cursor) = T::parse_rule(cursor)?;
            *component = value;
            cursor = next_cursor;
        }

        Ok((components, cursor))
    }
}

/// Column vector, eg: `Vector3<f64>` from `"1,2,3"`.
impl<S, const N: usize> ParseRule for SVector<S, N>
where
    S: ParseRule + Scalar + Copy + Default,
{
    fn parse_rule(cursor: ParseCursor<'_>) -> RuleResult<'_, Self> {
        let (components, cursor) = <[S; N]>::parse_rule(cursor)?;
        Ok((SVector::from(components), cursor))
    }
}

/// The four literals are taken as the raw quaternion coefficients, positionally, in
/// nalgebra's storage order `[i, j, k, w]`. There is no normalization, and no angle-axis
/// conversion. Callers supply already valid coefficients.
impl<S> ParseRule for Quaternion<S>
where
    S: ParseRule + Scalar + Copy + Default,
{
    fn parse_rule(cursor: ParseCursor<'_>) -> RuleResult<'_, Self> {
        let (coefficients, cursor) = Vector4::<S>::parse_rule(cursor)?;
        Ok((Quaternion::from(coefficients), cursor))
    }
}

/// Ordered pair of two (possibly different) shapes, eg: `(Quaternion<f64>, Vector3<f64>)`.
impl<A, B> ParseRule for (A, B)
where
    A: ParseRule,
    B: ParseRule,
{
    fn parse_rule(cursor: ParseCursor<'_>) -> RuleResult<'_, Self> {
        let (first, cursor) = A::parse_rule(cursor)?;
        let cursor = expect_separator(cursor)?;
        let (second, cursor) = B::parse_rule(cursor)?;
        Ok(((first, second), cursor))
    }
}

/// An empty remainder means "absent", and nothing is consumed. Anything else is handed to
/// `T`'s rule as is.
impl<T> ParseRule for Option<T>
where
    T: ParseRule,
{
    fn parse_rule(cursor: ParseCursor<'_>) -> RuleResult<'_, Self> {
        if cursor.is_at_end() {
            return Ok((None, cursor));
        }
        let (value, cursor) = T::parse_rule(cursor)?;
        Ok((Some(value), cursor))
    }
}


#[cfg(test)]
mod tests_quaternion {
    use super::*;
    use crate::{OptionErrorKind, parse_option};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_coefficients_are_taken_literally() {
        let q: Quaternion<f64> = parse_option("start", "1,2,3,4").unwrap();
        assert_eq!(q.coords, Vector4::new(1.0, 2.0, 3.0, 4.0));
        // Not normalized.
        assert_eq!(q.coords.norm_squared(), 30.0);
    }

    #[test]
    fn test_identity_in_storage_order() {
        let q: Quaternion<f32> = parse_option("start", "0,0,0,1").unwrap();
        assert_eq!(q, Quaternion::identity());
    }

    #[test]
    fn test_needs_four_components() {
        let error = parse_option::<Quaternion<f64>>("goal", "1,2,3").unwrap_err();
        assert_eq!(error.kind(), OptionErrorKind::ExpectedSeparator);

        let error = parse_option::<Quaternion<f64>>("goal", "").unwrap_err();
        assert_eq!(error.kind(), OptionErrorKind::MissingValue);
    }
}


#[cfg(test)]
mod tests_optional {
    use super::*;
    use crate::{OptionErrorKind, parse_option};
    use nalgebra::Vector3;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_is_absent_and_consumes_nothing() {
        let (value, cursor) =
            Option::<f64>::parse_rule(ParseCursor::new("x", "")).unwrap();
        assert_eq!(value, None);
        assert_eq!(cursor.offset(), 0);

        let value: Option<f64> = parse_option("x", "").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_present_value() {
        let value: Option<f64> = parse_option("x", "4.5").unwrap();
        assert_eq!(value, Some(4.5));

        let value: Option<Vector3<f64>> = parse_option("max", "1,2,3").unwrap();
        assert_eq!(value, Some(Vector3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_present_fractional_values() {
        let value: Option<f32> = parse_option("x", "0.75").unwrap();
        assert_eq!(value, Some(0.75));

        let value: Option<Vector3<f64>> = parse_option("min", "-5.5,0.1,2.5").unwrap();
        assert_eq!(value, Some(Vector3::new(-5.5, 0.1, 2.5)));
    }

    #[test]
    fn test_non_empty_defers_to_inner_rule() {
        let error = parse_option::<Option<Vector3<f64>>>("max", "1,2").unwrap_err();
        assert_eq!(error.kind(), OptionErrorKind::ExpectedSeparator);

        let error = parse_option::<Option<f64>>("x", "abc").unwrap_err();
        assert_eq!(error.kind(), OptionErrorKind::InvalidNumber);
    }

    #[test]
    fn test_optional_second_half_of_pair() {
        let value: (f64, Option<f64>) = parse_option("x", "1,").unwrap();
        assert_eq!(value, (1.0, None));

        let value: (f64, Option<f64>) = parse_option("x", "1,2").unwrap();
        assert_eq!(value, (1.0, Some(2.0)));
    }
}
