// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rules for single floating point literals. Both widths share exactly the same grammar
//! ([`recognize_float_literal`]); only the final conversion differs.

use std::str::FromStr;

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::tag_no_case,
          character::complete::{char, digit1, one_of},
          combinator::{opt, value},
          error::{Error, ErrorKind}};

use super::{ParseCursor, ParseRule, RuleResult};

impl ParseRule for f32 {
    fn parse_rule(cursor: ParseCursor<'_>) -> RuleResult<'_, Self> {
        parse_float_literal(cursor)
    }
}

impl ParseRule for f64 {
    fn parse_rule(cursor: ParseCursor<'_>) -> RuleResult<'_, Self> {
        parse_float_literal(cursor)
    }
}

/// Decode one literal at the cursor and convert it to `F`. An empty or malformed literal
/// is an [`crate::OptionParseError::InvalidNumber`].
fn parse_float_literal<F: FromStr>(cursor: ParseCursor<'_>) -> RuleResult<'_, F> {
    let Ok((remainder, literal)) = recognize_float_literal(cursor.remaining()) else {
        return Err(cursor.invalid_number());
    };
    let value = literal.parse::<F>().map_err(|_| cursor.invalid_number())?;
    let next_cursor = cursor
        .advance_to(remainder)
        .ok_or_else(|| cursor.invalid_number())?;
    Ok((value, next_cursor))
}

/// Recognize (without converting) the longest decimal floating point literal at the
/// start of `input`. The literal and the remainder always split `input` exactly:
/// `literal.len() + remainder.len() == input.len()`.
///
/// | input          | output       | remainder |
/// | -------------- | ------------ | --------- |
/// | `"-1.5,2"`     | `"-1.5"`     | `",2"`    |
/// | `"4.5"`        | `"4.5"`      | `""`      |
/// | `"2.5e-3"`     | `"2.5e-3"`   | `""`      |
/// | `".5"`         | `".5"`       | `""`      |
/// | `"1e"`         | `"1"`        | `"e"`     |
/// | `"-inf"`       | `"-inf"`     | `""`      |
/// | `",1"`         | error        |           |
///
/// # Errors
///
/// Returns a nom error if there is no literal at the start of `input`.
pub fn recognize_float_literal(input: &str) -> IResult<&str, &str> {
    let result: IResult<&str, ()> = value(
        (),
        (
            /* sign */ opt(one_of("+-")),
            alt((
                value(
                    (),
                    (
                        /* mantissa */
                        alt((
                            value((), (digit1, opt((char('.'), opt(digit1))))),
                            value((), (char('.'), digit1)),
                        )),
                        /* exponent */ opt((one_of("eE"), opt(one_of("+-")), digit1)),
                    ),
                ),
                // Longest spelling first.
                value((), tag_no_case("infinity")),
                value((), tag_no_case("inf")),
                value((), tag_no_case("nan")),
            )),
        ),
    )
    .parse(input);
    let (remainder, ()) = result?;

    // Split by length, so the literal and the remainder can never disagree.
    let consumed = input.len().saturating_sub(remainder.len());
    match input.split_at_checked(consumed) {
        Some((literal, rest)) if !literal.is_empty() => Ok((rest, literal)),
        _ => Err(nom::Err::Error(Error::new(input, ErrorKind::Float))),
    }
}
