// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every way that parsing a single option can fail. All of them are fatal for that
//! option, and none of them are retried. The first failure aborts the parse.
//!
//! The errors only carry context (the option name, the raw value, and the offset of the
//! failure). Rendering them is left to the invoking program, usually via [miette].

use miette::SourceSpan;

/// Type alias for the result of parsing an option value.
pub type OptionParseResult<T> = Result<T, OptionParseError>;

#[derive(thiserror::Error, miette::Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum OptionParseError {
    /// A required string valued option was never supplied.
    #[error("--{option_name} is required")]
    #[diagnostic(code(mpl::option::missing_option))]
    MissingOption { option_name: String },

    /// A composite parse was attempted on an empty string, where at least one
    /// component is mandatory.
    #[error("--{option_name} requires a value")]
    #[diagnostic(
        code(mpl::option::missing_value),
        help("Pass the components as comma-separated numbers, eg: `1,2,3`")
    )]
    MissingValue { option_name: String },

    /// A scalar literal failed to parse at the current position.
    #[error("invalid number in --{option_name}")]
    #[diagnostic(code(mpl::option::invalid_number))]
    InvalidNumber {
        option_name: String,
        #[source_code]
        raw_value: String,
        #[label("expected a number here")]
        at: SourceSpan,
    },

    /// A composite rule expected a delimiter at the current position.
    #[error("expected '{separator}' in --{option_name}")]
    #[diagnostic(code(mpl::option::expected_separator))]
    ExpectedSeparator {
        option_name: String,
        separator: char,
        #[source_code]
        raw_value: String,
        #[label("expected a separator here")]
        at: SourceSpan,
    },

    /// A full option value was parsed, but characters remained unconsumed.
    #[error("extra characters in --{option_name}")]
    #[diagnostic(code(mpl::option::extra_characters))]
    ExtraCharacters {
        option_name: String,
        #[source_code]
        raw_value: String,
        #[label("unexpected")]
        at: SourceSpan,
    },
}

/// Field-less mirror of [`OptionParseError`], handy for matching and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum OptionErrorKind {
    MissingOption,
    MissingValue,
    InvalidNumber,
    ExpectedSeparator,
    ExtraCharacters,
}

impl OptionParseError {
    #[must_use]
    pub fn kind(&self) -> OptionErrorKind {
        match self {
            Self::MissingOption { .. } => OptionErrorKind::MissingOption,
            Self::MissingValue { .. } => OptionErrorKind::MissingValue,
            Self::InvalidNumber { .. } => OptionErrorKind::InvalidNumber,
            Self::ExpectedSeparator { .. } => OptionErrorKind::ExpectedSeparator,
            Self::ExtraCharacters { .. } => OptionErrorKind::ExtraCharacters,
        }
    }

    /// The logical name of the option that failed, eg: `start`, without the `--`.
    #[must_use]
    pub fn option_name(&self) -> &str {
        match self {
            Self::MissingOption { option_name }
            | Self::MissingValue { option_name }
            | Self::InvalidNumber { option_name, .. }
            | Self::ExpectedSeparator { option_name, .. }
            | Self::ExtraCharacters { option_name, .. } => option_name,
        }
    }

    /// Byte offset into the raw value where the failure was detected. `None` for the
    /// kinds that are about the whole value rather than a position in it.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::MissingOption { .. } | Self::MissingValue { .. } => None,
            Self::InvalidNumber { at, .. }
            | Self::ExpectedSeparator { at, .. }
            | Self::ExtraCharacters { at, .. } => Some(at.offset()),
        }
    }

    pub fn missing_option(option_name: impl Into<String>) -> Self {
        Self::MissingOption {
            option_name: option_name.into(),
        }
    }
}
