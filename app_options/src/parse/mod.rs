// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The type directed parsing engine. The main entry point is [`parse_option()`], which
//! takes an option name and its raw value, and returns a value of whatever type the
//! caller asks for (as long as that type implements [`ParseRule`]).
//!
//! 1. [`ParseCursor`] is the read position shared by all the rules.
//! 2. [`mod@scalar_rules`] decode single numbers.
//! 3. [`mod@composite_rules`] decode vectors, quaternions, pairs, and optional values, by
//!    delegating to the rules of their components.
//! 4. [`OptionParseError`] lists every way a parse can fail.

// Attach sources.
pub mod composite_rules;
pub mod parse_cursor;
pub mod parse_error;
pub mod parse_rule;
pub mod scalar_rules;

// Re-export.
pub use composite_rules::*;
pub use parse_cursor::*;
pub use parse_error::*;
pub use parse_rule::*;
pub use scalar_rules::*;
