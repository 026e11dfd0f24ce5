// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # mpl_app_options
//!
//! A small, type-directed parser that turns command line option strings into strongly
//! typed values. It exists so that a motion planning front end can accept geometric
//! parameters (positions, bounds, orientations) as a single comma-separated token,
//! instead of one flag per component.
//!
//! ```text
//! mpl-demo --algorithm rrt --start 0,0,0,1,1.5,2,0 --min=-5,-5,-5 --max 5,5,5
//! ```
//!
//! ## Entry points
//!
//! 1. [`parse_option()`] parses one raw option value as any type that implements
//!    [`ParseRule`], and fails if any characters are left over.
//! 2. [`AppOptions`] owns the raw value of every named option (collected by [`CLIArg`])
//!    and offers typed accessors such as [`AppOptions::start`] and
//!    [`AppOptions::algorithm`].
//! 3. [`mod@log_support`] sets up [`tracing`] output for the `mpl-demo` binary.
//!
//! ## Composite literal grammar
//!
//! | Requested type                   | Literal                               |
//! | -------------------------------- | ------------------------------------- |
//! | `f32`, `f64`                     | `-1.5`, `3`, `2.5e-3`, `inf`          |
//! | `[S; N]`, `SVector<S, N>`        | `s0,s1,...,s(N-1)`                    |
//! | `Quaternion<S>`                  | `i,j,k,w` (taken literally)           |
//! | `(A, B)`                         | `A-literal,B-literal`                 |
//! | `Option<T>`                      | empty string, or a `T` literal        |
//!
//! Composite rules nest, so `(Quaternion<f64>, Vector3<f64>)` is a rigid body pose
//! written as 7 comma-separated numbers.
//!
//! ## Adding a new shape
//!
//! Implement [`ParseRule`] for the new type. The rule receives a [`ParseCursor`],
//! delegates to the rules of its components, and returns the value together with the
//! advanced cursor. No existing rule has to change.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod log_support;
pub mod options;
pub mod parse;

// Re-export.
pub use log_support::*;
pub use options::*;
pub use parse::*;
