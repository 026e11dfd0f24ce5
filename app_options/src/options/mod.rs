// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The option facade. [`CLIArg`] scans the command line into raw strings, and
//! [`AppOptions`] turns those strings into typed values on demand.

// Attach sources.
pub mod app_options;
pub mod cli_arg;
pub mod option_names;

// Re-export.
pub use app_options::*;
pub use cli_arg::*;
