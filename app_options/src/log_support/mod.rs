// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Structured logging for the front end, built on [`tracing`]. Logging is **disabled**
//! by default. It is turned on by the `--enable-logging` and `--verbose` flags, see
//! [`crate::LoggingOption`].

// Attach sources.
pub mod public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use public_api::*;
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
