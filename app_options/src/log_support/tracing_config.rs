// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

use crate::LoggingOption;

/// The log file used by `--enable-logging`. It lives in the current working directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where the logs go, and how much of them. Pass this to
/// [`crate::try_initialize_logging_global`] or
/// [`crate::try_initialize_logging_thread_local`].
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] to use. [`LevelFilter::OFF`] disables logging
///   altogether.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// The `String` is the path of the log file, eg: `log.txt` or `/tmp/mpl/log.txt`. Display
/// logging always goes to stderr, since stdout carries the program's own output.
#[derive(Debug, Clone, PartialEq)]
pub enum WriterConfig {
    None,
    Stderr,
    File(String),
    StderrAndFile(String),
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

/// Map the command line flags onto a configuration:
///
/// | `--enable-logging` | `--verbose` | writer                          | level   |
/// | ------------------ | ----------- | ------------------------------- | ------- |
/// | no                 | no          | [`WriterConfig::None`]          | `OFF`   |
/// | yes                | no          | [`WriterConfig::File`]          | `DEBUG` |
/// | no                 | yes         | [`WriterConfig::Stderr`]        | `DEBUG` |
/// | yes                | yes         | [`WriterConfig::StderrAndFile`] | `DEBUG` |
impl From<&LoggingOption> for TracingConfig {
    fn from(logging_option: &LoggingOption) -> Self {
        let log_file = || DEFAULT_LOG_FILE_NAME.to_string();

        let writer_config =
            match (logging_option.verbose, logging_option.enable_logging) {
                (false, false) => WriterConfig::None,
                (true, false) => WriterConfig::Stderr,
                (false, true) => WriterConfig::File(log_file()),
                (true, true) => WriterConfig::StderrAndFile(log_file()),
            };

        let level_filter = match writer_config {
            WriterConfig::None => LevelFilter::OFF,
            _ => LevelFilter::DEBUG,
        };

        Self {
            writer_config,
            level_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(false, false, WriterConfig::None, LevelFilter::OFF)]
    #[test_case(true, false, WriterConfig::File("log.txt".into()), LevelFilter::DEBUG)]
    #[test_case(false, true, WriterConfig::Stderr, LevelFilter::DEBUG)]
    #[test_case(true, true, WriterConfig::StderrAndFile("log.txt".into()), LevelFilter::DEBUG)]
    fn test_from_logging_option(
        enable_logging: bool,
        verbose: bool,
        writer_config: WriterConfig,
        level_filter: LevelFilter,
    ) {
        let logging_option = LoggingOption {
            enable_logging,
            verbose,
        };
        let it = TracingConfig::from(&logging_option);
        assert_eq!(it.get_writer_config(), writer_config);
        assert_eq!(it.get_level_filter(), level_filter);
    }
}
