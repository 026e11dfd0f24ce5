// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::{TracingConfig, try_create_layers};

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
///
/// Logging is **DISABLED** by **default**. If the level filter of `options` is
/// [`tracing_core::LevelFilter::OFF`], this does nothing, and the [`tracing::debug!`]
/// etc. calls made by this crate go nowhere.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been set.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    let Some(layers) = try_create_layers(&it)? else {
        return Ok(());
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|error| miette::miette!("Can't initialize logging: {error}"))
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - This is great for tests.
/// - Docs for [Thread local tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
///
/// Logging is **DISABLED** by **default**. Returns [`None`] if the level filter of
/// `options` is [`tracing_core::LevelFilter::OFF`]. Otherwise, drop the returned guard to
/// restore the previous subscriber of this thread.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    let Some(layers) = try_create_layers(&it)? else {
        return Ok(None);
    };

    Ok(Some(tracing_subscriber::registry().with(layers).set_default()))
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use tempfile::tempdir;
    use tracing_core::LevelFilter;

    use super::*;
    use crate::{AppOptions, LoggingOption, WriterConfig, parse_option};

    fn file_config(file_path: &str) -> TracingConfig {
        TracingConfig {
            writer_config: WriterConfig::File(file_path.to_string()),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[test]
    #[serial]
    fn test_disabled_by_default() {
        let guard = try_initialize_logging_thread_local(&LoggingOption::default()).unwrap();
        assert!(guard.is_none());
    }

    #[test]
    #[serial]
    fn test_parse_failure_is_logged() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("log.txt");
        let file_path = file_path.to_str().unwrap().to_string();

        let guard = try_initialize_logging_thread_local(file_config(&file_path))
            .unwrap()
            .unwrap();
        let result = parse_option::<[f64; 3]>("start", "1,2,x");
        drop(guard);

        assert!(result.is_err());
        let output = std::fs::read_to_string(&file_path).unwrap();
        assert!(output.contains("option value did not parse"));
        assert!(output.contains("option_name=start"));
        assert!(output.contains("kind=InvalidNumber"));
    }

    #[test]
    #[serial]
    fn test_assembly_is_logged() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("log.txt");
        let file_path = file_path.to_str().unwrap().to_string();

        let guard = try_initialize_logging_thread_local(file_config(&file_path))
            .unwrap()
            .unwrap();
        let options = AppOptions::try_from_args(["mpl-demo", "--algorithm", "rrt"]);
        drop(guard);

        assert!(options.is_ok());
        let output = std::fs::read_to_string(&file_path).unwrap();
        assert!(output.contains("assembled app options"));
        assert!(output.contains("rrt"));
    }

    #[test]
    #[serial]
    fn test_off_level_filter_writes_nothing() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("log.txt");

        let config = TracingConfig {
            level_filter: LevelFilter::OFF,
            ..file_config(file_path.to_str().unwrap())
        };
        let guard = try_initialize_logging_thread_local(config).unwrap();

        assert!(guard.is_none());
        assert!(!file_path.exists());
    }
}
