// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Create an appender that writes to `path_str`, and never rolls over to a new file. A
/// relative path is resolved against the current working directory. Missing parent
/// folders are created.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no file name
/// - Insufficient permissions to create the file or its parent folders
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't use {} as a log file. It doesn't end with a file name.",
            path.display()
        )
    })?;

    let parent = path.parent().map(PathBuf::from).unwrap_or_default();

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
}
