// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logical option names. These are the long flag names without the `--` prefix, and they
//! are what every [`crate::OptionParseError`] is tagged with.

pub const ALGORITHM: &str = "algorithm";
pub const COORDINATOR: &str = "coordinator";
pub const ENV: &str = "env";
pub const ROBOT: &str = "robot";
pub const START: &str = "start";
pub const GOAL: &str = "goal";
pub const MIN: &str = "min";
pub const MAX: &str = "max";
pub const TIME_LIMIT: &str = "time-limit";
pub const DISCRETIZATION: &str = "discretization";
