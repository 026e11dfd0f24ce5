// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use miette::IntoDiagnostic;

use super::{CLIArg, option_names};
use crate::{OptionParseError, OptionParseResult, ParseRule, parse_option};

/// Owns the raw value of every named option, and hands out typed values on demand.
///
/// - The string options ([`Self::algorithm`], [`Self::coordinator`], [`Self::env`],
///   [`Self::robot`]) are required by default. Each one has a `maybe_*` counterpart for
///   callers that can live without it.
/// - The geometric options ([`Self::start`], [`Self::goal`], [`Self::min`],
///   [`Self::max`]) are stored as raw strings and parsed lazily, as whatever type the
///   caller asks for. There's no caching: the same raw value can be parsed many times,
///   with different types.
/// - The numeric options ([`Self::problem_id`], [`Self::time_limit`],
///   [`Self::discretization`]) are parsed once, when the options are assembled.
///
/// An absent option and an empty option are the same thing.
///
/// Once built, an [`AppOptions`] is never mutated, so it can be shared between threads
/// freely.
///
/// ```
/// use mpl_app_options::AppOptions;
/// use nalgebra::{Quaternion, Vector3};
///
/// let options = AppOptions::try_from_args([
///     "mpl-demo", "--algorithm", "rrt", "--start=0,0,0,1,1,2,3", "--max", "5,5,5",
/// ])
/// .unwrap();
///
/// assert_eq!(options.algorithm().unwrap(), "rrt");
/// let (orientation, position) = options.start::<(Quaternion<f64>, Vector3<f64>)>().unwrap();
/// assert_eq!(orientation, Quaternion::identity());
/// assert_eq!(position, Vector3::new(1.0, 2.0, 3.0));
/// assert_eq!(options.min::<Option<Vector3<f64>>>().unwrap(), None);
/// assert_eq!(options.time_limit(), f64::INFINITY);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppOptions {
    algorithm: String,
    coordinator: String,
    problem_id: u64,
    env: String,
    robot: String,
    start: String,
    goal: String,
    min: String,
    max: String,
    time_limit: f64,
    discretization: f64,
}

mod defaults {
    pub const TIME_LIMIT: f64 = f64::INFINITY;
    pub const DISCRETIZATION: f64 = 0.0;
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            algorithm: String::new(),
            coordinator: String::new(),
            problem_id: 0,
            env: String::new(),
            robot: String::new(),
            start: String::new(),
            goal: String::new(),
            min: String::new(),
            max: String::new(),
            time_limit: defaults::TIME_LIMIT,
            discretization: defaults::DISCRETIZATION,
        }
    }
}

/// Assemble the options from the output of the argument scanner. The numeric options
/// are parsed here, and a malformed one fails the whole construction.
impl TryFrom<CLIArg> for AppOptions {
    type Error = OptionParseError;

    fn try_from(cli_arg: CLIArg) -> Result<Self, Self::Error> {
        let time_limit = parse_numeric_or(
            option_names::TIME_LIMIT,
            cli_arg.time_limit.as_deref(),
            defaults::TIME_LIMIT,
        )?;
        let discretization = parse_numeric_or(
            option_names::DISCRETIZATION,
            cli_arg.discretization.as_deref(),
            defaults::DISCRETIZATION,
        )?;

        let it = Self {
            algorithm: cli_arg.algorithm.unwrap_or_default(),
            coordinator: cli_arg.coordinator.unwrap_or_default(),
            problem_id: cli_arg.problem_id,
            env: cli_arg.env.unwrap_or_default(),
            robot: cli_arg.robot.unwrap_or_default(),
            start: cli_arg.start.unwrap_or_default(),
            goal: cli_arg.goal.unwrap_or_default(),
            min: cli_arg.min.unwrap_or_default(),
            max: cli_arg.max.unwrap_or_default(),
            time_limit,
            discretization,
        };

        // % is Display, ? is Debug.
        tracing::debug!(message = "assembled app options", app_options = ?it);

        Ok(it)
    }
}

/// An absent or empty raw value falls back to `default_value`.
fn parse_numeric_or(
    option_name: &str,
    maybe_raw_value: Option<&str>,
    default_value: f64,
) -> OptionParseResult<f64> {
    match maybe_raw_value {
        Some(raw_value) if !raw_value.is_empty() => parse_option(option_name, raw_value),
        _ => Ok(default_value),
    }
}

/// Turn an empty raw value into a [`OptionParseError::MissingOption`].
fn require<'a>(option_name: &str, raw_value: &'a str) -> OptionParseResult<&'a str> {
    if raw_value.is_empty() {
        Err(OptionParseError::missing_option(option_name))
    } else {
        Ok(raw_value)
    }
}

fn maybe(raw_value: &str) -> Option<&str> {
    if raw_value.is_empty() {
        None
    } else {
        Some(raw_value)
    }
}

impl AppOptions {
    /// Scan `args` (the first item is the program name) and assemble the options.
    ///
    /// # Errors
    ///
    /// Returns an error if the scanner rejects the arguments (including requests for
    /// `--help` or `--version`), or if `--time-limit` or `--discretization` don't parse.
    pub fn try_from_args<I, T>(args: I) -> miette::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli_arg = CLIArg::try_parse_from(args).into_diagnostic()?;
        Ok(Self::try_from(cli_arg)?)
    }

    /// # Errors
    ///
    /// [`OptionParseError::MissingOption`] if `--algorithm` wasn't given.
    pub fn algorithm(&self) -> OptionParseResult<&str> {
        require(option_names::ALGORITHM, &self.algorithm)
    }

    #[must_use]
    pub fn maybe_algorithm(&self) -> Option<&str> { maybe(&self.algorithm) }

    /// # Errors
    ///
    /// [`OptionParseError::MissingOption`] if `--coordinator` wasn't given.
    pub fn coordinator(&self) -> OptionParseResult<&str> {
        require(option_names::COORDINATOR, &self.coordinator)
    }

    #[must_use]
    pub fn maybe_coordinator(&self) -> Option<&str> { maybe(&self.coordinator) }

    /// # Errors
    ///
    /// [`OptionParseError::MissingOption`] if `--env` wasn't given.
    pub fn env(&self) -> OptionParseResult<&str> { require(option_names::ENV, &self.env) }

    #[must_use]
    pub fn maybe_env(&self) -> Option<&str> { maybe(&self.env) }

    /// # Errors
    ///
    /// [`OptionParseError::MissingOption`] if `--robot` wasn't given.
    pub fn robot(&self) -> OptionParseResult<&str> {
        require(option_names::ROBOT, &self.robot)
    }

    #[must_use]
    pub fn maybe_robot(&self) -> Option<&str> { maybe(&self.robot) }

    #[must_use]
    pub fn problem_id(&self) -> u64 { self.problem_id }

    /// Seconds, [`f64::INFINITY`] when `--time-limit` wasn't given.
    #[must_use]
    pub fn time_limit(&self) -> f64 { self.time_limit }

    /// Zero when `--discretization` wasn't given.
    #[must_use]
    pub fn discretization(&self) -> f64 { self.discretization }

    /// Parse `--start` as `T`.
    ///
    /// # Errors
    ///
    /// Any [`OptionParseError`] produced by `T`'s rule, tagged `start`.
    pub fn start<T: ParseRule>(&self) -> OptionParseResult<T> {
        parse_option(option_names::START, &self.start)
    }

    /// Parse `--goal` as `T`.
    ///
    /// # Errors
    ///
    /// Any [`OptionParseError`] produced by `T`'s rule, tagged `goal`.
    pub fn goal<T: ParseRule>(&self) -> OptionParseResult<T> {
        parse_option(option_names::GOAL, &self.goal)
    }

    /// Parse `--min` as `T`.
    ///
    /// # Errors
    ///
    /// Any [`OptionParseError`] produced by `T`'s rule, tagged `min`.
    pub fn min<T: ParseRule>(&self) -> OptionParseResult<T> {
        parse_option(option_names::MIN, &self.min)
    }

    /// Parse `--max` as `T`.
    ///
    /// # Errors
    ///
    /// Any [`OptionParseError`] produced by `T`'s rule, tagged `max`.
    pub fn max<T: ParseRule>(&self) -> OptionParseResult<T> {
        parse_option(option_names::MAX, &self.max)
    }
}
