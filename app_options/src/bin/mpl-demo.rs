// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reads a motion planning problem from the command line and prints it back, fully
//! typed. Run with `--help` to see the options.

use clap::Parser;
use mpl_app_options::{AppOptions, CLIArg, try_initialize_logging_global};
use nalgebra::{Quaternion, Vector3};

/// Orientation followed by position, written as `i,j,k,w,x,y,z`.
type Pose = (Quaternion<f64>, Vector3<f64>);

const ABSENT: &str = "(none)";

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    try_initialize_logging_global(&cli_arg.logging_options)?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    let app_options = AppOptions::try_from(cli_arg)?;

    let algorithm = app_options.algorithm()?;
    let start = app_options.start::<Option<Pose>>()?;
    let goal = app_options.goal::<Option<Pose>>()?;
    let min = app_options.min::<Option<Vector3<f64>>>()?;
    let max = app_options.max::<Option<Vector3<f64>>>()?;

    println!("algorithm: {algorithm}");
    println!(
        "coordinator: {}",
        app_options.maybe_coordinator().unwrap_or(ABSENT)
    );
    println!("problem id: {}", app_options.problem_id());
    println!("env: {}", app_options.maybe_env().unwrap_or(ABSENT));
    println!("robot: {}", app_options.maybe_robot().unwrap_or(ABSENT));
    println!("time limit: {}", app_options.time_limit());
    println!("discretization: {}", app_options.discretization());
    println!("start: {}", render(start.as_ref(), render_pose));
    println!("goal: {}", render(goal.as_ref(), render_pose));
    println!("min: {}", render(min.as_ref(), render_vector));
    println!("max: {}", render(max.as_ref(), render_vector));

    Ok(())
}

fn render<T>(maybe_value: Option<&T>, render_fn: fn(&T) -> String) -> String {
    maybe_value.map_or_else(|| ABSENT.to_string(), render_fn)
}

fn render_pose((orientation, position): &Pose) -> String {
    format!(
        "orientation {} position {}",
        join_components(orientation.coords.iter().copied()),
        render_vector(position)
    )
}

fn render_vector(vector: &Vector3<f64>) -> String {
    join_components(vector.iter().copied())
}

fn join_components(components: impl IntoIterator<Item = f64>) -> String {
    let joined = components
        .into_iter()
        .map(|it| it.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
