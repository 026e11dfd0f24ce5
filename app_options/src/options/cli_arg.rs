// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command line argument scanning for the motion planning front end. This only isolates
//! the raw string value of each `--name value` or `--name=value` pair. Turning those
//! strings into typed values is the job of [`crate::AppOptions`].

use clap::{Args, Parser};

// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Default, Parser)]
#[command(bin_name = "mpl-demo")]
#[command(about = "Motion planning demo. Geometric options take comma-separated numbers.")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nUSAGE:\n  {usage}\n\nVectors are written as `x,y,z`, orientations as `i,j,k,w`, and poses as\n`i,j,k,w,x,y,z`. Negative values are fine: `--min=-5,-5,-5`.\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(long, value_name = "NAME", help = "Planning algorithm to run, eg: `rrt`.")]
    pub algorithm: Option<String>,

    #[arg(
        long,
        value_name = "HOST:PORT",
        help = "Coordinator to report to when running as part of a cluster."
    )]
    pub coordinator: Option<String>,

    #[arg(
        long,
        value_name = "ID",
        default_value_t = 0,
        help = "Identifier of the problem, reported back to the coordinator."
    )]
    pub problem_id: u64,

    #[arg(long, value_name = "PATH", help = "Environment mesh.")]
    pub env: Option<String>,

    #[arg(long, value_name = "PATH", help = "Robot mesh.")]
    pub robot: Option<String>,

    #[arg(
        long,
        value_name = "VALUE",
        allow_hyphen_values = true,
        help = "Start configuration, eg: a pose `0,0,0,1,0,0,0`."
    )]
    pub start: Option<String>,

    #[arg(
        long,
        value_name = "VALUE",
        allow_hyphen_values = true,
        help = "Goal configuration, same format as --start."
    )]
    pub goal: Option<String>,

    #[arg(
        long,
        value_name = "VALUE",
        allow_hyphen_values = true,
        help = "Lower bounds of the workspace, eg: `-5,-5,-5`."
    )]
    pub min: Option<String>,

    #[arg(
        long,
        value_name = "VALUE",
        allow_hyphen_values = true,
        help = "Upper bounds of the workspace, eg: `5,5,5`."
    )]
    pub max: Option<String>,

    #[arg(
        long,
        value_name = "SECONDS",
        allow_hyphen_values = true,
        help = "Give up after this many seconds. Unbounded if not given."
    )]
    pub time_limit: Option<String>,

    #[arg(
        long,
        value_name = "VALUE",
        allow_hyphen_values = true,
        help = "Collision checking resolution. Zero if not given."
    )]
    pub discretization: Option<String>,

    #[command(flatten)]
    pub logging_options: LoggingOption,
}

#[derive(Debug, Default, Args)]
pub struct LoggingOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        short = 'v',
        help = "Log app output to stderr."
    )]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_command_is_well_formed() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_both_flag_forms() {
        let it = CLIArg::try_parse_from([
            "mpl-demo",
            "--algorithm",
            "rrt",
            "--start=1,2,3",
            "--goal",
            "4,5,6",
        ])
        .unwrap();
        assert_eq!(it.algorithm.as_deref(), Some("rrt"));
        assert_eq!(it.start.as_deref(), Some("1,2,3"));
        assert_eq!(it.goal.as_deref(), Some("4,5,6"));
        assert_eq!(it.min, None);
        assert_eq!(it.problem_id, 0);
    }

    #[test]
    fn test_values_may_start_with_a_hyphen() {
        let it = CLIArg::try_parse_from(["mpl-demo", "--min", "-5,-5,-5", "--max=5,5,5"])
            .unwrap();
        assert_eq!(it.min.as_deref(), Some("-5,-5,-5"));
        assert_eq!(it.max.as_deref(), Some("5,5,5"));
    }

    #[test]
    fn test_values_are_kept_verbatim() {
        let it = CLIArg::try_parse_from(["mpl-demo", "--start", " 1,2 ,3"]).unwrap();
        assert_eq!(it.start.as_deref(), Some(" 1,2 ,3"));
    }

    #[test]
    fn test_problem_id_is_an_integer() {
        let it = CLIArg::try_parse_from(["mpl-demo", "--problem-id", "42"]).unwrap();
        assert_eq!(it.problem_id, 42);
        assert!(CLIArg::try_parse_from(["mpl-demo", "--problem-id", "4x"]).is_err());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(CLIArg::try_parse_from(["mpl-demo", "--bogus", "1"]).is_err());
    }

    #[test]
    fn test_logging_flags() {
        let it = CLIArg::try_parse_from(["mpl-demo", "-l", "-v"]).unwrap();
        assert!(it.logging_options.enable_logging);
        assert!(it.logging_options.verbose);
    }
}
