//! # Stackfish CLI Library
//!
//! Command-line interface for the stackfish card table. Exposes subcommands
//! for playing against the AI, running AI-vs-AI simulations, and inspecting
//! configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["stackfish", "sim", "--matches", "1", "--seed", "7"];
//! let code = stackfish_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive match against the AI
//! - `sim`: Run AI-vs-AI simulations and record match histories
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod ui;

use cli::{Commands, StackfishCli};
use commands::{handle_cfg_command, handle_play_command, handle_sim_command};
pub use error::CliError;

/// Parse command-line arguments and dispatch to the matching subcommand.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = StackfishCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: stackfish <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Cfg => report(handle_cfg_command(out, err), err),
            Commands::Play {
                seed,
                name,
                opponent,
            } => {
                // Use stdin for real input (supports both TTY and piped stdin)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                report(
                    handle_play_command(seed, name, opponent, out, err, &mut stdin_lock),
                    err,
                )
            }
            Commands::Sim {
                matches,
                seed,
                output,
            } => report(handle_sim_command(matches, seed, output, out, err), err),
        },
    }
}

fn report(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if writeln!(err, "Error: {}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cfg_command_dispatch() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(vec!["stackfish", "cfg"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Configuration"));
    }

    #[test]
    fn unknown_command_exits_2_with_usage() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(vec!["stackfish", "juggle"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);

        let stderr = String::from_utf8(err).unwrap();
        assert!(stderr.contains("Commands:"));
    }

    #[test]
    fn help_prints_to_stdout_and_exits_0() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(vec!["stackfish", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(!out.is_empty());
    }

    #[test]
    fn sim_rejects_zero_matches() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(
            vec!["stackfish", "sim", "--matches", "0", "--seed", "1"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::ERROR);
    }
}
