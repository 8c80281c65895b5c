//! Command handler modules for the stackfish CLI.
//!
//! Each subcommand lives in its own module with the same pattern: a public
//! `handle_*_command` function taking injected output streams (`&mut dyn
//! Write`) and propagating failures as [`crate::error::CliError`].

mod cfg;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
