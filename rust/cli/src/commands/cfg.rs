//! # Cfg Command
//!
//! Prints the resolved configuration and where each value came from
//! (default, file, or environment).

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            crate::ui::write_error(err, &e.to_string())?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    writeln!(out, "Configuration:")?;
    writeln!(
        out,
        "  seed        = {:<12} ({:?})",
        resolved
            .config
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unset".to_string()),
        resolved.sources.seed
    )?;
    writeln!(
        out,
        "  player_name = {:<12} ({:?})",
        resolved.config.player_name, resolved.sources.player_name
    )?;
    writeln!(
        out,
        "  opponent    = {:<12} ({:?})",
        resolved.config.opponent, resolved.sources.opponent
    )?;
    Ok(())
}
