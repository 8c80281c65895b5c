//! # Sim Command
//!
//! AI-vs-AI simulation: runs full matches without prompting, tallies
//! winners, and optionally appends one JSONL match record per match.

use std::io::Write;

use stackfish_ai::create_opponent;
use stackfish_engine::engine::Engine;
use stackfish_engine::game::Phase;
use stackfish_engine::logger::MatchLogger;

use crate::error::CliError;
use crate::ui;

/// Deterministic play can cycle once the pool is dry (the pile just moves
/// back and forth), so every match gets a step cap; matches that hit it
/// count as draws.
const MAX_STEPS: u32 = 5_000;

pub fn handle_sim_command(
    matches: u32,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if matches == 0 {
        ui::write_error(err, "matches must be >= 1")?;
        return Err(CliError::InvalidInput("matches must be >= 1".to_string()));
    }

    let base_seed = seed.unwrap_or_else(rand::random);
    writeln!(out, "sim: matches={} seed={}", matches, base_seed)?;

    let mut logger = match &output {
        Some(path) => Some(MatchLogger::create(path)?),
        None => None,
    };

    let mut wins = [0u32; 2];
    let mut draws = 0u32;

    for i in 0..matches {
        let match_seed = base_seed.wrapping_add(i as u64);
        let mut engine = Engine::new(Some(match_seed), Some(create_opponent("greedy")));
        engine.set_player(0, "North", true);
        engine.set_player(1, "South", true);
        engine.start()?;

        let mut steps = 0u32;
        while engine.state().phase != Phase::Finished && steps < MAX_STEPS {
            engine.animations_finished()?;
            engine.take_events();
            steps += 1;
        }

        if engine.state().phase != Phase::Finished {
            ui::display_warning(
                err,
                &format!("match {} hit the step cap; scoring as a draw", i + 1),
            )?;
            draws += 1;
        } else {
            match engine.state().winner() {
                Some(seat) => wins[seat as usize] += 1,
                None => draws += 1,
            }
        }

        if let Some(logger) = &mut logger {
            let match_id = logger.next_id();
            engine.history_mut().match_id = match_id;
            logger.write(engine.history())?;
        }
    }

    writeln!(
        out,
        "results: North={} South={} draws={}",
        wins[0], wins[1], draws
    )?;
    if let Some(path) = output {
        writeln!(out, "history written to {}", path)?;
    }
    Ok(())
}
