//! # Play Command
//!
//! Interactive match against the AI. The human sits at seat 0 and drives the
//! engine through the same select/confirm/take-pile surface any UI would
//! use; the AI seat resolves itself between prompts. Validator rejections
//! are surfaced verbatim and the prompt replays — a refused play costs the
//! human nothing.

use std::io::{BufRead, Write};

use stackfish_ai::create_opponent;
use stackfish_engine::cards::Rank;
use stackfish_engine::engine::Engine;
use stackfish_engine::events::TableEvent;
use stackfish_engine::game::{MatchState, Phase};
use stackfish_engine::player::PlaySource;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_books, format_hand, format_stack};
use crate::ui;

/// What the human typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
enum PlayerCommand {
    Play(Rank),
    Take,
    Quit,
    Help,
}

pub fn handle_play_command(
    seed: Option<u64>,
    name: Option<String>,
    opponent: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let opponent_kind = opponent.unwrap_or(cfg.opponent);
    if !matches!(opponent_kind.as_str(), "greedy" | "random") {
        ui::write_error(err, &format!("unknown opponent '{}'", opponent_kind))?;
        return Err(CliError::InvalidInput(format!(
            "unknown opponent '{}'",
            opponent_kind
        )));
    }
    let player_name = name.unwrap_or(cfg.player_name);

    writeln!(out, "play: seed={} opponent={}", seed, opponent_kind)?;

    let mut engine = Engine::new(Some(seed), Some(create_opponent(&opponent_kind)));
    engine.set_player(0, &player_name, false);
    engine.start()?;

    loop {
        flush_events(&mut engine, out)?;

        match engine.state().phase {
            Phase::Finished => {
                print_result(engine.state(), out)?;
                return Ok(());
            }
            Phase::SelectingCards if engine.state().active_player().is_ai() => {
                engine.animations_finished()?;
                continue;
            }
            _ => {}
        }

        render_table(engine.state(), out)?;
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            writeln!(out, "Goodbye.")?;
            return Ok(());
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match parse_command(input) {
            Ok(PlayerCommand::Quit) => {
                writeln!(out, "Goodbye.")?;
                return Ok(());
            }
            Ok(PlayerCommand::Help) => print_help(out)?,
            Ok(PlayerCommand::Take) => {
                engine.take_pile()?;
            }
            Ok(PlayerCommand::Play(rank)) => {
                let cards: Vec<_> = engine
                    .state()
                    .active_player()
                    .source_cards()
                    .into_iter()
                    .filter(|c| c.rank() == rank)
                    .collect();
                if cards.is_empty() {
                    writeln!(out, "You have no {}s to play.", rank)?;
                    continue;
                }
                engine.select_cards(&cards)?;
                engine.confirm()?;
            }
            Err(msg) => {
                writeln!(out, "{}", msg)?;
            }
        }
    }
}

fn flush_events(engine: &mut Engine, out: &mut dyn Write) -> std::io::Result<()> {
    for event in engine.take_events() {
        match event {
            TableEvent::Message(text) => writeln!(out, "{}", text)?,
            TableEvent::BookCompleted { player, rank } => {
                writeln!(out, "Seat {} completes a book of {}s!", player, rank)?
            }
            // Card moves drive animations, not terminal text.
            _ => {}
        }
    }
    Ok(())
}

fn render_table(state: &MatchState, out: &mut dyn Write) -> std::io::Result<()> {
    let me = &state.players[0];
    let bot = &state.players[1];

    writeln!(out)?;
    writeln!(out, "{}", format_stack(&state.stack))?;
    writeln!(out, "Pool: {} cards", state.pool.len())?;
    writeln!(
        out,
        "{}: {} cards in hand | {}",
        bot.name(),
        bot.hand().len(),
        format_books(bot)
    )?;
    writeln!(out, "Your hand: {}", format_hand(me.hand()))?;
    writeln!(out, "Your {}", format_books(me))?;
    match me.play_source() {
        PlaySource::VisibleBooks => {
            writeln!(out, "Hand empty - you play from your face-up books now.")?
        }
        PlaySource::HiddenBooks => {
            writeln!(out, "Books spent - you play from your face-down books now.")?
        }
        _ => {}
    }
    Ok(())
}

fn print_result(state: &MatchState, out: &mut dyn Write) -> std::io::Result<()> {
    let me = &state.players[0];
    let bot = &state.players[1];
    writeln!(
        out,
        "Final books: {} {} - {} {}",
        me.name(),
        me.book_count(),
        bot.name(),
        bot.book_count()
    )?;
    match state.winner() {
        Some(0) => writeln!(out, "You WON!"),
        Some(_) => writeln!(out, "You LOST!"),
        None => writeln!(out, "Draw."),
    }
}

fn print_help(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  play <rank>  throw every card of that rank (e.g. 'play 7', 'play queen')")?;
    writeln!(out, "  <rank>       shorthand for play")?;
    writeln!(out, "  take         take the whole pile into your hand")?;
    writeln!(out, "  quit         leave the match")?;
    Ok(())
}

fn parse_command(input: &str) -> Result<PlayerCommand, String> {
    let lowered = input.to_ascii_lowercase();
    let mut tokens = lowered.split_whitespace();
    let first = tokens.next().unwrap_or_default();

    match first {
        "q" | "quit" | "exit" => return Ok(PlayerCommand::Quit),
        "t" | "take" => return Ok(PlayerCommand::Take),
        "h" | "help" | "?" => return Ok(PlayerCommand::Help),
        _ => {}
    }

    let rank_token = if first == "play" {
        tokens.next().ok_or("Play what? Try 'play 7'.")?
    } else {
        first
    };
    parse_rank(rank_token)
        .map(PlayerCommand::Play)
        .ok_or_else(|| format!("Unrecognized command '{}'. Type 'help'.", input))
}

fn parse_rank(token: &str) -> Option<Rank> {
    let rank = match token {
        "a" | "ace" | "1" => Rank::Ace,
        "2" => Rank::Two,
        "3" => Rank::Three,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "10" => Rank::Ten,
        "j" | "jack" | "11" => Rank::Jack,
        "queen" | "12" => Rank::Queen,
        "k" | "king" | "13" => Rank::King,
        _ => return None,
    };
    Some(rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rank_plays() {
        assert_eq!(parse_command("play 7"), Ok(PlayerCommand::Play(Rank::Seven)));
        assert_eq!(parse_command("queen"), Ok(PlayerCommand::Play(Rank::Queen)));
        assert_eq!(parse_command("PLAY ACE"), Ok(PlayerCommand::Play(Rank::Ace)));
        assert_eq!(parse_command("10"), Ok(PlayerCommand::Play(Rank::Ten)));
    }

    #[test]
    fn q_is_quit_not_queen() {
        assert_eq!(parse_command("q"), Ok(PlayerCommand::Quit));
        assert_eq!(parse_command("12"), Ok(PlayerCommand::Play(Rank::Queen)));
    }

    #[test]
    fn take_and_help_parse() {
        assert_eq!(parse_command("take"), Ok(PlayerCommand::Take));
        assert_eq!(parse_command("?"), Ok(PlayerCommand::Help));
    }

    #[test]
    fn nonsense_is_reported() {
        assert!(parse_command("flip the table").is_err());
    }
}
