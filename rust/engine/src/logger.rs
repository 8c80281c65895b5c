use serde::{Deserialize, Serialize};

use crate::cards::Rank;

/// One committed action inside a turn.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnAction {
    /// A same-rank group accepted onto the stack.
    Played {
        rank: Rank,
        count: usize,
        burned: bool,
    },
    /// The active player absorbed the live stack.
    TookPile { count: usize },
}

/// Records a single committed action and who took it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Seat index (0 or 1)
    pub player_id: u8,
    pub action: TurnAction,
}

/// Complete record of one match: every committed action plus the outcome.
/// Serialized to JSONL format for match history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique identifier for this match (format: YYYYMMDD-NNNNNN)
    pub match_id: String,
    /// RNG seed used for the shuffle (enables deterministic replay)
    pub seed: Option<u64>,
    /// Chronological list of committed actions
    pub turns: Vec<TurnRecord>,
    /// Winning seat, if the match produced one
    pub winner: Option<u8>,
    /// Timestamp when the match was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl MatchRecord {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            match_id: String::new(),
            seed,
            turns: Vec::new(),
            winner: None,
            ts: None,
        }
    }

    pub fn record(&mut self, player_id: u8, action: TurnAction) {
        self.turns.push(TurnRecord { player_id, action });
    }
}

pub fn format_match_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends match records as JSONL, one match per line.
pub struct MatchLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl MatchLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_match_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &MatchRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_ids_are_date_prefixed_and_sequential() {
        let mut logger = MatchLogger::with_seq_for_test("20250101");
        assert_eq!(logger.next_id(), "20250101-000001");
        assert_eq!(logger.next_id(), "20250101-000002");
    }

    #[test]
    fn record_round_trips_through_json() {
        let mut rec = MatchRecord::new(Some(7));
        rec.match_id = format_match_id("20250101", 1);
        rec.record(
            0,
            TurnAction::Played {
                rank: Rank::Queen,
                count: 2,
                burned: false,
            },
        );
        rec.record(1, TurnAction::TookPile { count: 5 });
        rec.winner = Some(0);

        let line = serde_json::to_string(&rec).unwrap();
        let back: MatchRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(back, rec);
    }
}
