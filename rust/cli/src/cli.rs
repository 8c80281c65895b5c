//! Command-line argument definitions for the stackfish binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "stackfish", version, about = "Stackfish card table")]
pub struct StackfishCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive match against the AI
    Play {
        /// RNG seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Display name for the human seat
        #[arg(long)]
        name: Option<String>,
        /// Opponent strategy (greedy or random)
        #[arg(long)]
        opponent: Option<String>,
    },
    /// Simulate AI-vs-AI matches
    Sim {
        /// Number of matches to run
        #[arg(long, default_value_t = 1)]
        matches: u32,
        /// Base RNG seed; match i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        /// Write JSONL match records to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
