use bincode::Options;
use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::errors::GameError;
use crate::game::MatchState;

/// Bump when the blob layout changes; decoders refuse anything else.
pub const FORMAT_VERSION: u32 = 1;

/// The wire container. bincode writes explicit lengths ahead of every
/// variable-length section, so truncated or malformed input fails the decode
/// instead of reading out of bounds.
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotBlob {
    version: u32,
    state: MatchState,
}

fn codec() -> impl Options {
    // Fixed-width integers, trailing bytes rejected.
    bincode::DefaultOptions::new().with_fixint_encoding()
}

/// Encode the authoritative state into one opaque blob.
pub fn encode_state(state: &MatchState) -> Result<Vec<u8>, GameError> {
    codec()
        .serialize(&SnapshotBlob {
            version: FORMAT_VERSION,
            state: state.clone(),
        })
        .map_err(|e| GameError::CorruptState(e.to_string()))
}

/// Decode a blob and check the structural invariants before handing the
/// state out. Anything wrong with the bytes is `CorruptState`; a state that
/// names a seat outside the table is `PlayerNotFound`.
pub fn decode_state(bytes: &[u8]) -> Result<MatchState, GameError> {
    let blob: SnapshotBlob = codec()
        .deserialize(bytes)
        .map_err(|e| GameError::CorruptState(e.to_string()))?;
    if blob.version != FORMAT_VERSION {
        return Err(GameError::CorruptState(format!(
            "snapshot version {} (expected {})",
            blob.version, FORMAT_VERSION
        )));
    }
    blob.state.validate()?;
    Ok(blob.state)
}

/// Small-payload notifications exchanged alongside snapshots, mirroring the
/// remote room events of the original table (rank picked, opponent pressed
/// confirm, fresh snapshot available).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteEvent {
    StateChanged,
    RankSelected(Rank),
    OpponentConfirmed,
}

/// Authoritative side of the snapshot-replace synchronization.
///
/// The host is the only actor that mutates the match; after every committed
/// turn it publishes a fresh blob for the transport collaborator to deliver.
/// There is no retry logic here: a dead transport is escalated, not worked
/// around.
#[derive(Debug, Default)]
pub struct SyncHost {
    published: u64,
}

impl SyncHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `state` for publication. The state is validated first so a
    /// host bug cannot poison every peer.
    pub fn publish(&mut self, state: &MatchState) -> Result<Vec<u8>, GameError> {
        state.validate()?;
        let blob = encode_state(state)?;
        self.published += 1;
        Ok(blob)
    }

    /// Number of snapshots published so far.
    pub fn published(&self) -> u64 {
        self.published
    }
}

/// Follower side: holds the local replica and replaces it wholesale on every
/// received snapshot. Last writer wins — there is deliberately no merging or
/// conflict resolution, because only the host ever writes.
#[derive(Debug, Default)]
pub struct SyncPeer {
    replica: Option<MatchState>,
}

impl SyncPeer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and adopt a received snapshot, returning the fresh replica.
    /// On error the previous replica is kept untouched.
    pub fn on_state_received(&mut self, blob: &[u8]) -> Result<&MatchState, GameError> {
        let state = decode_state(blob)?;
        Ok(self.replica.insert(state))
    }

    pub fn replica(&self) -> Option<&MatchState> {
        self.replica.as_ref()
    }
}
