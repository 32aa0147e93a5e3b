use serde::{Deserialize, Serialize};

use crate::session::input::CommitEvent;
use crate::session::state::SessionState;
use crate::vocabulary::Tier;

/// Read-only projection of the running session, for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub time_remaining: u32,
    pub wpm: u32,
    pub accuracy: u32,
    pub score: u32,
    pub current_word: Option<String>,
    pub typed_buffer: String,
    /// Current word first, then the words after it.
    pub upcoming_words: Vec<String>,
}

impl Snapshot {
    pub fn from_state(state: &SessionState, preview_words: usize) -> Self {
        Self {
            time_remaining: state.time_remaining,
            wpm: state.wpm,
            accuracy: state.accuracy,
            score: state.score,
            current_word: state.current_word().map(str::to_string),
            typed_buffer: state.typed_buffer.clone(),
            upcoming_words: state.upcoming(preview_words),
        }
    }
}

/// Frozen outcome of a finished session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub tier: Tier,
    pub wpm: u32,
    pub accuracy: u32,
    pub correct_word_count: u32,
    pub incorrect_word_count: u32,
    pub score: u32,
}

impl SessionResult {
    pub fn from_state(state: &SessionState) -> Self {
        Self {
            tier: state.tier,
            wpm: state.wpm,
            accuracy: state.accuracy,
            correct_word_count: state.correct_word_count,
            incorrect_word_count: state.incorrect_word_count,
            score: state.score,
        }
    }

    pub fn qualifies_for_leaderboard(&self) -> bool {
        self.correct_word_count > 0
    }
}

/// What a mutating engine call publishes.
#[derive(Clone, Debug)]
pub struct Update {
    pub snapshot: Snapshot,
    pub commit: Option<CommitEvent>,
    /// Set only by the call that ended the session.
    pub finished: Option<SessionResult>,
}
