pub mod kv_store;
pub mod leaderboard;
pub mod schema;

use thiserror::Error;

pub use kv_store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use leaderboard::Leaderboard;
pub use schema::LeaderboardEntry;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode leaderboard: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("stored value under '{key}' is not a valid leaderboard")]
    Corrupt { key: String },
    #[error("please enter your name")]
    EmptyPlayerName,
}
