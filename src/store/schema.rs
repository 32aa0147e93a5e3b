use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::result::SessionResult;
use crate::vocabulary::Tier;

/// Storage key holding the whole leaderboard as one JSON array.
pub const LEADERBOARD_KEY: &str = "typingGameScores";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub player_name: String,
    pub wpm: u32,
    pub accuracy: u32,
    pub score: u32,
    pub difficulty: Tier,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl LeaderboardEntry {
    pub fn new(player_name: &str, result: &SessionResult, at: DateTime<Utc>) -> Self {
        Self {
            id: at.timestamp_millis().to_string(),
            player_name: player_name.to_string(),
            wpm: result.wpm,
            accuracy: result.accuracy.min(100),
            score: result.score,
            difficulty: result.tier,
            timestamp: at,
        }
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix on write; any
/// RFC 3339 string on read.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}
