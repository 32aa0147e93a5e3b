use chrono::Utc;

use crate::session::result::SessionResult;
use crate::store::StoreError;
use crate::store::kv_store::KeyValueStore;
use crate::store::schema::{LEADERBOARD_KEY, LeaderboardEntry};
use crate::vocabulary::Tier;

pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Append-only list of finished runs, ranked per tier on read.
pub struct Leaderboard<S: KeyValueStore> {
    store: S,
    limit: usize,
}

impl<S: KeyValueStore> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Self::with_limit(store, DEFAULT_DISPLAY_LIMIT)
    }

    pub fn with_limit(store: S, limit: usize) -> Self {
        Self { store, limit }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Every stored entry in insertion order. A missing or blank value is
    /// an empty board; anything else that fails to parse is corrupt.
    pub fn load_all(&self) -> Result<Vec<LeaderboardEntry>, StoreError> {
        match self.store.get(LEADERBOARD_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                log::warn!("leaderboard under '{LEADERBOARD_KEY}' does not parse: {e}");
                StoreError::Corrupt {
                    key: LEADERBOARD_KEY.to_string(),
                }
            }),
        }
    }

    pub fn record(&mut self, entry: LeaderboardEntry) -> Result<(), StoreError> {
        let mut entries = self.load_all()?;
        entries.push(entry);
        let json = serde_json::to_string(&entries)?;
        self.store.set(LEADERBOARD_KEY, &json).inspect_err(|e| {
            log::warn!("could not write leaderboard: {e}");
        })
    }

    /// Build an entry for a finished session and record it.
    pub fn submit(
        &mut self,
        player_name: &str,
        result: &SessionResult,
    ) -> Result<LeaderboardEntry, StoreError> {
        let name = player_name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyPlayerName);
        }
        let entry = LeaderboardEntry::new(name, result, Utc::now());
        self.record(entry.clone())?;
        log::info!(
            "recorded score {} for '{}' on {}",
            entry.score,
            entry.player_name,
            entry.difficulty
        );
        Ok(entry)
    }

    /// Top entries for one tier, highest score first, ties in the order
    /// they were recorded. Empty when storage cannot be read.
    pub fn query(&self, tier: Tier) -> Vec<LeaderboardEntry> {
        let entries = match self.load_all() {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("leaderboard unavailable, showing empty board: {e}");
                return Vec::new();
            }
        };

        let mut ranked: Vec<LeaderboardEntry> = entries
            .into_iter()
            .filter(|e| e.difficulty == tier)
            .collect();
        // stable
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(self.limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::store::kv_store::MemoryKeyValueStore;

    fn entry(name: &str, tier: Tier, score: u32, seq: i64) -> LeaderboardEntry {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(seq);
        let result = SessionResult {
            tier,
            wpm: score / 10,
            accuracy: 90,
            correct_word_count: score / 10,
            incorrect_word_count: 0,
            score,
        };
        LeaderboardEntry::new(name, &result, at)
    }

    fn board() -> Leaderboard<MemoryKeyValueStore> {
        Leaderboard::new(MemoryKeyValueStore::new())
    }

    #[test]
    fn test_empty_store_queries_empty() {
        let board = board();
        assert!(board.query(Tier::Easy).is_empty());
    }

    #[test]
    fn test_query_truncates_to_top_ten_descending() {
        let mut board = board();
        for i in 0..12 {
            board
                .record(entry(&format!("p{i}"), Tier::Easy, (i as u32 * 37) % 100, i))
                .unwrap();
        }
        let top = board.query(Tier::Easy);
        assert_eq!(top.len(), 10);
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(board.load_all().unwrap().len(), 12);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut board = board();
        board.record(entry("first", Tier::Medium, 50, 0)).unwrap();
        board.record(entry("top", Tier::Medium, 90, 1)).unwrap();
        board.record(entry("second", Tier::Medium, 50, 2)).unwrap();
        board.record(entry("third", Tier::Medium, 50, 3)).unwrap();

        let names: Vec<String> = board
            .query(Tier::Medium)
            .into_iter()
            .map(|e| e.player_name)
            .collect();
        assert_eq!(names, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_tiers_are_isolated() {
        let mut board = board();
        board.record(entry("h", Tier::Hard, 500, 0)).unwrap();
        board.record(entry("e", Tier::Easy, 10, 1)).unwrap();

        let easy = board.query(Tier::Easy);
        assert_eq!(easy.len(), 1);
        assert!(easy.iter().all(|e| e.difficulty == Tier::Easy));
        assert!(board.query(Tier::Medium).is_empty());
    }

    #[test]
    fn test_record_keeps_duplicates() {
        let mut board = board();
        let e = entry("same", Tier::Easy, 10, 0);
        board.record(e.clone()).unwrap();
        board.record(e).unwrap();
        assert_eq!(board.query(Tier::Easy).len(), 2);
    }

    #[test]
    fn test_unavailable_storage_degrades() {
        let mut board = Leaderboard::new(MemoryKeyValueStore::unavailable());
        assert!(board.query(Tier::Easy).is_empty());
        let err = board.record(entry("x", Tier::Easy, 10, 0)).unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test]
    fn test_corrupt_value_is_not_overwritten() {
        let mut store = MemoryKeyValueStore::new();
        store.set(LEADERBOARD_KEY, "{not json").unwrap();
        let mut board = Leaderboard::new(store);

        assert!(board.query(Tier::Easy).is_empty());
        let err = board.record(entry("x", Tier::Easy, 10, 0)).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert_eq!(
            board.store().get(LEADERBOARD_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_blank_value_reads_as_empty() {
        let mut store = MemoryKeyValueStore::new();
        store.set(LEADERBOARD_KEY, "").unwrap();
        let mut board = Leaderboard::new(store);
        assert!(board.query(Tier::Hard).is_empty());
        board.record(entry("x", Tier::Hard, 25, 0)).unwrap();
        assert_eq!(board.query(Tier::Hard).len(), 1);
    }

    #[test]
    fn test_submit_trims_and_rejects_empty_names() {
        let mut board = board();
        let result = SessionResult {
            tier: Tier::Easy,
            wpm: 30,
            accuracy: 95,
            correct_word_count: 30,
            incorrect_word_count: 1,
            score: 300,
        };
        assert!(matches!(
            board.submit("   ", &result),
            Err(StoreError::EmptyPlayerName)
        ));
        let saved = board.submit("  ada ", &result).unwrap();
        assert_eq!(saved.player_name, "ada");
        assert_eq!(board.query(Tier::Easy), vec![saved]);
    }

    #[test]
    fn test_custom_limit() {
        let mut board = Leaderboard::with_limit(MemoryKeyValueStore::new(), 3);
        for i in 0..5 {
            board.record(entry("p", Tier::Easy, i * 10, i as i64)).unwrap();
        }
        let scores: Vec<u32> = board.query(Tier::Easy).iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![40, 30, 20]);
    }
}
