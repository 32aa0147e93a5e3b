use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::{Duration, TimeZone, Utc};
use keyrush::session::clock::ManualClock;
use keyrush::session::input::positional_matches;
use keyrush::session::{SessionConfig, SessionEngine, SessionResult};
use keyrush::store::schema::LeaderboardEntry;
use keyrush::store::{Leaderboard, MemoryKeyValueStore};
use keyrush::vocabulary::{Tier, VocabularyProvider};

fn bench_commit_path(c: &mut Criterion) {
    c.bench_function("type and commit 200 words (reshuffle)", |b| {
        b.iter(|| {
            let clock = ManualClock::new();
            let mut engine = SessionEngine::with_clock(
                VocabularyProvider::with_seed(7),
                SessionConfig::default(),
                clock,
            );
            let mut snapshot = engine.start(Tier::Hard);
            for i in 0..200 {
                let mut typed = snapshot.current_word.clone().unwrap_or_default();
                if i % 5 == 0 {
                    typed.pop();
                }
                for end in 1..=typed.len() {
                    engine.on_keystroke(black_box(&typed[..end]));
                }
                typed.push(' ');
                if let Some(update) = engine.on_keystroke(black_box(&typed)) {
                    snapshot = update.snapshot;
                }
            }
            snapshot
        })
    });

    c.bench_function("positional_matches (hard words)", |b| {
        b.iter(|| positional_matches(black_box("implemantation"), black_box("implementation")))
    });
}

fn bench_leaderboard_query(c: &mut Criterion) {
    let mut board = Leaderboard::new(MemoryKeyValueStore::new());
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    for i in 0..1000u32 {
        let tier = Tier::ALL[(i % 3) as usize];
        let result = SessionResult {
            tier,
            wpm: i % 120,
            accuracy: 80 + i % 21,
            correct_word_count: i % 120,
            incorrect_word_count: i % 9,
            score: (i * 7919) % 3000,
        };
        let at = base + Duration::seconds(i64::from(i));
        board
            .record(LeaderboardEntry::new(&format!("player{i}"), &result, at))
            .unwrap();
    }

    c.bench_function("leaderboard query top 10 of 1000", |b| {
        b.iter(|| board.query(black_box(Tier::Medium)))
    });
}

criterion_group!(benches, bench_commit_path, bench_leaderboard_query);
criterion_main!(benches);
