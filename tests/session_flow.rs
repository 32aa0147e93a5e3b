use std::time::Duration;

use keyrush::session::clock::ManualClock;
use keyrush::session::{ExhaustionPolicy, Phase, SessionConfig, SessionEngine, Snapshot};
use keyrush::vocabulary::{self, Tier, VocabularyProvider};

fn engine_with(seed: u64, config: SessionConfig) -> (SessionEngine<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let engine = SessionEngine::with_clock(VocabularyProvider::with_seed(seed), config, clock.clone());
    (engine, clock)
}

fn current(snapshot: &Snapshot) -> String {
    snapshot.current_word.clone().expect("session has a current word")
}

/// Type a word one keystroke at a time, the way an input control reports it.
fn type_word(engine: &mut SessionEngine<ManualClock>, word: &str) -> Snapshot {
    let mut text = String::new();
    let mut last = None;
    for ch in word.chars().chain(std::iter::once(' ')) {
        text.push(ch);
        last = engine.on_keystroke(&text);
    }
    last.expect("engine is running").snapshot
}

#[test]
fn full_minute_with_mixed_input() {
    let (mut engine, clock) = engine_with(21, SessionConfig::default());
    let mut snapshot = engine.start(Tier::Medium);
    assert_eq!(snapshot.time_remaining, 60);
    assert_eq!(snapshot.upcoming_words.len(), 15);

    // Ten words over thirty seconds: seven right, three with the last
    // letter wrong.
    let mut expected_total = 0u32;
    let mut expected_correct_chars = 0u32;
    for i in 0..10 {
        let word = current(&snapshot);
        let len = word.chars().count() as u32;
        expected_total += len;
        let typed = if i % 3 == 2 {
            expected_correct_chars += len - 1;
            let mut w: String = word.chars().take(word.chars().count() - 1).collect();
            w.push('#');
            w
        } else {
            expected_correct_chars += len;
            word
        };
        clock.advance(Duration::from_secs(3));
        snapshot = type_word(&mut engine, &typed);
    }
    let state = engine.state().unwrap();
    assert_eq!(state.correct_word_count, 7);
    assert_eq!(state.incorrect_word_count, 3);
    assert_eq!(state.total_characters, expected_total);
    assert_eq!(state.correct_characters, expected_correct_chars);
    assert_eq!(snapshot.score, 7 * 15);

    // 7 words / 0.5 min
    assert_eq!(snapshot.wpm, 14);
    let accuracy =
        (f64::from(expected_correct_chars) / f64::from(expected_total) * 100.0).round() as u32;
    assert_eq!(snapshot.accuracy, accuracy);

    let mut finished = None;
    while finished.is_none() {
        clock.advance(Duration::from_secs(1));
        if let Some(update) = engine.poll_timer() {
            finished = update.finished;
        }
    }
    let result = finished.unwrap();
    assert_eq!(engine.phase(), Phase::Ended);
    assert_eq!(result.correct_word_count, 7);
    assert_eq!(result.score, 105);
    // Final WPM is recomputed on the last tick: 7 words / 1 min.
    assert_eq!(result.wpm, 7);
    assert!(result.qualifies_for_leaderboard());

    assert!(engine.on_keystroke("anything ").is_none());
    assert!(engine.poll_timer().is_none());
}

#[test]
fn late_poll_catches_up_in_one_call() {
    let (mut engine, clock) = engine_with(4, SessionConfig::default());
    engine.start(Tier::Easy);
    clock.advance(Duration::from_millis(10_500));
    let update = engine.poll_timer().unwrap();
    assert_eq!(update.snapshot.time_remaining, 50);
    assert!(update.finished.is_none());

    clock.advance(Duration::from_secs(300));
    let update = engine.poll_timer().unwrap();
    assert_eq!(update.snapshot.time_remaining, 0);
    assert!(update.finished.is_some());
}

#[test]
fn restart_mid_session_discards_previous_state() {
    let (mut engine, clock) = engine_with(5, SessionConfig::default());
    let snapshot = engine.start(Tier::Hard);
    type_word(&mut engine, &current(&snapshot));
    clock.advance(Duration::from_secs(20));
    engine.poll_timer();

    let fresh = engine.start(Tier::Easy);
    assert_eq!(fresh.time_remaining, 60);
    assert_eq!(fresh.score, 0);
    assert_eq!(fresh.accuracy, 100);
    assert!(vocabulary::words(Tier::Easy).contains(&current(&fresh).as_str()));

    // One countdown only: a second's worth of time is one tick.
    clock.advance(Duration::from_secs(1));
    assert_eq!(engine.poll_timer().unwrap().snapshot.time_remaining, 59);
}

#[test]
fn short_sessions_and_small_previews_are_configurable() {
    let config = SessionConfig {
        duration_secs: 5,
        preview_words: 3,
        exhaustion_policy: ExhaustionPolicy::Reshuffle,
    };
    let (mut engine, clock) = engine_with(8, config);
    let snapshot = engine.start(Tier::Medium);
    assert_eq!(snapshot.upcoming_words.len(), 3);

    clock.advance(Duration::from_secs(5));
    let update = engine.poll_timer().unwrap();
    assert!(update.finished.is_some());
    assert!(!update.finished.unwrap().qualifies_for_leaderboard());
}

#[test]
fn reshuffle_keeps_consumed_prefix_stable() {
    let (mut engine, _clock) = engine_with(13, SessionConfig::default());
    let mut snapshot = engine.start(Tier::Easy);
    let mut consumed = Vec::new();
    for _ in 0..75 {
        let word = current(&snapshot);
        consumed.push(word.clone());
        snapshot = type_word(&mut engine, &word);
    }
    let state = engine.state().unwrap();
    assert_eq!(state.cursor, 75);
    assert_eq!(&state.queue[..75], consumed.as_slice());
    assert_eq!(snapshot.upcoming_words.len(), 15);
}
