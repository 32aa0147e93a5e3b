use std::time::Instant;

use crate::vocabulary::Tier;

/// Mutable record of one play-through. Only the session engine mutates it.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub tier: Tier,
    pub queue: Vec<String>,
    pub cursor: usize,
    pub typed_buffer: String,
    pub time_remaining: u32,
    pub correct_word_count: u32,
    pub incorrect_word_count: u32,
    pub total_characters: u32,
    pub correct_characters: u32,
    pub score: u32,
    pub started_at: Instant,
    pub wpm: u32,
    pub accuracy: u32,
}

impl SessionState {
    pub fn new(tier: Tier, queue: Vec<String>, duration_secs: u32, started_at: Instant) -> Self {
        Self {
            tier,
            queue,
            cursor: 0,
            typed_buffer: String::new(),
            time_remaining: duration_secs,
            correct_word_count: 0,
            incorrect_word_count: 0,
            total_characters: 0,
            correct_characters: 0,
            score: 0,
            started_at,
            wpm: 0,
            accuracy: 100,
        }
    }

    pub fn current_word(&self) -> Option<&str> {
        self.queue.get(self.cursor).map(String::as_str)
    }

    /// Up to `count` words starting at the cursor (current word first).
    pub fn upcoming(&self, count: usize) -> Vec<String> {
        self.queue.iter().skip(self.cursor).take(count).cloned().collect()
    }

    pub fn remaining_words(&self) -> usize {
        self.queue.len().saturating_sub(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.queue.len()
    }

    pub fn words_committed(&self) -> u32 {
        self.correct_word_count + self.incorrect_word_count
    }

    pub fn elapsed_secs(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.started_at).as_secs_f64()
    }

    /// Recompute WPM and accuracy. Each value holds its previous reading
    /// when its denominator is zero.
    pub fn refresh_stats(&mut self, now: Instant) {
        let elapsed_ms = now.saturating_duration_since(self.started_at).as_millis();
        if elapsed_ms > 0 {
            let elapsed_minutes = elapsed_ms as f64 / 60_000.0;
            self.wpm = (self.correct_word_count as f64 / elapsed_minutes).round() as u32;
        }
        if self.total_characters > 0 {
            self.accuracy = (self.correct_characters as f64 / self.total_characters as f64
                * 100.0)
                .round() as u32;
        }
    }
}
