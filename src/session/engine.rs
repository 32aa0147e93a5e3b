use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::clock::{Clock, SystemClock};
use crate::session::input;
use crate::session::result::{SessionResult, Snapshot, Update};
use crate::session::state::SessionState;
use crate::session::timer::Countdown;
use crate::vocabulary::{Tier, VocabularyProvider};

pub const DEFAULT_SESSION_SECS: u32 = 60;
pub const DEFAULT_PREVIEW_WORDS: usize = 15;
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// What happens when the typist reaches the end of the word queue before
/// the countdown does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// Append a fresh permutation of the tier list before the preview
    /// runs dry. Consumed words are never touched.
    #[default]
    Reshuffle,
    /// End the session as soon as the last word is committed.
    EndSession,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub duration_secs: u32,
    pub preview_words: usize,
    pub exhaustion_policy: ExhaustionPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_SESSION_SECS,
            preview_words: DEFAULT_PREVIEW_WORDS,
            exhaustion_policy: ExhaustionPolicy::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Ended,
}

/// Drives one session at a time: Idle -> Running -> Ended. Every mutating
/// call returns the snapshot it produced; calls outside Running are no-ops.
pub struct SessionEngine<C: Clock = SystemClock> {
    provider: VocabularyProvider,
    clock: C,
    config: SessionConfig,
    countdown: Countdown,
    phase: Phase,
    state: Option<SessionState>,
    result: Option<SessionResult>,
}

impl SessionEngine<SystemClock> {
    pub fn new(provider: VocabularyProvider, config: SessionConfig) -> Self {
        Self::with_clock(provider, config, SystemClock)
    }
}

impl<C: Clock> SessionEngine<C> {
    pub fn with_clock(provider: VocabularyProvider, config: SessionConfig, clock: C) -> Self {
        Self {
            provider,
            clock,
            config,
            countdown: Countdown::new(TICK_PERIOD),
            phase: Phase::Idle,
            state: None,
            result: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    pub fn result(&self) -> Option<&SessionResult> {
        self.result.as_ref()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn timer_armed(&self) -> bool {
        self.countdown.is_armed()
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.state
            .as_ref()
            .map(|state| Snapshot::from_state(state, self.config.preview_words))
    }

    /// Begin a fresh session, replacing whatever ran before.
    pub fn start(&mut self, tier: Tier) -> Snapshot {
        self.cancel_timer();

        let now = self.clock.now();
        let queue = self.provider.load_queue(tier);
        let state = SessionState::new(tier, queue, self.config.duration_secs, now);

        self.state = Some(state);
        self.result = None;
        self.phase = Phase::Running;
        self.top_up_queue();
        self.countdown.arm(now);

        log::info!(
            "session started: tier={tier} duration={}s",
            self.config.duration_secs
        );
        self.current_snapshot()
    }

    pub fn cancel_timer(&mut self) {
        self.countdown.cancel();
    }

    /// Drop the running session without producing a result.
    pub fn abandon(&mut self) {
        self.cancel_timer();
        if self.phase == Phase::Running {
            log::info!("session abandoned");
        }
        self.state = None;
        self.result = None;
        self.phase = Phase::Idle;
    }

    /// One elapsed second.
    pub fn tick(&mut self) -> Option<Update> {
        if self.phase != Phase::Running {
            return None;
        }
        let now = self.clock.now();
        let state = self.state.as_mut()?;
        state.time_remaining = state.time_remaining.saturating_sub(1);
        state.refresh_stats(now);

        let finished = if state.time_remaining == 0 {
            Some(self.end())
        } else {
            None
        };

        Some(Update {
            snapshot: self.current_snapshot(),
            commit: None,
            finished,
        })
    }

    /// Run every tick the countdown owes since the last poll.
    pub fn poll_timer(&mut self) -> Option<Update> {
        let due = self.countdown.poll(self.clock.now());
        let mut last = None;
        for _ in 0..due {
            match self.tick() {
                Some(update) => {
                    let done = update.finished.is_some();
                    last = Some(update);
                    if done {
                        break;
                    }
                }
                None => break,
            }
        }
        last
    }

    /// Feed the full current text of the input control.
    pub fn on_keystroke(&mut self, raw: &str) -> Option<Update> {
        if self.phase != Phase::Running {
            return None;
        }
        let now = self.clock.now();
        let state = self.state.as_mut()?;
        let commit = input::process_input(state, raw);

        let mut finished = None;
        if let Some(ref event) = commit {
            state.refresh_stats(now);
            log::debug!(
                "commit: target={} typed={} correct={}",
                event.target,
                event.typed,
                event.correct
            );

            match self.config.exhaustion_policy {
                ExhaustionPolicy::Reshuffle => self.top_up_queue(),
                ExhaustionPolicy::EndSession => {
                    if self.state.as_ref().is_some_and(SessionState::is_exhausted) {
                        log::info!("word queue exhausted, ending session early");
                        finished = Some(self.end());
                    }
                }
            }
        }

        Some(Update {
            snapshot: self.current_snapshot(),
            commit,
            finished,
        })
    }

    /// Running -> Ended. Only reachable from a Running phase, so the
    /// result is produced exactly once per session.
    fn end(&mut self) -> SessionResult {
        self.cancel_timer();
        self.phase = Phase::Ended;
        self.finalize()
    }

    fn finalize(&mut self) -> SessionResult {
        let result = self
            .state
            .as_ref()
            .map(SessionResult::from_state)
            .unwrap_or_else(|| SessionResult {
                tier: Tier::default(),
                wpm: 0,
                accuracy: 100,
                correct_word_count: 0,
                incorrect_word_count: 0,
                score: 0,
            });
        log::info!(
            "session finished: tier={} wpm={} accuracy={}% score={}",
            result.tier,
            result.wpm,
            result.accuracy,
            result.score
        );
        self.result = Some(result.clone());
        result
    }

    fn top_up_queue(&mut self) {
        if self.config.exhaustion_policy != ExhaustionPolicy::Reshuffle {
            return;
        }
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let wanted = self.config.preview_words.max(1);
        while state.remaining_words() < wanted {
            let more = self.provider.load_queue(state.tier);
            log::debug!("appending {} reshuffled words", more.len());
            state.queue.extend(more);
        }
    }

    fn current_snapshot(&self) -> Snapshot {
        self.snapshot().unwrap_or_else(|| Snapshot {
            time_remaining: 0,
            wpm: 0,
            accuracy: 100,
            score: 0,
            current_word: None,
            typed_buffer: String::new(),
            upcoming_words: Vec::new(),
        })
    }
}
