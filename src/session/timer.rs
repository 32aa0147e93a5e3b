use std::time::{Duration, Instant};

/// Cancelable repeating schedule. The host loop calls [`Countdown::poll`]
/// and gets back how many periods elapsed since the last fire, so a slow
/// frame never drops a tick.
#[derive(Clone, Debug)]
pub struct Countdown {
    period: Duration,
    next_fire: Option<Instant>,
}

impl Countdown {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_fire: None,
        }
    }

    /// Arm from `now`. Re-arming replaces any previous schedule.
    pub fn arm(&mut self, now: Instant) {
        self.next_fire = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.next_fire = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_fire.is_some()
    }

    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next_fire else {
            return 0;
        };
        let mut fired = 0;
        while now >= next {
            fired += 1;
            next += self.period;
        }
        self.next_fire = Some(next);
        fired
    }

    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_fire.map(|next| next.saturating_duration_since(now))
    }
}
