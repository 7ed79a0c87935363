use std::time::Duration;
use std::time::Instant;

static DEFAULT_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start_time: Instant,
    duration: Duration,
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new(DEFAULT_DURATION)
    }
}

impl Timer {
    pub fn new(duration: Duration) -> Timer {
        Timer::started_at(Instant::now(), duration)
    }

    pub fn started_at(start_time: Instant, duration: Duration) -> Timer {
        Timer {
            start_time,
            duration,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete_at(Instant::now())
    }

    pub fn is_complete_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start_time) >= self.duration
    }

    pub fn remaining_time(&self) -> Duration {
        self.remaining_time_at(Instant::now())
    }

    pub fn remaining_time_at(&self, now: Instant) -> Duration {
        self.duration
            .saturating_sub(now.saturating_duration_since(self.start_time))
    }
}
