use std::time::{Duration, Instant};

use crate::timer::Timer;

pub static COPIED_DURATION: Duration = Duration::from_secs(1);

/// Transient "Copied!" flag. A new copy replaces the pending reset instead of
/// racing with it.
#[derive(Debug, Default)]
pub struct CopyAcknowledgement {
    timer: Option<Timer>,
}

impl CopyAcknowledgement {
    pub fn trigger(&mut self) {
        self.trigger_at(Instant::now());
    }

    pub fn trigger_at(&mut self, now: Instant) {
        self.timer = Some(Timer::started_at(now, COPIED_DURATION));
    }

    pub fn is_active(&mut self) -> bool {
        self.is_active_at(Instant::now())
    }

    pub fn is_active_at(&mut self, now: Instant) -> bool {
        match &self.timer {
            Some(timer) if !timer.is_complete_at(now) => true,
            Some(_) => {
                self.timer = None;
                false
            }
            None => false,
        }
    }

    /// Time until the flag clears, `None` when nothing is pending.
    pub fn remaining_time(&self) -> Option<Duration> {
        self.timer.as_ref().map(Timer::remaining_time)
    }
}
