//! Per-question countdown.

use std::time::{Duration, Instant};

/// Time allotted to each question.
pub const QUESTION_TIME: Duration = Duration::from_secs(30);

/// Deadline-based countdown for the question currently on screen.
///
/// Restarted whenever the active question changes. Expiry is observed by
/// polling from the event loop rather than by a scheduled callback, so a
/// timer belonging to an already-committed question can never fire: the
/// controller only consults the timer for the current question while the
/// quiz is running.
#[derive(Debug, Clone)]
pub struct QuestionTimer {
    started: Instant,
    duration: Duration,
}

impl QuestionTimer {
    pub fn start(duration: Duration) -> Self {
        Self {
            started: Instant::now(),
            duration,
        }
    }

    /// Begin a fresh countdown, for the next question.
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.started.elapsed())
    }

    /// Whole seconds left, rounded up so the display never shows 0 while
    /// time remains.
    pub fn remaining_secs(&self) -> u64 {
        let remaining = self.remaining();
        if remaining.is_zero() {
            0
        } else {
            remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
        }
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_zero()
    }

    pub fn total_secs(&self) -> u64 {
        self.duration.as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_timer_not_expired() {
        let timer = QuestionTimer::start(QUESTION_TIME);
        assert!(!timer.is_expired());
        assert!(timer.remaining_secs() <= 30);
        assert!(timer.remaining_secs() >= 29);
    }

    #[test]
    fn test_zero_duration_expires_immediately() {
        let timer = QuestionTimer::start(Duration::ZERO);
        assert!(timer.is_expired());
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn test_restart_rearms() {
        let mut timer = QuestionTimer::start(Duration::ZERO);
        assert!(timer.is_expired());

        timer.duration = Duration::from_secs(30);
        timer.restart();
        assert!(!timer.is_expired());
    }
}
