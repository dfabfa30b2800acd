use std::time::{Duration, Instant};

/// Elapsed-time clock for a match. It runs from construction until
/// [`MatchClock::stop`], after which the reading is frozen.
#[derive(Debug, Clone, Copy)]
pub struct MatchClock {
    started: Instant,
    stopped: Option<Duration>,
}

impl MatchClock {
    pub fn start() -> Self {
        MatchClock {
            started: Instant::now(),
            stopped: None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.stopped.unwrap_or_else(|| self.started.elapsed())
    }

    /// Freeze the clock; later calls keep the first reading
    pub fn stop(&mut self) {
        if self.stopped.is_none() {
            self.stopped = Some(self.started.elapsed());
        }
    }

    pub fn is_running(&self) -> bool {
        self.stopped.is_none()
    }

    /// Elapsed time as `MM:SS`
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed())
    }
}

/// Format a duration as zero-padded minutes and seconds. Minutes keep
/// growing past 99 rather than rolling over.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
