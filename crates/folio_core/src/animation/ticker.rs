use std::time::{Duration, Instant};

/// Interval bookkeeping with an explicit start/stop lifecycle.
///
/// A stopped ticker never fires. A running one fires at most once per
/// [`Ticker::poll`], however long the caller waited; missed intervals are
/// dropped, not replayed.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last_fired: Option<Instant>,
}

impl Ticker {
    /// A stopped ticker with the given interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    /// Start counting from `now`. The first firing is one interval later.
    /// Restarting a running ticker resets its phase.
    pub fn start(&mut self, now: Instant) {
        self.last_fired = Some(now);
    }

    /// Stop; any pending firing is discarded. Idempotent.
    pub fn stop(&mut self) {
        self.last_fired = None;
    }

    /// Whether the ticker is running.
    pub fn is_running(&self) -> bool {
        self.last_fired.is_some()
    }

    /// Returns `true` if an interval has elapsed since the last firing.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_fired {
            Some(last) if now.saturating_duration_since(last) >= self.interval => {
                self.last_fired = Some(now);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_400: Duration = Duration::from_millis(400);

    #[test]
    fn test_stopped_never_fires() {
        let mut ticker = Ticker::new(MS_400);
        let now = Instant::now();
        assert!(!ticker.poll(now + Duration::from_secs(10)));
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut ticker = Ticker::new(MS_400);
        let t0 = Instant::now();
        ticker.start(t0);

        assert!(!ticker.poll(t0 + Duration::from_millis(399)));
        assert!(ticker.poll(t0 + MS_400));
        assert!(!ticker.poll(t0 + Duration::from_millis(500)));
        assert!(ticker.poll(t0 + Duration::from_millis(800)));
    }

    #[test]
    fn test_no_catch_up_burst() {
        let mut ticker = Ticker::new(MS_400);
        let t0 = Instant::now();
        ticker.start(t0);

        let late = t0 + Duration::from_secs(5);
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
    }

    #[test]
    fn test_stop_discards_pending() {
        let mut ticker = Ticker::new(MS_400);
        let t0 = Instant::now();
        ticker.start(t0);
        ticker.stop();
        ticker.stop();

        assert!(!ticker.poll(t0 + Duration::from_secs(1)));

        ticker.start(t0 + Duration::from_secs(1));
        assert!(ticker.poll(t0 + Duration::from_millis(1400)));
    }
}
