//! Upload progress tracking

use std::sync::Arc;

/// Receives upload percentages in `0..=100`
pub type ProgressCallback = Arc<dyn Fn(u8) + Send + Sync>;

/// Converts byte counts into percentage updates.
///
/// Reports `floor(sent * 100 / total)` and only when the value increases,
/// so callers see a non-decreasing sequence. An empty upload reports 100
/// on creation.
pub struct ProgressTracker {
    total: u64,
    sent: u64,
    last_reported: Option<u8>,
    callback: ProgressCallback,
}

impl ProgressTracker {
    pub fn new(total: u64, callback: ProgressCallback) -> Self {
        let mut tracker = Self {
            total,
            sent: 0,
            last_reported: None,
            callback,
        };
        if total == 0 {
            tracker.report(100);
        }
        tracker
    }

    /// Record `bytes` more sent
    pub fn advance(&mut self, bytes: usize) {
        if self.total == 0 {
            return;
        }
        self.sent = self.sent.saturating_add(bytes as u64).min(self.total);
        let percent = (self.sent.saturating_mul(100) / self.total).min(100) as u8;
        self.report(percent);
    }

    /// Last percentage passed to the callback
    pub fn last_reported(&self) -> Option<u8> {
        self.last_reported
    }

    fn report(&mut self, percent: u8) {
        if self.last_reported.map_or(true, |last| percent > last) {
            self.last_reported = Some(percent);
            (self.callback)(percent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording() -> (ProgressCallback, Arc<Mutex<Vec<u8>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let callback: ProgressCallback = Arc::new(move |p| sink.lock().unwrap().push(p));
        (callback, seen)
    }

    #[test]
    fn test_reports_floor_percentages() {
        let (callback, seen) = recording();
        let mut tracker = ProgressTracker::new(300, callback);

        tracker.advance(100);
        tracker.advance(100);
        tracker.advance(100);

        assert_eq!(*seen.lock().unwrap(), vec![33, 66, 100]);
    }

    #[test]
    fn test_repeated_values_are_suppressed() {
        let (callback, seen) = recording();
        let mut tracker = ProgressTracker::new(1000, callback);

        tracker.advance(1);
        tracker.advance(1);
        tracker.advance(8);

        // 0 once, then 1 at ten bytes
        assert_eq!(*seen.lock().unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_overshoot_is_clamped() {
        let (callback, seen) = recording();
        let mut tracker = ProgressTracker::new(10, callback);

        tracker.advance(25);
        tracker.advance(5);

        assert_eq!(*seen.lock().unwrap(), vec![100]);
        assert_eq!(tracker.last_reported(), Some(100));
    }

    #[test]
    fn test_empty_upload_reports_complete() {
        let (callback, seen) = recording();
        let mut tracker = ProgressTracker::new(0, callback);
        tracker.advance(0);

        assert_eq!(*seen.lock().unwrap(), vec![100]);
    }
}
