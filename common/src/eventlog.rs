//! Ring buffer of recent manager events.
//!
//! The Status page shows the last few acknowledgements (resets,
//! calibrations, failures) so a user can see what the device did
//! without a debug probe attached. Old entries are dropped when the
//! buffer is full.

use heapless::{Deque, String};

/// Maximum number of log lines kept.
pub const LOG_CAPACITY: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 32;

/// Ring buffer of recent event lines.
pub struct EventLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_CAPACITY>,
}

impl EventLog {
    pub const fn new() -> Self {
        Self { buffer: Deque::new() }
    }

    /// Append a line, dropping the oldest entry when full. Lines longer
    /// than [`LOG_LINE_LENGTH`] are truncated.
    pub fn push(&mut self, msg: &str) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars().take(LOG_LINE_LENGTH - 1) {
            line.push(c).ok();
        }

        self.buffer.push_back(line).ok();
    }

    /// Iterate over log lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buffer.iter().map(|line| line.as_str())
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iterate() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push("Zero point set");
        log.push("Max reset");
        assert_eq!(log.len(), 2);

        let lines: Vec<&str> = log.iter().collect();
        assert_eq!(lines, ["Zero point set", "Max reset"]);
    }

    #[test]
    fn test_ring_drops_oldest() {
        let mut log = EventLog::new();
        for i in 0..LOG_CAPACITY + 2 {
            log.push(if i % 2 == 0 { "even" } else { "odd" });
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        // Entries 0 and 1 were dropped; the buffer now starts at entry 2.
        assert_eq!(log.iter().next(), Some("even"));
    }

    #[test]
    fn test_long_lines_truncate() {
        let mut log = EventLog::new();
        log.push("this line is much longer than the thirty-two character limit");

        let stored = log.iter().next().unwrap();
        assert!(stored.len() < LOG_LINE_LENGTH);
        assert!(stored.starts_with("this line"));
    }
}
