//! Bounded history of formatted log lines
//!
//! A FIFO ring that holds at most `capacity` lines. Inserting into a full
//! buffer evicts exactly one line, the oldest, before appending.

use std::collections::VecDeque;

/// Default number of lines retained by the history
pub const MAX_SIZE: usize = 1000;

/// Bounded FIFO of formatted log lines, oldest first
///
/// This type is not synchronized; `LogStore` owns it behind a lock.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuffer {
    /// Create a buffer holding up to `MAX_SIZE` lines
    pub fn new() -> Self {
        Self::with_capacity(MAX_SIZE)
    }

    /// Create a buffer with a custom capacity (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a line, evicting the oldest one first if the buffer is full
    ///
    /// Returns the evicted line, if any.
    pub fn push(&mut self, line: String) -> Option<String> {
        let evicted = if self.lines.len() >= self.capacity {
            self.lines.pop_front()
        } else {
            None
        };
        self.lines.push_back(line);
        evicted
    }

    /// Copy of the current contents, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_snapshot() {
        let mut buffer = HistoryBuffer::new();

        assert!(buffer.push("line 1".to_string()).is_none());
        assert!(buffer.push("line 2".to_string()).is_none());
        assert!(buffer.push("line 3".to_string()).is_none());

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.snapshot(), vec!["line 1", "line 2", "line 3"]);
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec!["line 1", "line 2", "line 3"]);
    }

    #[test]
    fn test_default_capacity() {
        let buffer = HistoryBuffer::default();
        assert_eq!(buffer.capacity(), MAX_SIZE);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut buffer = HistoryBuffer::with_capacity(3);

        for i in 0..5 {
            buffer.push(format!("msg {}", i));
        }

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.snapshot(), vec!["msg 2", "msg 3", "msg 4"]);
    }

    #[test]
    fn test_push_into_full_buffer_evicts_exactly_one() {
        let mut buffer = HistoryBuffer::new();
        for i in 1..=MAX_SIZE {
            assert!(buffer.push(format!("E{}", i)).is_none());
        }
        assert_eq!(buffer.len(), MAX_SIZE);

        let evicted = buffer.push(format!("E{}", MAX_SIZE + 1));
        assert_eq!(evicted.as_deref(), Some("E1"));
        assert_eq!(buffer.len(), MAX_SIZE);

        let lines = buffer.snapshot();
        assert_eq!(lines[0], "E2");
        assert_eq!(lines[MAX_SIZE - 1], format!("E{}", MAX_SIZE + 1));
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(*line, format!("E{}", i + 2));
        }
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut buffer = HistoryBuffer::with_capacity(0);
        assert_eq!(buffer.capacity(), 1);

        buffer.push("a".to_string());
        assert_eq!(buffer.push("b".to_string()).as_deref(), Some("a"));
        assert_eq!(buffer.snapshot(), vec!["b"]);
    }
}
