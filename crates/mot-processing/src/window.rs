//! Bounded sliding window over recent raw readings

use std::collections::VecDeque;

/// Fixed-capacity FIFO of the most recent raw readings for one axis
///
/// Insertion order is significant: oldest first, most recent last. When
/// full, pushing evicts the oldest element. No statistics are derived
/// from the window here; it is the extension point for future noise
/// adaptation.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    buffer: VecDeque<f32>,
    capacity: usize,
}

impl SlidingWindow {
    /// Create an empty window with the given fixed capacity
    pub fn new(capacity: usize) -> Self {
        SlidingWindow {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a reading, evicting the oldest if the window is full
    pub fn push(&mut self, value: f32) {
        if self.buffer.len() == self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// Most recent reading, if any
    pub fn latest(&self) -> Option<f32> {
        self.buffer.back().copied()
    }

    /// Readings oldest-first
    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.buffer.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_up_to_capacity() {
        let mut window = SlidingWindow::new(5);
        for i in 0..5 {
            window.push(i as f32);
        }

        assert!(window.is_full());
        assert_eq!(window.len(), 5);
        assert_eq!(window.latest(), Some(4.0));
    }

    #[test]
    fn test_eviction_keeps_last_capacity_values() {
        // After C + k pushes the window holds exactly the last C values,
        // oldest-first in insertion order.
        let capacity = 50;
        let extra = 17;
        let mut window = SlidingWindow::new(capacity);

        for i in 0..(capacity + extra) {
            window.push(i as f32);
        }

        assert_eq!(window.len(), capacity);
        let contents: Vec<f32> = window.iter().copied().collect();
        let expected: Vec<f32> = (extra..capacity + extra).map(|i| i as f32).collect();
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut window = SlidingWindow::new(3);
        for i in 0..100 {
            window.push(i as f32);
            assert!(window.len() <= 3);
        }
    }

    #[test]
    fn test_empty_window() {
        let window = SlidingWindow::new(4);
        assert!(window.is_empty());
        assert!(!window.is_full());
        assert_eq!(window.latest(), None);
    }
}
