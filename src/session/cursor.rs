// Navigation cursor
// Clamped index into a trace

use serde::Serialize;

/// Current step pointer over a trace of `len` events.
///
/// Invariant: `0 <= index < max(1, len)`. Stepping past either end is a no-op.
/// Only [`Cursor::new`] builds one, so the invariant holds from construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// Cursor at step 0 over a trace of `len` events
    pub fn new(len: usize) -> Self {
        Cursor { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn last(&self) -> usize {
        self.len.saturating_sub(1)
    }

    pub fn can_step_forward(&self) -> bool {
        self.index < self.last()
    }

    pub fn can_step_backward(&self) -> bool {
        self.index > 0
    }

    /// Advance one step; returns whether the cursor moved
    pub fn step_forward(&mut self) -> bool {
        if self.can_step_forward() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Retreat one step; returns whether the cursor moved
    pub fn step_backward(&mut self) -> bool {
        if self.can_step_backward() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `index`, clamped to the valid range
    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.last());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor_starts_at_zero() {
        let cursor = Cursor::new(5);
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.can_step_backward());
        assert!(cursor.can_step_forward());
    }

    #[test]
    fn test_step_forward_clamps_at_last() {
        let mut cursor = Cursor::new(3);
        assert!(cursor.step_forward());
        assert!(cursor.step_forward());
        assert!(!cursor.step_forward());
        assert!(!cursor.step_forward());
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_step_backward_clamps_at_zero() {
        let mut cursor = Cursor::new(3);
        cursor.step_forward();
        assert!(cursor.step_backward());
        assert!(!cursor.step_backward());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_empty_trace_cursor_never_moves() {
        let mut cursor = Cursor::new(0);
        assert!(cursor.is_empty());
        assert!(!cursor.step_forward());
        assert!(!cursor.step_backward());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_single_event_cursor() {
        let mut cursor = Cursor::new(1);
        assert!(!cursor.can_step_forward());
        assert!(!cursor.step_forward());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_seek_clamps() {
        let mut cursor = Cursor::new(4);
        cursor.seek(2);
        assert_eq!(cursor.index(), 2);
        cursor.seek(100);
        assert_eq!(cursor.index(), 3);

        let mut empty = Cursor::new(0);
        empty.seek(5);
        assert_eq!(empty.index(), 0);
    }

    #[test]
    fn test_mixed_moves_keep_index_in_bounds() {
        for len in 0..6 {
            let mut cursor = Cursor::new(len);
            for i in 0..40usize {
                match i % 7 {
                    0 | 3 | 4 => {
                        cursor.step_forward();
                    }
                    1 | 5 => {
                        cursor.step_backward();
                    }
                    _ => cursor.seek(i),
                }
                assert!(cursor.index() < len.max(1));
                assert_eq!(cursor.len(), len);
            }
        }
    }

    #[test]
    fn test_serializes_index_and_len() {
        let mut cursor = Cursor::new(3);
        cursor.step_forward();
        let json = serde_json::to_value(cursor).unwrap();
        assert_eq!(json, serde_json::json!({ "index": 1, "len": 3 }));
    }
}
