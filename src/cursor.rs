// Keyboard cursor over a filtered result list
//
// `None` means no active entry. Up/Down clamp at the ends (no wraparound).

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCursor {
    active: Option<usize>,
}

impl GridCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.active = Some(match self.active {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i.min(len - 1),
            None => 0,
        });
    }

    /// Up from "none" stays "none"
    pub fn up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if let Some(i) = self.active {
            self.active = Some(i.saturating_sub(1).min(len - 1));
        }
    }

    pub fn first(&mut self, len: usize) {
        if len > 0 {
            self.active = Some(0);
        }
    }

    pub fn last(&mut self, len: usize) {
        if len > 0 {
            self.active = Some(len - 1);
        }
    }

    /// Out-of-range indices are ignored
    pub fn set(&mut self, index: usize, len: usize) {
        if index < len {
            self.active = Some(index);
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_from_none_selects_first() {
        let mut cursor = GridCursor::new();
        cursor.down(3);
        assert_eq!(cursor.active(), Some(0));
    }

    #[test]
    fn test_down_clamps_at_end() {
        let mut cursor = GridCursor::new();
        for _ in 0..10 {
            cursor.down(3);
        }
        assert_eq!(cursor.active(), Some(2));
    }

    #[test]
    fn test_up_clamps_at_start_and_keeps_none() {
        let mut cursor = GridCursor::new();
        cursor.up(3);
        assert_eq!(cursor.active(), None);

        cursor.down(3);
        cursor.down(3);
        cursor.up(3);
        cursor.up(3);
        cursor.up(3);
        assert_eq!(cursor.active(), Some(0));
    }

    #[test]
    fn test_empty_list_is_noop() {
        let mut cursor = GridCursor::new();
        cursor.down(0);
        cursor.up(0);
        cursor.first(0);
        cursor.last(0);
        assert_eq!(cursor.active(), None);
    }

    #[test]
    fn test_set_ignores_out_of_range() {
        let mut cursor = GridCursor::new();
        cursor.set(5, 3);
        assert_eq!(cursor.active(), None);
        cursor.set(1, 3);
        assert_eq!(cursor.active(), Some(1));
        cursor.clear();
        assert_eq!(cursor.active(), None);
    }

    #[test]
    fn test_index_always_in_range_for_event_sequences() {
        // Mixed Up/Down sequences over shrinking and growing lists
        let lens = [4usize, 4, 1, 0, 2, 5, 5, 3];
        let mut cursor = GridCursor::new();
        for (step, len) in lens.iter().cycle().take(64).enumerate() {
            if step % 3 == 0 {
                cursor.up(*len);
            } else {
                cursor.down(*len);
            }
            if let Some(i) = cursor.active() {
                if *len > 0 {
                    assert!(i < *len, "index {} out of range for len {}", i, len);
                }
            }
            // Lists change only through filter changes, which clear the cursor
            cursor.clear();
            cursor.down(*len);
        }
    }
}
