pub const HISTORY_CAPACITY: usize = 100;

pub struct History {
    entries: Vec<String>,
    capacity: usize,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        History {
            entries: Vec::new(),
            capacity,
            cursor: 0,
        }
    }

    // Empty lines are never recorded. At capacity the oldest entry is
    // evicted and the rest shift down one slot. The cursor parks on the
    // new entry.
    pub fn record(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.remove(0);
        }
        self.entries.push(line.to_string());
        self.cursor = self.entries.len() - 1;
    }

    // First press since the last submission jumps to the newest entry;
    // later presses walk back, clamped at the oldest.
    pub fn navigate_up(&mut self, first_press: bool) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        if first_press {
            self.cursor = self.entries.len() - 1;
        } else if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.entries.get(self.cursor).map(String::as_str)
    }

    // Walks toward newer entries, clamped at the newest. No wrap.
    pub fn navigate_down(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
        self.entries.get(self.cursor).map(String::as_str)
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(entries: &[&str]) -> History {
        let mut history = History::new();
        for entry in entries {
            history.record(entry);
        }
        history
    }

    #[test]
    fn test_records_in_submission_order() {
        let history = seeded(&["first", "second", "third"]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.entries(), ["first", "second", "third"]);
    }

    #[test]
    fn test_empty_line_is_not_recorded() {
        let mut history = History::new();
        history.record("");
        assert!(history.is_empty());
    }

    #[test]
    fn test_eviction_shifts_out_the_oldest() {
        let mut history = History::new();
        for i in 0..=HISTORY_CAPACITY {
            history.record(&format!("cmd {}", i));
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.entries()[0], "cmd 1");
        assert_eq!(history.entries()[HISTORY_CAPACITY - 1], "cmd 100");
    }

    #[test]
    fn test_first_up_press_shows_newest() {
        let mut history = seeded(&["old", "mid", "new"]);
        assert_eq!(history.navigate_up(true), Some("new"));
    }

    #[test]
    fn test_up_walks_back_and_clamps_at_oldest() {
        let mut history = seeded(&["old", "mid", "new"]);
        history.navigate_up(true);
        assert_eq!(history.navigate_up(false), Some("mid"));
        assert_eq!(history.navigate_up(false), Some("old"));
        assert_eq!(history.navigate_up(false), Some("old"));
    }

    #[test]
    fn test_down_clamps_at_newest() {
        let mut history = seeded(&["old", "mid", "new"]);
        history.navigate_up(true);
        assert_eq!(history.navigate_down(), Some("new"));
        assert_eq!(history.navigate_down(), Some("new"));
    }

    #[test]
    fn test_navigation_on_empty_store_is_noop() {
        let mut history = History::new();
        assert_eq!(history.navigate_up(true), None);
        assert_eq!(history.navigate_down(), None);
    }

    #[test]
    fn test_recorded_recall_becomes_fresh_newest_entry() {
        let mut history = seeded(&["ls -l", "pwd"]);
        history.navigate_up(true);
        history.navigate_up(false);
        let recalled = history.current().map(str::to_string);
        assert_eq!(recalled.as_deref(), Some("ls -l"));

        history.record("ls -l");
        assert_eq!(history.len(), 3);
        assert_eq!(history.entries()[2], "ls -l");
        assert_eq!(history.current(), Some("ls -l"));
    }

    #[test]
    fn test_record_parks_cursor_on_new_entry() {
        let mut history = seeded(&["a", "b"]);
        assert_eq!(history.current(), Some("b"));
        history.record("c");
        assert_eq!(history.current(), Some("c"));
    }
}
