//! Submission history with arrow-key style navigation.

/// Stores submitted lines in order and tracks a navigation cursor.
///
/// The cursor ranges over `[0, len]`: positions `0..len` address stored
/// entries oldest-first, and position `len` is the "past the end" slot
/// that renders as an empty line. Recording a submission resets the
/// cursor past the end.
#[derive(Debug, Default, Clone)]
pub struct HistoryNavigator {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line. Blank lines (after trimming) are never
    /// stored. Every submission, stored or not, moves the cursor past
    /// the end.
    pub fn record_submission(&mut self, text: &str) {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            self.entries.push(trimmed.to_string());
        }
        self.cursor = self.entries.len();
    }

    /// Move the cursor by `offset` (negative = older, positive = newer)
    /// and return the entry there, or `""` at the past-the-end slot.
    /// The cursor clamps at both boundaries. With no history this is a
    /// no-op returning `""`.
    pub fn navigate(&mut self, offset: isize) -> &str {
        if self.entries.is_empty() {
            return "";
        }
        let target = self.cursor as isize + offset;
        self.cursor = target.clamp(0, self.entries.len() as isize) as usize;
        self.entries.get(self.cursor).map_or("", String::as_str)
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

    #[test]
    fn test_navigate_up_and_down() {
        let mut history = HistoryNavigator::new();
        history.record_submission("a");
        history.record_submission("b");
        history.record_submission("c");

        assert_eq!(history.navigate(-1), "c");
        assert_eq!(history.navigate(-1), "b");
        assert_eq!(history.navigate(-1), "a");
        // Clamped at the oldest entry.
        assert_eq!(history.navigate(-1), "a");
        assert_eq!(history.navigate(1), "b");
        assert_eq!(history.navigate(1), "c");
        // Past the end: empty line, then clamped there.
        assert_eq!(history.navigate(1), "");
        assert_eq!(history.navigate(1), "");
        assert_eq!(history.navigate(-1), "c");
    }

    #[test]
    fn test_empty_history_is_a_noop() {
        let mut history = HistoryNavigator::new();
        assert_eq!(history.navigate(-1), "");
        assert_eq!(history.navigate(1), "");
        assert!(history.is_empty());
    }

    #[test]
    fn test_blank_submissions_are_not_stored() {
        let mut history = HistoryNavigator::new();
        history.record_submission("   ");
        history.record_submission("");
        assert!(history.is_empty());

        history.record_submission("  5 + 3  ");
        assert_eq!(history.len(), 1);
        assert_eq!(history.navigate(-1), "5 + 3");
    }

    #[test]
    fn test_recording_resets_cursor_past_the_end() {
        let mut history = HistoryNavigator::new();
        history.record_submission("a");
        history.record_submission("b");
        assert_eq!(history.navigate(-1), "b");
        assert_eq!(history.navigate(-1), "a");

        history.record_submission("c");
        assert_eq!(history.navigate(-1), "c");
    }
}
