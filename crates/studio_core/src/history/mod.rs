//! Linear undo/redo history for one editable document.
//!
//! # Responsibility
//! - Keep an ordered log of pre-edit content snapshots plus a cursor.
//! - Answer undo/redo requests with the snapshot to restore.
//!
//! # Invariants
//! - `cursor` is `None` exactly when no snapshot is recorded.
//! - When set, `cursor < snapshots.len()`.
//! - Recording after an undo permanently discards the redo branch.
//! - Out-of-range undo/redo is a no-op returning `None`, never an error.

/// Snapshot log owned by a single document editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditHistory {
    snapshots: Vec<String>,
    cursor: Option<usize>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `current`, the content as it was *before* the edit being
    /// applied.
    ///
    /// Snapshots after the cursor are dropped first; the cursor then points
    /// at the appended entry.
    pub fn record_edit(&mut self, current: impl Into<String>) {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        self.snapshots.truncate(keep);
        self.snapshots.push(current.into());
        self.cursor = Some(self.snapshots.len() - 1);
    }

    /// Steps back one entry and returns the snapshot now under the cursor.
    ///
    /// Returns `None` without moving when already at the oldest entry or when
    /// nothing is recorded.
    pub fn undo(&mut self) -> Option<String> {
        let cursor = self.cursor.filter(|cursor| *cursor > 0)?;
        let previous = cursor - 1;
        self.cursor = Some(previous);
        self.snapshots.get(previous).cloned()
    }

    /// Steps forward one entry and returns the snapshot now under the cursor.
    ///
    /// Returns `None` without moving when no undone entry is ahead.
    pub fn redo(&mut self) -> Option<String> {
        let cursor = self.cursor?;
        let next = cursor + 1;
        if next >= self.snapshots.len() {
            return None;
        }
        self.cursor = Some(next);
        self.snapshots.get(next).cloned()
    }

    /// Drops every snapshot. Called when the editor switches documents.
    pub fn reset(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor
            .is_some_and(|cursor| cursor + 1 < self.snapshots.len())
    }

    /// Current position, `None` when nothing is recorded.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::EditHistory;

    #[test]
    fn fresh_history_has_nothing_to_undo_or_redo() {
        let mut history = EditHistory::new();
        assert_eq!(history.cursor(), None);
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn single_record_sits_at_oldest_entry() {
        let mut history = EditHistory::new();
        history.record_edit("hello");
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(history.undo(), None);
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn undo_returns_entry_before_cursor() {
        let mut history = EditHistory::new();
        history.record_edit("hello");
        history.record_edit("hello world");
        assert_eq!(history.undo().as_deref(), Some("hello"));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn redo_walks_forward_after_undo() {
        let mut history = EditHistory::new();
        history.record_edit("a");
        history.record_edit("b");
        history.record_edit("c");
        assert_eq!(history.undo().as_deref(), Some("b"));
        assert_eq!(history.undo().as_deref(), Some("a"));
        assert!(history.can_redo());
        assert_eq!(history.redo().as_deref(), Some("b"));
        assert_eq!(history.redo().as_deref(), Some("c"));
        assert_eq!(history.redo(), None);
        assert_eq!(history.cursor(), Some(2));
    }

    #[test]
    fn recording_after_undo_discards_redo_branch() {
        let mut history = EditHistory::new();
        history.record_edit("a");
        history.record_edit("b");
        history.record_edit("c");
        history.undo();
        history.record_edit("x");

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), Some(2));
        assert_eq!(history.redo(), None);
        assert_eq!(history.undo().as_deref(), Some("b"));
    }

    #[test]
    fn reset_clears_everything() {
        let mut history = EditHistory::new();
        history.record_edit("a");
        history.record_edit("b");
        history.reset();

        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
    }
}
