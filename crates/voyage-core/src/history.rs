//! Undo/Redo history over whole snapshots
//!
//! Each committed edit stores the complete resulting value. Undo and redo only
//! move a pointer, so a prior state can never be affected by later edits.

/// A committed snapshot and the label of the edit that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry<T> {
    pub value: T,
    /// `None` for the initial snapshot and for unlabeled commits
    pub label: Option<String>,
}

/// Linear undo/redo history
///
/// Keeps an ordered list of snapshots plus a pointer at the one currently
/// shown. Committing while the pointer is not at the end discards the redo
/// future before appending.
#[derive(Debug, Clone)]
pub struct HistoryStack<T> {
    entries: Vec<HistoryEntry<T>>,
    pointer: usize,
    /// Maximum number of undo steps to keep (`None` = unbounded)
    limit: Option<usize>,
}

impl<T: Clone> HistoryStack<T> {
    /// Create an unbounded history whose only snapshot is `initial`
    pub fn new(initial: T) -> Self {
        Self::with_limit(initial, None)
    }

    /// Create a history that keeps at most `limit` undo steps
    pub fn with_limit(initial: T, limit: Option<usize>) -> Self {
        Self {
            entries: vec![HistoryEntry {
                value: initial,
                label: None,
            }],
            pointer: 0,
            limit,
        }
    }

    /// Record `value` as the new current snapshot
    pub fn commit(&mut self, value: T) {
        self.push_entry(HistoryEntry { value, label: None });
    }

    /// Record `value` with the name of the edit that produced it
    pub fn commit_labeled(&mut self, value: T, label: impl Into<String>) {
        self.push_entry(HistoryEntry {
            value,
            label: Some(label.into()),
        });
    }

    fn push_entry(&mut self, entry: HistoryEntry<T>) {
        // A new edit invalidates the redo future
        self.entries.truncate(self.pointer + 1);
        self.entries.push(entry);

        if let Some(limit) = self.limit {
            let excess = self.entries.len().saturating_sub(limit.saturating_add(1));
            if excess > 0 {
                self.entries.drain(..excess);
            }
        }

        self.pointer = self.entries.len() - 1;
    }

    /// Step back one snapshot and return it. At the oldest snapshot this is a
    /// no-op returning the current value.
    pub fn undo(&mut self) -> &T {
        if self.can_undo() {
            self.pointer -= 1;
        }
        &self.entries[self.pointer].value
    }

    /// Step forward one snapshot and return it. Without a redo future this is
    /// a no-op returning the current value.
    pub fn redo(&mut self) -> &T {
        if self.can_redo() {
            self.pointer += 1;
        }
        &self.entries[self.pointer].value
    }

    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.entries.len()
    }

    /// The snapshot at the pointer
    pub fn current(&self) -> &T {
        &self.entries[self.pointer].value
    }

    /// Label of the edit that `undo` would revert (for UI)
    pub fn next_undo_label(&self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.entries[self.pointer].label.as_deref()
    }

    /// Label of the edit that `redo` would reapply (for UI)
    pub fn next_redo_label(&self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.entries[self.pointer + 1].label.as_deref()
    }

    /// Drop all history and start over from `value`
    pub fn reset(&mut self, value: T) {
        self.entries.clear();
        self.entries.push(HistoryEntry { value, label: None });
        self.pointer = 0;
    }

    /// Number of stored snapshots (never zero)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn entries(&self) -> &[HistoryEntry<T>] {
        &self.entries
    }
}

impl<T: Clone + Default> Default for HistoryStack<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
