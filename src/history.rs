//! Chronological record of requested titles.
//!
//! Every value that becomes active is appended here; restoring walks the
//! sequence backwards. Pushes are idempotent: an empty value, or one already
//! present anywhere in the sequence, is not re-added. That keeps every
//! entry's identity unambiguous, so a value can serve as its own restore
//! target at most once.

/// Ordered history of active title values, oldest first.
#[derive(Debug, Default, Clone)]
pub struct TitleHistory {
    entries: Vec<String>,
}

impl TitleHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the end of the history.
    ///
    /// Empty values and values already present anywhere in the sequence are
    /// skipped. Returns `true` only when an entry was actually appended —
    /// callers use this to decide whether a later teardown owes a restore.
    pub fn push(&mut self, value: &str) -> bool {
        if value.is_empty() || self.entries.iter().any(|e| e == value) {
            return false;
        }
        self.entries.push(value.to_string());
        true
    }

    /// Remove and return the most recent entry, or `None` when empty.
    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop()
    }

    /// Remove the first occurrence of `value` anywhere in the sequence.
    ///
    /// Supports out-of-order teardown: a unit destroyed while no longer on
    /// top surrenders its entry without touching anything stacked above it.
    /// Returns `true` when an entry was removed; an absent value is a no-op.
    pub fn remove(&mut self, value: &str) -> bool {
        if let Some(idx) = self.entries.iter().position(|e| e == value) {
            self.entries.remove(idx);
            true
        } else {
            false
        }
    }

    /// The most recent entry, without removing it.
    pub fn peek_last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Drop every entry. Test and process-reset boundaries only.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
