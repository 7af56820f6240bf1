use tracing::{debug, warn};

use crate::error::CoreError;

/// Maximum number of images shown side by side.
pub const COMPARISON_CAPACITY: usize = 4;

/// Outcome of a successful [`ComparisonSet::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    /// The id was appended and now occupies `slot`.
    Added { slot: usize },
    /// The id was removed from `slot`; later entries shifted left.
    Removed { slot: usize },
}

/// Ordered, duplicate-free selection of at most [`COMPARISON_CAPACITY`]
/// image ids.
///
/// Insertion order is slot order. The set is the only writer of its
/// contents: everything else reads it through the accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonSet {
    ids: Vec<String>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self {
            ids: Vec::with_capacity(COMPARISON_CAPACITY),
        }
    }

    /// Remove `id` if selected, otherwise append it.
    ///
    /// Appending to a full set fails with [`CoreError::ComparisonFull`] and
    /// leaves the selection untouched. Any `Ok` means the selection changed.
    pub fn toggle(&mut self, id: &str) -> crate::Result<Toggled> {
        if let Some(slot) = self.position(id) {
            self.ids.remove(slot);
            debug!("Removed {id} from comparison slot {slot}");
            return Ok(Toggled::Removed { slot });
        }
        if self.is_full() {
            warn!("Comparison full, rejected {id}");
            return Err(CoreError::ComparisonFull {
                capacity: COMPARISON_CAPACITY,
            });
        }
        self.ids.push(id.to_string());
        let slot = self.ids.len() - 1;
        debug!("Added {id} to comparison slot {slot}");
        Ok(Toggled::Added { slot })
    }

    /// Empty the selection. Returns `true` if anything was removed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.ids.is_empty();
        self.ids.clear();
        changed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|s| s == id)
    }

    /// The id in `slot`, if that slot is filled.
    pub fn slot(&self, slot: usize) -> Option<&str> {
        self.ids.get(slot).map(String::as_str)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= COMPARISON_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(ids: &[&str]) -> ComparisonSet {
        let mut set = ComparisonSet::new();
        for id in ids {
            set.toggle(id).unwrap();
        }
        set
    }

    #[test]
    fn starts_empty() {
        let set = ComparisonSet::new();
        assert!(set.is_empty());
        assert_eq!(set.slot(0), None);
    }

    #[test]
    fn toggle_appends_at_end() {
        let mut set = filled(&["a", "b"]);
        assert_eq!(set.toggle("c"), Ok(Toggled::Added { slot: 2 }));
        assert_eq!(set.ids(), ["a", "b", "c"]);
    }

    #[test]
    fn toggle_removes_and_closes_gap() {
        let mut set = filled(&["a", "b", "c", "d"]);
        assert_eq!(set.toggle("b"), Ok(Toggled::Removed { slot: 1 }));
        assert_eq!(set.ids(), ["a", "c", "d"]);
        assert_eq!(set.slot(3), None);
    }

    #[test]
    fn fifth_toggle_is_rejected() {
        let mut set = filled(&["a", "b", "c", "d"]);
        let before = set.clone();
        assert_eq!(
            set.toggle("e"),
            Err(CoreError::ComparisonFull { capacity: 4 })
        );
        assert_eq!(set, before);
    }

    #[test]
    fn overflow_message() {
        let err = CoreError::ComparisonFull {
            capacity: COMPARISON_CAPACITY,
        };
        assert_eq!(err.to_string(), "You can compare at most 4 images at a time.");
    }

    #[test]
    fn full_set_still_allows_removal() {
        let mut set = filled(&["a", "b", "c", "d"]);
        assert!(set.is_full());
        assert!(set.toggle("d").is_ok());
        assert!(!set.is_full());
        assert_eq!(set.toggle("e"), Ok(Toggled::Added { slot: 3 }));
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut set = filled(&["a", "b"]);
        set.toggle("c").unwrap();
        set.toggle("c").unwrap();
        assert_eq!(set.ids(), ["a", "b"]);
    }

    #[test]
    fn clear_reports_change() {
        let mut set = filled(&["a"]);
        assert!(set.clear());
        assert!(!set.clear());
        assert!(set.is_empty());
    }
}
