//! Advisory hints shown under the description field.
//!
//! The hints are a fixed list; they do not depend on what was typed, only on
//! how much.

pub const ADVISORY_SUGGESTIONS: [&str; 3] = [
    "Consider highlighting key benefits early",
    "Add emotional hook in first 3 seconds",
    "Include clear call-to-action",
];

/// What happens to the list when the description shrinks back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StalePolicy {
    /// Empty the list once the description is at or below the threshold.
    Clear,
    /// Leave the last list on screen.
    Keep,
}

impl From<bool> for StalePolicy {
    fn from(clear_stale: bool) -> Self {
        if clear_stale {
            StalePolicy::Clear
        } else {
            StalePolicy::Keep
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList {
    items: Vec<String>,
    threshold: usize,
    policy: StalePolicy,
}

impl SuggestionList {
    pub fn new(threshold: usize, policy: StalePolicy) -> Self {
        Self {
            items: Vec::new(),
            threshold,
            policy,
        }
    }

    /// Recompute after a description edit. Returns `true` if the list
    /// changed.
    ///
    /// Length is measured in UTF-16 code units, the unit browser input
    /// values report, so an emoji counts as two.
    pub fn refresh(&mut self, description: &str) -> bool {
        let length = description.encode_utf16().count();
        if length > self.threshold {
            let next: Vec<String> = ADVISORY_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
            let changed = self.items != next;
            self.items = next;
            changed
        } else if self.policy == StalePolicy::Clear && !self.items.is_empty() {
            self.items.clear();
            true
        } else {
            false
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_at_threshold_stays_empty() {
        let mut list = SuggestionList::new(10, StalePolicy::Clear);
        assert!(!list.refresh("0123456789"));
        assert!(list.is_empty());
    }

    #[test]
    fn one_past_threshold_fills_fixed_list() {
        let mut list = SuggestionList::new(10, StalePolicy::Clear);
        assert!(list.refresh("0123456789A"));
        assert_eq!(list.items(), ADVISORY_SUGGESTIONS);
    }

    #[test]
    fn repeated_refresh_replaces_instead_of_appending() {
        let mut list = SuggestionList::new(10, StalePolicy::Clear);
        list.refresh("a long enough description");
        assert!(!list.refresh("an even longer description than before"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn clear_policy_empties_on_shrink() {
        let mut list = SuggestionList::new(10, StalePolicy::Clear);
        list.refresh("a long enough description");
        assert!(list.refresh("short"));
        assert!(list.is_empty());
    }

    #[test]
    fn keep_policy_leaves_stale_list() {
        let mut list = SuggestionList::new(10, StalePolicy::Keep);
        list.refresh("a long enough description");
        assert!(!list.refresh(""));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn length_counts_utf16_units_not_bytes() {
        // 10 units, 20 bytes
        let mut list = SuggestionList::new(10, StalePolicy::Clear);
        list.refresh("éééééééééé");
        assert!(list.is_empty());
    }

    #[test]
    fn emoji_count_as_two_units() {
        // 6 chars, 12 units
        let mut list = SuggestionList::new(10, StalePolicy::Clear);
        assert!(list.refresh("🎬🎬🎬🎬🎬🎬"));
        assert_eq!(list.items(), ADVISORY_SUGGESTIONS);

        // 5 chars, 10 units
        assert!(list.refresh("🎬🎬🎬🎬🎬"));
        assert!(list.is_empty());
    }

    #[test]
    fn policy_from_config_flag() {
        assert_eq!(StalePolicy::from(true), StalePolicy::Clear);
        assert_eq!(StalePolicy::from(false), StalePolicy::Keep);
    }
}
