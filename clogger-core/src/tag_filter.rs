//! Tag filtering state machine.
//!
//! ```text
//!               enable(t)                         disable(t)
//!   AllowAll ─────────────► Whitelist{t}   AllowAll ─────────────► Blacklist{t}
//!
//!   Whitelist: enable(t) adds t,  disable(t) removes t
//!   Blacklist: enable(t) removes t, disable(t) adds t
//!
//!   enable_all()  ──► AllowAll, entries cleared
//!   disable_all() ──► Whitelist, entries cleared
//!   clear()       ──► entries cleared, mode kept
//! ```
//!
//! `enable` always means "this tag should pass" and `disable` always means
//! "this tag should not pass", whichever list that touches.

use crate::{
    config::{MAX_TAG_FILTERS, MAX_TAG_LENGTH},
    registry::Registry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every tag passes; entries are ignored.
    #[default]
    AllowAll,
    /// Only active entries pass.
    Whitelist,
    /// Every tag except the active entries passes.
    Blacklist,
}

#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    mode: FilterMode,
    entries: Registry<(), MAX_TAG_FILTERS, MAX_TAG_LENGTH>,
}

impl TagFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    // ========== Transitions ==========

    pub fn to_allow_all(&mut self) {
        self.mode = FilterMode::AllowAll;
        self.entries.clear();
    }

    pub fn to_empty_whitelist(&mut self) {
        self.mode = FilterMode::Whitelist;
        self.entries.clear();
    }

    pub fn to_whitelist_adding(&mut self, tag: &str) {
        self.to_empty_whitelist();
        self.entries.insert(tag, ());
    }

    pub fn to_blacklist_adding(&mut self, tag: &str) {
        self.mode = FilterMode::Blacklist;
        self.entries.clear();
        self.entries.insert(tag, ());
    }

    // ========== Public operations ==========

    pub fn enable(&mut self, tag: &str) {
        match self.mode {
            FilterMode::AllowAll => self.to_whitelist_adding(tag),
            FilterMode::Whitelist => {
                self.entries.insert(tag, ());
            }
            FilterMode::Blacklist => {
                self.entries.remove(tag);
            }
        }
    }

    pub fn disable(&mut self, tag: &str) {
        match self.mode {
            FilterMode::AllowAll => self.to_blacklist_adding(tag),
            FilterMode::Whitelist => {
                self.entries.remove(tag);
            }
            FilterMode::Blacklist => {
                self.entries.insert(tag, ());
            }
        }
    }

    pub fn is_enabled(&self, tag: &str) -> bool {
        match self.mode {
            FilterMode::AllowAll => true,
            FilterMode::Whitelist => self.entries.contains(tag),
            FilterMode::Blacklist => !self.entries.contains(tag),
        }
    }

    /// Deactivates every entry without changing the mode.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys()
    }

    pub fn saturation(&self) -> usize {
        self.entries.saturation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_switches_to_whitelist() {
        let mut filter = TagFilter::new();
        filter.enable("A");
        assert_eq!(filter.mode(), FilterMode::Whitelist);
        assert!(filter.is_enabled("A"));
        assert!(!filter.is_enabled("B"));
    }

    #[test]
    fn test_disable_switches_to_blacklist() {
        let mut filter = TagFilter::new();
        filter.disable("A");
        assert_eq!(filter.mode(), FilterMode::Blacklist);
        assert!(!filter.is_enabled("A"));
        assert!(filter.is_enabled("B"));
    }

    #[test]
    fn test_whitelist_symmetry() {
        let mut filter = TagFilter::new();
        filter.to_empty_whitelist();
        filter.enable("X");
        assert!(filter.is_enabled("X"));
        for tag in ["Y", "Z", ""] {
            assert!(!filter.is_enabled(tag));
        }
        filter.disable("X");
        assert!(!filter.is_enabled("X"));
        assert_eq!(filter.mode(), FilterMode::Whitelist);
    }

    #[test]
    fn test_blacklist_symmetry() {
        let mut filter = TagFilter::new();
        filter.to_allow_all();
        filter.disable("X");
        assert!(!filter.is_enabled("X"));
        assert!(filter.is_enabled("Y"));
        filter.enable("X");
        assert!(filter.is_enabled("X"));
        assert_eq!(filter.mode(), FilterMode::Blacklist);
        // enabling an absent tag in blacklist mode is a no-op
        filter.enable("Missing");
        assert_eq!(filter.tags().count(), 0);
    }

    #[test]
    fn test_enable_is_idempotent() {
        let mut filter = TagFilter::new();
        filter.to_empty_whitelist();
        filter.enable("X");
        let once: Vec<String> = filter.tags().map(String::from).collect();
        filter.enable("X");
        let twice: Vec<String> = filter.tags().map(String::from).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_first_enable_starts_fresh_whitelist() {
        let mut filter = TagFilter::new();
        filter.disable("A");
        filter.to_allow_all();
        filter.enable("B");
        assert_eq!(filter.tags().collect::<Vec<_>>(), vec!["B"]);
    }

    #[test]
    fn test_clear_keeps_mode() {
        let mut filter = TagFilter::new();
        filter.enable("A");
        filter.clear();
        assert_eq!(filter.mode(), FilterMode::Whitelist);
        assert!(!filter.is_enabled("A"));

        filter.to_allow_all();
        filter.disable("A");
        filter.clear();
        assert_eq!(filter.mode(), FilterMode::Blacklist);
        assert!(filter.is_enabled("A"));
    }

    #[test]
    fn test_whitelist_saturation() {
        let mut filter = TagFilter::new();
        filter.to_empty_whitelist();
        for i in 0..MAX_TAG_FILTERS + 3 {
            filter.enable(&format!("Tag{i}"));
        }
        assert_eq!(filter.tags().count(), MAX_TAG_FILTERS);
        assert_eq!(filter.saturation(), 3);
        assert!(filter.is_enabled("Tag0"));
        assert!(!filter.is_enabled(&format!("Tag{}", MAX_TAG_FILTERS)));
    }

    #[test]
    fn test_long_tags_truncate_to_same_entry() {
        let prefix = "T".repeat(MAX_TAG_LENGTH);
        let mut filter = TagFilter::new();
        filter.enable(&format!("{prefix}_first"));
        assert!(filter.is_enabled(&format!("{prefix}_second")));
        assert!(filter.is_enabled(&prefix));
        assert!(!filter.is_enabled(&prefix[1..]));
    }
}
