use serde::Serialize;
use std::collections::{HashMap, HashSet};

// Events that are not useful for behavior analysis
pub const BLACKLIST_EVENTS: &[&str] = &[
    // Noise
    "White noise",
    "Static",
    "Hum",
    "Background noise",
    // Insects
    "Insect",
    "Cricket",
    "Crickets",
    // Animals
    "Snake",
    "Sheep",
    // Other
    "Arrow",
];

// Format: ("Original Label", "Merged Label")
pub const LABEL_MERGE_MAP: &[(&str, &str)] = &[
    // Clock sounds
    ("Tick", "Tick-tock"),
    // Child speech variants collapse into one category
    ("Child speech, kid speaking", "Child speech"),
    ("Children shouting", "Child speech"),
    ("Baby cry, infant cry", "Child speech"),
    ("Babbling", "Child speech"),
    ("Children playing", "Child speech"),
];

#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub blacklist_enabled: bool,
    pub merge_enabled: bool,
    pub blacklist: HashSet<String>,
    pub merge_map: HashMap<String, String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl FilterConfig {
    pub fn new(blacklist_enabled: bool, merge_enabled: bool) -> Self {
        Self {
            blacklist_enabled,
            merge_enabled,
            blacklist: BLACKLIST_EVENTS.iter().map(|s| s.to_string()).collect(),
            merge_map: LABEL_MERGE_MAP
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    pub fn with_tables(
        blacklist_enabled: bool,
        merge_enabled: bool,
        blacklist: HashSet<String>,
        merge_map: HashMap<String, String>,
    ) -> Self {
        Self {
            blacklist_enabled,
            merge_enabled,
            blacklist,
            merge_map,
        }
    }

    pub fn stats(&self) -> FilterStats {
        // Disabled stages report empty contents, table sizes stay as authored
        let mut blacklist_events: Vec<String> = if self.blacklist_enabled {
            self.blacklist.iter().cloned().collect()
        } else {
            Vec::new()
        };
        blacklist_events.sort();

        FilterStats {
            blacklist_enabled: self.blacklist_enabled,
            blacklist_count: self.blacklist.len(),
            label_merge_enabled: self.merge_enabled,
            label_merge_count: self.merge_map.len(),
            blacklist_events,
            merge_rules: if self.merge_enabled {
                self.merge_map.clone()
            } else {
                HashMap::new()
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterStats {
    pub blacklist_enabled: bool,
    pub blacklist_count: usize,
    pub label_merge_enabled: bool,
    pub label_merge_count: usize,
    pub blacklist_events: Vec<String>,
    pub merge_rules: HashMap<String, String>,
}
