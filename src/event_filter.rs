use std::collections::HashMap;

use crate::{Detection, FilterConfig};

pub struct EventFilter {
    config: FilterConfig,
}

impl EventFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn apply(&self, events: &[Detection]) -> Vec<Detection> {
        if events.is_empty() {
            return Vec::new();
        }

        let mut merged: Vec<Detection> = Vec::new();
        let mut index_by_label: HashMap<String, usize> = HashMap::new();

        for event in events {
            // Step 1: blacklist filter
            if self.config.blacklist_enabled && self.config.blacklist.contains(&event.label) {
                continue;
            }

            // Step 2: label merge (single lookup, merged labels are not re-merged)
            let mut label = event.label.clone();
            if self.config.merge_enabled {
                if let Some(target) = self.config.merge_map.get(&label) {
                    label = target.clone();
                }
            }

            // Step 3: collapse duplicate labels, keeping the higher score
            match index_by_label.get(&label) {
                Some(&i) => {
                    if event.score > merged[i].score {
                        merged[i].score = event.score;
                    }
                }
                None => {
                    index_by_label.insert(label.clone(), merged.len());
                    merged.push(Detection {
                        label,
                        score: event.score,
                    });
                }
            }
        }

        // Sort by score (descending); stable, so equal scores keep encounter order
        merged.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        merged
    }
}
