pub mod event_filter;
pub mod filter_config;
pub mod label_export;

pub use event_filter::EventFilter;
pub use filter_config::{FilterConfig, FilterStats};
pub use label_export::LabelExporter;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub score: f32,
}

impl Detection {
    pub fn new(label: &str, score: f32) -> Self {
        Self {
            label: label.to_string(),
            score,
        }
    }
}

pub type Result<T> = anyhow::Result<T>;
