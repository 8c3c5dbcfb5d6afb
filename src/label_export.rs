use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;

pub const MODEL_CONFIG_FILE: &str = "config.json";
pub const LABELS_OUTPUT_FILE: &str = "all_labels.json";

// Subset of the model config; everything besides the vocabulary is ignored
#[derive(Debug, Deserialize)]
struct ModelConfig {
    id2label: Option<BTreeMap<String, String>>,
}

pub struct LabelExporter {
    config_path: PathBuf,
}

impl LabelExporter {
    pub fn new<P: AsRef<Path>>(model_dir: P) -> Self {
        Self {
            config_path: model_dir.as_ref().join(MODEL_CONFIG_FILE),
        }
    }

    pub fn load_vocabulary(&self) -> Result<BTreeMap<String, String>> {
        info!("Loading model config: {}", self.config_path.display());

        let raw = fs::read_to_string(&self.config_path).map_err(|e| {
            anyhow::anyhow!(
                "Failed to read model config {}: {}",
                self.config_path.display(),
                e
            )
        })?;
        let config: ModelConfig = serde_json::from_str(&raw)?;

        config.id2label.ok_or_else(|| {
            anyhow::anyhow!(
                "Labels not found in model config: {}",
                self.config_path.display()
            )
        })
    }

    pub fn export(&self) -> Result<BTreeMap<String, String>> {
        self.export_to(LABELS_OUTPUT_FILE)
    }

    pub fn export_to<P: AsRef<Path>>(&self, output: P) -> Result<BTreeMap<String, String>> {
        let id2label = self.load_vocabulary()?;

        println!("Total labels: {}", id2label.len());

        let json = serde_json::to_string_pretty(&id2label)?;
        fs::write(output.as_ref(), json)?;
        println!("Exported to: {}", output.as_ref().display());

        Self::print_sorted(&id2label);

        Ok(id2label)
    }

    fn print_sorted(id2label: &BTreeMap<String, String>) {
        println!("\n{}", "=".repeat(80));
        println!("ALL LABELS (alphabetically sorted)");
        println!("{}", "=".repeat(80));

        let mut labels: Vec<(&String, &String)> = id2label.iter().collect();
        labels.sort_by_key(|(_, label)| label.to_lowercase());

        for (idx, label) in labels {
            println!("{:>4}: {}", idx, label);
        }
    }
}
