use crate::dataset::traits::DatasetSource;
use crate::models::Property;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Top-level shape of the dataset file
#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    properties: Vec<Property>,
}

/// Dataset origin backed by a bundled JSON file
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DatasetSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Property>> {
        debug!("Reading dataset file: {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read dataset file {}", self.path.display()))?;

        let parsed: DatasetFile = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed dataset file {}", self.path.display()))?;

        info!(
            "Loaded {} properties from {}",
            parsed.properties.len(),
            self.path.display()
        );

        Ok(parsed.properties)
    }

    fn source_name(&self) -> &'static str {
        "bundled JSON file"
    }
}
