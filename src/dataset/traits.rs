use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all dataset origins
/// The viewer only ever sees the loaded collection, so a bundled file can
/// be swapped for another origin without touching the core
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Load the full property collection from the origin
    async fn load(&self) -> Result<Vec<Property>>;

    /// Get the name of the dataset origin
    fn source_name(&self) -> &'static str;
}
