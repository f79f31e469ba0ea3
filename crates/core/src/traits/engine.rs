//! Entity-linking engine trait

use crate::config::EngineConfig;
use crate::dataset::{Dataset, InputType};
use crate::error::Result;

/// Entity-linking engine backend
///
/// Every spotting, linking and dataset operation the facade exposes lands
/// here unchanged. Validation, persistence and failure kinds are the
/// implementation's business.
pub trait NerEngine: Send + Sync {
    /// Build an engine from its configuration
    fn from_config(config: EngineConfig) -> Result<Self>
    where
        Self: Sized;

    /// Detect entity mentions in text
    fn spot(&self, text: &str, language: &str, output_format: &str, rdf_prefix: &str) -> Result<String>;

    /// Detect entity mentions and assign types
    fn spot_classify(
        &self,
        text: &str,
        language: &str,
        output_format: &str,
        rdf_prefix: &str,
    ) -> Result<String>;

    /// Detect entity mentions and link them against a dataset
    fn spot_link(
        &self,
        text: &str,
        language: &str,
        dataset: &str,
        output_format: &str,
        rdf_prefix: &str,
        num_links: Option<u32>,
    ) -> Result<String>;

    /// Detect, link and classify entity mentions
    fn spot_link_classify(
        &self,
        text: &str,
        language: &str,
        dataset: &str,
        output_format: &str,
        rdf_prefix: &str,
        num_links: Option<u32>,
    ) -> Result<String>;

    /// Register a new dataset
    fn add_dataset(
        &self,
        name: &str,
        input: &InputType,
        description: &str,
        format: &str,
        language: &str,
        properties: &[String],
    ) -> Result<Dataset>;

    /// Replace an existing dataset's definition
    fn update_dataset(
        &self,
        name: &str,
        input: &InputType,
        description: &str,
        format: &str,
        language: &str,
        properties: &[String],
    ) -> Result<Dataset>;

    /// Remove a dataset
    fn delete_dataset(&self, name: &str) -> Result<()>;

    /// Look up a dataset by name
    fn get_dataset(&self, name: &str) -> Result<Dataset>;

    /// List all datasets
    fn get_all_datasets(&self) -> Result<Vec<Dataset>>;

    /// Engine name for logging
    fn engine_name(&self) -> &str {
        "engine"
    }
}
