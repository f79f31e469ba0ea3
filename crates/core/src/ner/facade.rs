//! Entity-linking facade

use crate::config::Config;
use crate::dataset::{Dataset, InputType};
use crate::error::Result;
use crate::traits::engine::NerEngine;

/// Typed entry point over an entity-linking engine
///
/// Holds the configuration it was built from and one engine. Each method
/// forwards its arguments to the engine and returns the engine's result,
/// errors included, untouched.
pub struct FremeNer<E: NerEngine> {
    config: Config,
    engine: E,
}

impl<E: NerEngine> FremeNer<E> {
    /// Build the engine from `config` and wrap it
    pub fn new(config: Config) -> Result<Self> {
        let engine_config = config.engine_config()?;
        let engine = E::from_config(engine_config)?;

        tracing::info!(
            engine = engine.engine_name(),
            endpoint = %config.endpoint,
            "Entity-linking facade ready"
        );

        Ok(Self { config, engine })
    }

    /// Wrap an already constructed engine
    pub fn with_engine(config: Config, engine: E) -> Self {
        Self { config, engine }
    }

    /// Detect entity mentions in text
    pub fn spot(&self, text: &str, language: &str, output_format: &str, rdf_prefix: &str) -> Result<String> {
        tracing::debug!(language, output_format, text_len = text.len(), "spot");
        self.engine.spot(text, language, output_format, rdf_prefix)
    }

    /// Detect entity mentions and assign types
    pub fn spot_classify(
        &self,
        text: &str,
        language: &str,
        output_format: &str,
        rdf_prefix: &str,
    ) -> Result<String> {
        tracing::debug!(language, output_format, text_len = text.len(), "spot_classify");
        self.engine.spot_classify(text, language, output_format, rdf_prefix)
    }

    /// Detect entity mentions and link them against `dataset`
    pub fn spot_link(
        &self,
        text: &str,
        language: &str,
        dataset: &str,
        output_format: &str,
        rdf_prefix: &str,
        num_links: Option<u32>,
    ) -> Result<String> {
        tracing::debug!(language, dataset, output_format, ?num_links, text_len = text.len(), "spot_link");
        self.engine
            .spot_link(text, language, dataset, output_format, rdf_prefix, num_links)
    }

    /// Detect, link and classify entity mentions
    pub fn spot_link_classify(
        &self,
        text: &str,
        language: &str,
        dataset: &str,
        output_format: &str,
        rdf_prefix: &str,
        num_links: Option<u32>,
    ) -> Result<String> {
        tracing::debug!(
            language,
            dataset,
            output_format,
            ?num_links,
            text_len = text.len(),
            "spot_link_classify"
        );
        self.engine
            .spot_link_classify(text, language, dataset, output_format, rdf_prefix, num_links)
    }

    /// Register a new dataset
    pub fn add_dataset(
        &self,
        name: &str,
        input: &InputType,
        description: &str,
        format: &str,
        language: &str,
        properties: &[String],
    ) -> Result<Dataset> {
        tracing::debug!(name, input = input.kind(), format, language, "add_dataset");
        self.engine
            .add_dataset(name, input, description, format, language, properties)
    }

    /// Replace an existing dataset's definition
    pub fn update_dataset(
        &self,
        name: &str,
        input: &InputType,
        description: &str,
        format: &str,
        language: &str,
        properties: &[String],
    ) -> Result<Dataset> {
        tracing::debug!(name, input = input.kind(), format, language, "update_dataset");
        self.engine
            .update_dataset(name, input, description, format, language, properties)
    }

    /// Remove a dataset
    pub fn delete_dataset(&self, name: &str) -> Result<()> {
        tracing::debug!(name, "delete_dataset");
        self.engine.delete_dataset(name)
    }

    /// Look up a dataset by name
    pub fn get_dataset(&self, name: &str) -> Result<Dataset> {
        tracing::debug!(name, "get_dataset");
        self.engine.get_dataset(name)
    }

    /// List all datasets, in engine order
    pub fn get_all_datasets(&self) -> Result<Vec<Dataset>> {
        tracing::debug!("get_all_datasets");
        self.engine.get_all_datasets()
    }

    /// Get the config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get reference to the engine
    pub fn engine(&self) -> &E {
        &self.engine
    }
}
