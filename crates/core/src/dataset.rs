//! Dataset records and dataset input shapes

use serde::{Deserialize, Serialize};

/// A named collection of reference entities used for linking
///
/// Records are produced by the engine; the facade only hands them back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Dataset name
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Serialization format of the dataset source (e.g. "TTL")
    #[serde(default)]
    pub format: String,

    /// Language of the dataset labels
    #[serde(default)]
    pub language: String,

    /// Properties used as entity labels
    #[serde(default)]
    pub properties: Vec<String>,

    /// Number of entities indexed by the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_entities: Option<u64>,

    /// Creation time in milliseconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<u64>,
}

impl Dataset {
    /// Create a dataset record
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        format: impl Into<String>,
        language: impl Into<String>,
        properties: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            format: format.into(),
            language: language.into(),
            properties,
            total_entities: None,
            creation_time: None,
        }
    }

    /// Set the entity count
    pub fn with_total_entities(mut self, total: u64) -> Self {
        self.total_entities = Some(total);
        self
    }
}

/// Shape of the data supplied when creating or updating a dataset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputType {
    /// Dataset content sent inline, serialized in the dataset format
    Inline {
        /// Serialized dataset content
        data: String,
    },

    /// Dataset content pulled by the engine from a SPARQL endpoint
    Sparql {
        /// SPARQL endpoint URL
        endpoint: String,
        /// Query selecting the dataset content
        query: String,
    },
}

impl InputType {
    /// Inline dataset content
    pub fn inline(data: impl Into<String>) -> Self {
        Self::Inline { data: data.into() }
    }

    /// Dataset content from a SPARQL endpoint
    pub fn sparql(endpoint: impl Into<String>, query: impl Into<String>) -> Self {
        Self::Sparql {
            endpoint: endpoint.into(),
            query: query.into(),
        }
    }

    /// Short name of the input shape
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Inline { .. } => "inline",
            Self::Sparql { .. } => "sparql",
        }
    }
}
