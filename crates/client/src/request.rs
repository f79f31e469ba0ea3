//! Route and query construction for the entity-linking service

use elinker_core::dataset::InputType;
use elinker_core::error::{Error, Result};
use url::Url;

/// Annotation mode requested from the service
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Spotting only
    Spot,
    /// Spotting and classification
    SpotClassify,
    /// Spotting and linking
    SpotLink,
    /// Spotting, linking and classification
    SpotLinkClassify,
}

impl Mode {
    /// Value of the `mode` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::SpotClassify => "spot,classify",
            Self::SpotLink => "spot,link",
            Self::SpotLinkClassify => "all",
        }
    }

    /// Whether the mode links against a dataset
    pub fn links(&self) -> bool {
        matches!(self, Self::SpotLink | Self::SpotLinkClassify)
    }
}

/// Service routes relative to a base endpoint
#[derive(Clone, Debug)]
pub struct Routes {
    base: Url,
}

impl Routes {
    /// Create routes under `base`
    pub fn new(base: Url) -> Result<Self> {
        if base.cannot_be_a_base() {
            return Err(Error::Configuration(format!("not a base URL: {}", base)));
        }
        Ok(Self { base })
    }

    /// Get the base URL
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/documents`
    pub fn documents(&self) -> Url {
        self.join(&["documents"])
    }

    /// `{base}/datasets`
    pub fn datasets(&self) -> Url {
        self.join(&["datasets"])
    }

    /// `{base}/datasets/{name}`, with `name` encoded as one segment
    pub fn dataset(&self, name: &str) -> Url {
        self.join(&["datasets", name])
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Query parameters for an annotation request
pub fn document_query(
    mode: Mode,
    language: &str,
    dataset: Option<&str>,
    output_format: &str,
    rdf_prefix: &str,
    num_links: Option<u32>,
) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("language", language.to_string()),
        ("outformat", output_format.to_string()),
        ("prefix", rdf_prefix.to_string()),
        ("mode", mode.as_param().to_string()),
    ];

    if mode.links() {
        if let Some(dataset) = dataset {
            query.push(("dataset", dataset.to_string()));
        }
        if let Some(num_links) = num_links {
            query.push(("numLinks", num_links.to_string()));
        }
    }

    query
}

/// Query parameters and optional body for a dataset create/update request
pub fn dataset_query(
    name: &str,
    input: &InputType,
    description: &str,
    format: &str,
    language: &str,
    properties: &[String],
) -> (Vec<(&'static str, String)>, Option<String>) {
    let mut query = vec![
        ("name", name.to_string()),
        ("description", description.to_string()),
        ("format", format.to_string()),
        ("language", language.to_string()),
    ];

    // one pair per property, values passed through verbatim
    query.extend(properties.iter().map(|p| ("properties", p.clone())));

    let body = match input {
        InputType::Inline { data } => Some(data.clone()),
        InputType::Sparql { endpoint, query: sparql } => {
            query.push(("endpoint", endpoint.clone()));
            query.push(("sparql", sparql.clone()));
            None
        }
    };

    (query, body)
}

/// Content type for inline dataset data in `format`
pub fn content_type_for_format(format: &str) -> &'static str {
    match format.to_ascii_lowercase().as_str() {
        "ttl" | "turtle" => "text/turtle",
        "json-ld" | "jsonld" => "application/ld+json",
        "rdf-xml" | "rdf/xml" | "rdfxml" => "application/rdf+xml",
        "n-triples" | "nt" => "application/n-triples",
        "n3" => "text/n3",
        "tsv" => "text/tab-separated-values",
        _ => "text/plain",
    }
}
