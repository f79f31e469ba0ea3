//! Blocking HTTP engine

use crate::request::{content_type_for_format, dataset_query, document_query, Mode, Routes};
use elinker_core::config::EngineConfig;
use elinker_core::dataset::{Dataset, InputType};
use elinker_core::error::{Error, Result};
use elinker_core::traits::engine::NerEngine;
use elinker_utils::text::truncate_smart;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};

/// Header carrying the API key
pub const AUTH_HEADER: &str = "X-Auth-Token";

const LOG_PREVIEW_CHARS: usize = 160;

/// Engine that forwards every operation to a remote entity-linking service
#[derive(Clone, Debug)]
pub struct HttpEngine {
    client: Client,
    routes: Routes,
    api_key: Option<String>,
}

impl HttpEngine {
    /// Get the service routes
    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    #[allow(clippy::too_many_arguments)]
    fn annotate(
        &self,
        mode: Mode,
        text: &str,
        language: &str,
        dataset: Option<&str>,
        output_format: &str,
        rdf_prefix: &str,
        num_links: Option<u32>,
    ) -> Result<String> {
        let query = document_query(mode, language, dataset, output_format, rdf_prefix, num_links);
        let request = self
            .client
            .post(self.routes.documents())
            .query(&query)
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(text.to_string());

        read_text(self.send(request)?)
    }

    #[allow(clippy::too_many_arguments)]
    fn write_dataset(
        &self,
        method: Method,
        url: url::Url,
        name: &str,
        input: &InputType,
        description: &str,
        format: &str,
        language: &str,
        properties: &[String],
    ) -> Result<Dataset> {
        let (query, body) = dataset_query(name, input, description, format, language, properties);
        let mut request = self.client.request(method, url).query(&query);
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, content_type_for_format(format))
                .body(body);
        }

        let body = read_text(self.send(request)?)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = match &self.api_key {
            Some(key) => request.header(AUTH_HEADER, key),
            None => request,
        };

        let request = request.build().map_err(transport)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "Sending engine request");

        let response = self.client.execute(request).map_err(transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or_default().to_string());
        tracing::debug!(
            status = status.as_u16(),
            body = %truncate_smart(&message, LOG_PREVIEW_CHARS),
            "Engine request failed"
        );

        Err(match status {
            StatusCode::NOT_FOUND => Error::NotFound(message),
            StatusCode::CONFLICT => Error::AlreadyExists(message),
            _ => Error::Engine {
                status: status.as_u16(),
                message,
            },
        })
    }
}

fn read_text(response: Response) -> Result<String> {
    let body = response.text().map_err(transport)?;
    tracing::debug!(body = %truncate_smart(&body, LOG_PREVIEW_CHARS), "Engine response");
    Ok(body)
}

fn transport(err: reqwest::Error) -> Error {
    Error::Transport(err.to_string())
}

impl NerEngine for HttpEngine {
    fn from_config(config: EngineConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            routes: Routes::new(config.endpoint)?,
            api_key: config.api_key,
        })
    }

    fn spot(&self, text: &str, language: &str, output_format: &str, rdf_prefix: &str) -> Result<String> {
        self.annotate(Mode::Spot, text, language, None, output_format, rdf_prefix, None)
    }

    fn spot_classify(
        &self,
        text: &str,
        language: &str,
        output_format: &str,
        rdf_prefix: &str,
    ) -> Result<String> {
        self.annotate(Mode::SpotClassify, text, language, None, output_format, rdf_prefix, None)
    }

    fn spot_link(
        &self,
        text: &str,
        language: &str,
        dataset: &str,
        output_format: &str,
        rdf_prefix: &str,
        num_links: Option<u32>,
    ) -> Result<String> {
        self.annotate(Mode::SpotLink, text, language, Some(dataset), output_format, rdf_prefix, num_links)
    }

    fn spot_link_classify(
        &self,
        text: &str,
        language: &str,
        dataset: &str,
        output_format: &str,
        rdf_prefix: &str,
        num_links: Option<u32>,
    ) -> Result<String> {
        self.annotate(
            Mode::SpotLinkClassify,
            text,
            language,
            Some(dataset),
            output_format,
            rdf_prefix,
            num_links,
        )
    }

    fn add_dataset(
        &self,
        name: &str,
        input: &InputType,
        description: &str,
        format: &str,
        language: &str,
        properties: &[String],
    ) -> Result<Dataset> {
        self.write_dataset(
            Method::POST,
            self.routes.datasets(),
            name,
            input,
            description,
            format,
            language,
            properties,
        )
    }

    fn update_dataset(
        &self,
        name: &str,
        input: &InputType,
        description: &str,
        format: &str,
        language: &str,
        properties: &[String],
    ) -> Result<Dataset> {
        self.write_dataset(
            Method::PUT,
            self.routes.dataset(name),
            name,
            input,
            description,
            format,
            language,
            properties,
        )
    }

    fn delete_dataset(&self, name: &str) -> Result<()> {
        self.send(self.client.delete(self.routes.dataset(name)))?;
        Ok(())
    }

    fn get_dataset(&self, name: &str) -> Result<Dataset> {
        let body = read_text(self.send(self.client.get(self.routes.dataset(name)))?)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn get_all_datasets(&self) -> Result<Vec<Dataset>> {
        let body = read_text(self.send(self.client.get(self.routes.datasets()))?)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn engine_name(&self) -> &str {
        "http"
    }
}
