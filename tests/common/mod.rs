//! Common test utilities
#![allow(dead_code)]

use elinker_core::{Dataset, EngineConfig, Error, InputType, NerEngine, Result};
use std::cell::Cell;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};

thread_local! {
    static ENGINES_BUILT: Cell<usize> = Cell::new(0);
}

/// Number of engines built by `RecordingEngine::from_config` on this thread
pub fn engines_built() -> usize {
    ENGINES_BUILT.with(|count| count.get())
}

/// A call received by the recording engine
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub op: &'static str,
    pub args: Vec<String>,
}

/// Engine that records every call and answers deterministically
pub struct RecordingEngine {
    pub config: Option<EngineConfig>,
    pub calls: Mutex<Vec<Call>>,
    pub failure: Option<fn(&str) -> Error>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self {
            config: None,
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Make every call fail with the error built by `failure`
    pub fn failing(failure: fn(&str) -> Error) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str, args: Vec<String>) -> Result<()> {
        self.calls.lock().unwrap().push(Call { op, args });
        match self.failure {
            Some(failure) => Err(failure(op)),
            None => Ok(()),
        }
    }
}

fn input_arg(input: &InputType) -> String {
    match input {
        InputType::Inline { data } => format!("inline:{}", data),
        InputType::Sparql { endpoint, query } => format!("sparql:{}:{}", endpoint, query),
    }
}

impl NerEngine for RecordingEngine {
    fn from_config(config: EngineConfig) -> Result<Self> {
        ENGINES_BUILT.with(|count| count.set(count.get() + 1));
        Ok(Self {
            config: Some(config),
            ..Self::new()
        })
    }

    fn spot(&self, text: &str, language: &str, output_format: &str, rdf_prefix: &str) -> Result<String> {
        self.record("spot", vec![text.into(), language.into(), output_format.into(), rdf_prefix.into()])?;
        Ok(format!("<spot {}>", text))
    }

    fn spot_classify(&self, text: &str, language: &str, output_format: &str, rdf_prefix: &str) -> Result<String> {
        self.record(
            "spot_classify",
            vec![text.into(), language.into(), output_format.into(), rdf_prefix.into()],
        )?;
        Ok(format!("<spot_classify {}>", text))
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
        self.record(
            "spot_link",
            vec![
                text.into(),
                language.into(),
                dataset.into(),
                output_format.into(),
                rdf_prefix.into(),
                format!("{:?}", num_links),
            ],
        )?;
        Ok(format!("<spot_link {} {}>", text, dataset))
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
        self.record(
            "spot_link_classify",
            vec![
                text.into(),
                language.into(),
                dataset.into(),
                output_format.into(),
                rdf_prefix.into(),
                format!("{:?}", num_links),
            ],
        )?;
        Ok(format!("<spot_link_classify {} {}>", text, dataset))
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
        self.record(
            "add_dataset",
            vec![name.into(), input_arg(input), description.into(), format.into(), language.into()],
        )?;
        Ok(Dataset::new(name, description, format, language, properties.to_vec()))
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
        self.record(
            "update_dataset",
            vec![name.into(), input_arg(input), description.into(), format.into(), language.into()],
        )?;
        Ok(Dataset::new(name, description, format, language, properties.to_vec()).with_total_entities(1))
    }

    fn delete_dataset(&self, name: &str) -> Result<()> {
        self.record("delete_dataset", vec![name.into()])
    }

    fn get_dataset(&self, name: &str) -> Result<Dataset> {
        self.record("get_dataset", vec![name.into()])?;
        Ok(Dataset::new(name, "stored", "TTL", "en", vec![]))
    }

    fn get_all_datasets(&self) -> Result<Vec<Dataset>> {
        self.record("get_all_datasets", vec![])?;
        Ok(vec![
            Dataset::new("zeta", "", "TTL", "en", vec![]),
            Dataset::new("alpha", "", "TTL", "de", vec![]),
        ])
    }
}

/// Request captured by the one-shot server
#[derive(Clone, Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub target: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl CapturedRequest {
    /// Request path without the query
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    /// Decoded query parameters
    pub fn query(&self) -> HashMap<String, String> {
        let url = url::Url::parse(&format!("http://localhost{}", self.target)).unwrap();
        url.query_pairs().into_owned().collect()
    }

    /// Every decoded value of a repeated query parameter, in order
    pub fn query_all(&self, key: &str) -> Vec<String> {
        let url = url::Url::parse(&format!("http://localhost{}", self.target)).unwrap();
        url.query_pairs()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .collect()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

/// Serve exactly one HTTP response on a loopback port.
///
/// Returns the base endpoint (`http://127.0.0.1:<port>/ner`) and a handle
/// yielding the request that was received.
pub fn serve_once(status: &str, content_type: &str, body: &str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}/ner", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        content_type,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });

    (base, handle)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).unwrap();
        assert!(n > 0, "connection closed before headers were complete");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap().split(' ');
    let method = request_line.next().unwrap().to_string();
    let target = request_line.next().unwrap().to_string();

    let headers: HashMap<String, String> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
        .collect();

    let content_length: usize = headers
        .get("content-length")
        .map(|v| v.parse().unwrap())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).unwrap();
        assert!(n > 0, "connection closed before body was complete");
        buf.extend_from_slice(&chunk[..n]);
    }

    let body = String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string();

    CapturedRequest {
        method,
        target,
        headers,
        body,
    }
}
