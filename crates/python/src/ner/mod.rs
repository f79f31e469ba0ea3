//! Python bindings for the entity-linking facade

use crate::convert::{dataset_to_dict, datasets_to_list};
use crate::error::to_py_err;
use elinker_client::HttpEngine;
use elinker_core::{Config, FremeNer, InputType};
use pyo3::prelude::*;

/// Dataset input shape
#[pyclass(name = "InputType")]
#[derive(Clone)]
pub struct PyInputType {
    inner: InputType,
}

#[pymethods]
impl PyInputType {
    /// Dataset content sent inline
    #[staticmethod]
    pub fn inline(data: String) -> Self {
        Self {
            inner: InputType::inline(data),
        }
    }

    /// Dataset content pulled from a SPARQL endpoint
    #[staticmethod]
    pub fn sparql(endpoint: String, query: String) -> Self {
        Self {
            inner: InputType::sparql(endpoint, query),
        }
    }

    #[getter]
    pub fn kind(&self) -> &'static str {
        self.inner.kind()
    }

    fn __repr__(&self) -> String {
        format!("InputType.{}(...)", self.inner.kind())
    }
}

/// Entity-linking facade over the HTTP engine
#[pyclass(name = "FremeNer")]
pub struct PyFremeNer {
    inner: FremeNer<HttpEngine>,
}

#[pymethods]
impl PyFremeNer {
    /// Connect to an entity-linking service
    #[new]
    #[pyo3(signature = (endpoint, timeout_secs=30, api_key=None))]
    pub fn new(endpoint: String, timeout_secs: u64, api_key: Option<String>) -> PyResult<Self> {
        let mut config = Config::new(endpoint).with_timeout_secs(timeout_secs);
        if let Some(api_key) = api_key {
            config = config.with_api_key(api_key);
        }
        Self::from_config(config)
    }

    /// Load the configuration from a JSON or YAML file, then apply `ELINKER_*` overrides
    #[staticmethod]
    pub fn from_file(path: String) -> PyResult<Self> {
        let config = Config::load(path).map_err(to_py_err)?;
        Self::from_config(config)
    }

    #[getter]
    pub fn endpoint(&self) -> String {
        self.inner.config().endpoint.clone()
    }

    pub fn spot(
        &self,
        py: Python<'_>,
        text: &str,
        language: &str,
        output_format: &str,
        rdf_prefix: &str,
    ) -> PyResult<String> {
        py.allow_threads(|| self.inner.spot(text, language, output_format, rdf_prefix))
            .map_err(to_py_err)
    }

    pub fn spot_classify(
        &self,
        py: Python<'_>,
        text: &str,
        language: &str,
        output_format: &str,
        rdf_prefix: &str,
    ) -> PyResult<String> {
        py.allow_threads(|| {
            self.inner
                .spot_classify(text, language, output_format, rdf_prefix)
        })
        .map_err(to_py_err)
    }

    #[pyo3(signature = (text, language, dataset, output_format, rdf_prefix, num_links=None))]
    pub fn spot_link(
        &self,
        py: Python<'_>,
        text: &str,
        language: &str,
        dataset: &str,
        output_format: &str,
        rdf_prefix: &str,
        num_links: Option<u32>,
    ) -> PyResult<String> {
        py.allow_threads(|| {
            self.inner
                .spot_link(text, language, dataset, output_format, rdf_prefix, num_links)
        })
        .map_err(to_py_err)
    }

    #[pyo3(signature = (text, language, dataset, output_format, rdf_prefix, num_links=None))]
    pub fn spot_link_classify(
        &self,
        py: Python<'_>,
        text: &str,
        language: &str,
        dataset: &str,
        output_format: &str,
        rdf_prefix: &str,
        num_links: Option<u32>,
    ) -> PyResult<String> {
        py.allow_threads(|| {
            self.inner
                .spot_link_classify(text, language, dataset, output_format, rdf_prefix, num_links)
        })
        .map_err(to_py_err)
    }

    /// Register a dataset; returns it as a dict
    #[pyo3(signature = (name, input, description, format, language, properties=Vec::new()))]
    pub fn add_dataset(
        &self,
        py: Python<'_>,
        name: &str,
        input: PyRef<'_, PyInputType>,
        description: &str,
        format: &str,
        language: &str,
        properties: Vec<String>,
    ) -> PyResult<PyObject> {
        let input = input.inner.clone();
        let dataset = py
            .allow_threads(|| {
                self.inner
                    .add_dataset(name, &input, description, format, language, &properties)
            })
            .map_err(to_py_err)?;
        dataset_to_dict(py, &dataset)
    }

    /// Replace a dataset's definition; returns it as a dict
    #[pyo3(signature = (name, input, description, format, language, properties=Vec::new()))]
    pub fn update_dataset(
        &self,
        py: Python<'_>,
        name: &str,
        input: PyRef<'_, PyInputType>,
        description: &str,
        format: &str,
        language: &str,
        properties: Vec<String>,
    ) -> PyResult<PyObject> {
        let input = input.inner.clone();
        let dataset = py
            .allow_threads(|| {
                self.inner
                    .update_dataset(name, &input, description, format, language, &properties)
            })
            .map_err(to_py_err)?;
        dataset_to_dict(py, &dataset)
    }

    pub fn delete_dataset(&self, py: Python<'_>, name: &str) -> PyResult<()> {
        py.allow_threads(|| self.inner.delete_dataset(name))
            .map_err(to_py_err)
    }

    pub fn get_dataset(&self, py: Python<'_>, name: &str) -> PyResult<PyObject> {
        let dataset = py
            .allow_threads(|| self.inner.get_dataset(name))
            .map_err(to_py_err)?;
        dataset_to_dict(py, &dataset)
    }

    pub fn get_all_datasets(&self, py: Python<'_>) -> PyResult<PyObject> {
        let datasets = py
            .allow_threads(|| self.inner.get_all_datasets())
            .map_err(to_py_err)?;
        datasets_to_list(py, &datasets)
    }
}

impl PyFremeNer {
    fn from_config(config: Config) -> PyResult<Self> {
        let inner = FremeNer::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }
}
