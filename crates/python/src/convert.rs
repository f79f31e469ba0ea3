//! Type conversions between Rust and Python

use elinker_core::Dataset;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

/// Convert a dataset record to a Python dict
pub fn dataset_to_dict(py: Python, dataset: &Dataset) -> PyResult<PyObject> {
    let dict = PyDict::new_bound(py);
    dict.set_item("name", &dataset.name)?;
    dict.set_item("description", &dataset.description)?;
    dict.set_item("format", &dataset.format)?;
    dict.set_item("language", &dataset.language)?;
    dict.set_item("properties", &dataset.properties)?;
    dict.set_item("total_entities", dataset.total_entities)?;
    dict.set_item("creation_time", dataset.creation_time)?;
    Ok(dict.into())
}

/// Convert dataset records to a Python list of dicts
pub fn datasets_to_list(py: Python, datasets: &[Dataset]) -> PyResult<PyObject> {
    let list = PyList::empty_bound(py);
    for dataset in datasets {
        list.append(dataset_to_dict(py, dataset)?)?;
    }
    Ok(list.into())
}
