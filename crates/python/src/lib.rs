//! PyO3 Python bindings for elinker

use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

mod convert;
mod error;
pub mod ner;

use error::PythonError;

/// elinker: entity spotting, linking and dataset management
#[pymodule]
fn elinker_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    init_tracing();

    m.add_class::<ner::PyFremeNer>()?;
    m.add_class::<ner::PyInputType>()?;

    m.add("ElinkerError", m.py().get_type_bound::<PythonError>())?;

    Ok(())
}

/// Install a stderr subscriber honoring `RUST_LOG`, unless the host already has one
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
