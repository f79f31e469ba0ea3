//! elinker Core Library
//!
//! Configuration, dataset records, the engine trait and the facade that
//! forwards spotting, linking and dataset calls to an engine.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod traits;

pub mod ner;

pub use config::{Config, EngineConfig};
pub use dataset::{Dataset, InputType};
pub use error::{Error, Result};
pub use ner::*;
pub use traits::*;
