//! elinker: entity spotting, linking and dataset management
//!
//! Re-exports the core facade together with the HTTP engine adapter.

#![warn(missing_docs)]

pub use elinker_client::HttpEngine;
pub use elinker_core::*;

/// Facade bound to the HTTP engine
pub type HttpFremeNer = FremeNer<HttpEngine>;
