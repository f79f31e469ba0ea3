//! HTTP engine adapter for elinker
//!
//! [`HttpEngine`] implements [`elinker_core::NerEngine`] by forwarding each
//! operation to a remote entity-linking service over blocking HTTP.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod http;
pub mod request;

pub use http::*;
pub use request::*;
