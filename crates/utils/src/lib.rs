//! Shared utilities for elinker

pub mod text;
pub mod io;

pub use text::*;
pub use io::*;
