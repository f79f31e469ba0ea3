//! Core trait definitions for elinker

pub mod engine;

pub use engine::*;
