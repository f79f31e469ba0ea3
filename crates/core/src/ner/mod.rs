//! Entity spotting and linking facade

pub mod facade;

pub use facade::*;
