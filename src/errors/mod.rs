//! Error types for pumpdash

pub mod types;

pub use types::*;
