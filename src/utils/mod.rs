//! Utility modules for pumpdash

pub mod logging;
