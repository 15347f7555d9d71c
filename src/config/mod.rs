//! Configuration management for pumpdash

pub mod app_config;

pub use app_config::*;
