//! Remote operations against the event-pump backend
//!
//! This module provides the client side of the three pipeline endpoints and
//! the [`PipelineApi`] seam the dashboard talks to.

pub mod client;

pub use client::*;
