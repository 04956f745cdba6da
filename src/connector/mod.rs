//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion (reqwest against an OpenAI-compatible endpoint)
//! - Language identification (whatlang)

pub mod adapter;

pub use adapter::*;
