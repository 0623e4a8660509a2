//! CLI command implementations.

pub mod inquiries;
pub mod migrate;
pub mod webhook;
