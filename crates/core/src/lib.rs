//! RocketCall Core - Shared domain types.
//!
//! This crate provides the types used across all RocketCall components:
//! - `web` - Marketing site, inquiry API and admin panel
//! - `cli` - Command-line tools for migrations and operations
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no database
//! access, no HTTP clients. The optional `postgres` feature adds `sqlx`
//! encodings so the web crate can bind these types directly.
//!
//! # Modules
//!
//! - [`types`] - Inquiry entity, identifiers, status lifecycle and validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
