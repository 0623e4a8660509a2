//! Types stored in sessions.

pub mod session;

pub use session::{AdminSession, keys as session_keys};
