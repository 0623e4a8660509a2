//! Inquiry inspection commands.
//!
//! Reads from whichever store `ROCKETCALL_STORE` selects. The `memory` store
//! is always empty here since it lives inside the web process.

use rocketcall_core::{StatusFilter, ValidationError};
use rocketcall_web::config::{ConfigError, StoreConfig};
use rocketcall_web::db::{InquiryStore, RepositoryError};
use rocketcall_web::notify::format_kst;
use thiserror::Error;

/// Errors that can occur while listing inquiries.
#[derive(Debug, Error)]
pub enum InquiriesError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid status filter: {0}")]
    Filter(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] RepositoryError),
}

/// Print inquiries as tab-separated lines, newest first.
pub async fn list(status: Option<&str>) -> Result<(), InquiriesError> {
    let filter = match status {
        Some(raw) => StatusFilter::Only(raw.parse()?),
        None => StatusFilter::All,
    };

    let store = InquiryStore::connect(&StoreConfig::from_env()?).await?;
    tracing::info!(store = store.kind(), "Listing inquiries");

    let rows: Vec<_> = store
        .list()
        .await?
        .into_iter()
        .filter(|inquiry| filter.matches(inquiry.status))
        .collect();

    #[allow(clippy::print_stdout)]
    {
        for inquiry in &rows {
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                inquiry.id,
                format_kst(inquiry.created_at),
                inquiry.status.as_str(),
                inquiry.name,
                inquiry.phone,
                if inquiry.message.is_empty() { "-" } else { &inquiry.message },
            );
        }
        println!("{} inquiries", rows.len());
    }

    Ok(())
}
