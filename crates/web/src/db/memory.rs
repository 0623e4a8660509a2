//! In-process inquiry table.

use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use tokio::sync::RwLock;

use rocketcall_core::{Inquiry, InquiryId, InquiryStatus, NewInquiry};

/// Inquiry rows held in memory, oldest first.
///
/// `created_at` is kept strictly increasing in insertion order, even when the
/// clock does not advance between two inserts.
#[derive(Debug, Clone, Default)]
pub struct MemoryInquiryStore {
    rows: Arc<RwLock<Vec<Inquiry>>>,
}

impl MemoryInquiryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, new: &NewInquiry) -> Inquiry {
        let mut rows = self.rows.write().await;

        let mut created_at = Utc::now();
        if let Some(last) = rows.last()
            && created_at <= last.created_at
        {
            created_at = last.created_at + TimeDelta::microseconds(1);
        }

        let inquiry = Inquiry {
            id: InquiryId::generate(),
            name: new.name().to_owned(),
            phone: new.phone().to_owned(),
            message: new.message().to_owned(),
            status: new.status(),
            created_at,
        };
        rows.push(inquiry.clone());
        inquiry
    }

    pub async fn list(&self) -> Vec<Inquiry> {
        let rows = self.rows.read().await;
        rows.iter().rev().cloned().collect()
    }

    pub async fn update_status(&self, id: InquiryId, status: InquiryStatus) {
        let mut rows = self.rows.write().await;
        if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
            row.status = status;
        }
    }

    pub async fn delete(&self, id: InquiryId) {
        self.rows.write().await.retain(|row| row.id != id);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}
