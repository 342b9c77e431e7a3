//! Service layer: the one decision point between the handlers and the store.

use crate::error::AppError;
use crate::model::CardRecord;
use crate::store::CardStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct CardDataService {
    store: Arc<dyn CardStore>,
}

impl CardDataService {
    pub fn new(store: Arc<dyn CardStore>) -> Self {
        CardDataService { store }
    }

    /// An absent or blank filter means the full unfiltered set; anything else
    /// narrows to that card type.
    pub async fn list(&self, card_type: Option<&str>) -> Result<Vec<CardRecord>, AppError> {
        match card_type {
            Some(t) if !t.trim().is_empty() => self.store.find_by_card_type(t).await,
            _ => self.store.find_all().await,
        }
    }

    /// Pass-through insert; the affected-row count is the caller's success
    /// signal.
    pub async fn create(&self, record: &CardRecord) -> Result<u64, AppError> {
        self.store.insert(record).await
    }

    /// True iff at least one row was deleted. A 0-row count is reported as
    /// false whether the id never existed or the delete raced another delete.
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.store.delete_by_id(id).await? >= 1)
    }
}
