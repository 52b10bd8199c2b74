//! Process-wide in-memory registry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRegistry;
use crate::error::AppError;

#[derive(Default)]
struct Store {
    records: HashMap<String, ShortUrl>,
    insertion_order: Vec<String>,
}

/// In-memory [`UrlRegistry`] holding every record for the process lifetime.
///
/// All mutations run under a single write lock: a duplicate shortcode can
/// never be inserted, and concurrent click increments are never lost. The
/// lock is never held across an await point. Records are never evicted;
/// expiry is enforced at read time by the service layer.
pub struct InMemoryUrlRegistry {
    store: RwLock<Store>,
    next_id: AtomicI64,
}

impl InMemoryUrlRegistry {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUrlRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRegistry for InMemoryUrlRegistry {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut store = self.store.write();

        if store.records.contains_key(&new_url.shortcode) {
            return Err(AppError::conflict("Shortcode already exists"));
        }

        let record = ShortUrl {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            shortcode: new_url.shortcode.clone(),
            original_url: new_url.original_url,
            created_at: Utc::now(),
            expires_at: new_url.expires_at,
            clicks: 0,
        };

        store.insertion_order.push(new_url.shortcode.clone());
        store.records.insert(new_url.shortcode, record.clone());

        Ok(record)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.store.read().records.get(code).cloned())
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), AppError> {
        if let Some(record) = self.store.write().records.get_mut(code) {
            record.clicks += 1;
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ShortUrl>, AppError> {
        let store = self.store.read();

        Ok(store
            .insertion_order
            .iter()
            .filter_map(|code| store.records.get(code))
            .cloned()
            .collect())
    }
}
