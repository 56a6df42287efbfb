//! In-memory implementation of the link registry.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::RegistryError;
use crate::domain::entities::{Registration, RegistrySummary, UrlRecord};
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

/// Default number of candidate codes tried before giving up.
pub const DEFAULT_MAX_CODE_ATTEMPTS: usize = 10;

#[derive(Default)]
struct Tables {
    /// short code -> record
    records: HashMap<String, UrlRecord>,
    /// original url -> short code
    codes_by_url: HashMap<String, String>,
}

/// Registry of short links held in process memory.
///
/// One coarse `RwLock` covers both indexes and the click counters inside
/// records, so every operation sees and leaves them consistent. Registration
/// and resolution take the write lock; lookups and listings share the read lock.
/// The lock is never held across an `.await`.
pub struct InMemoryLinkRepository {
    tables: RwLock<Tables>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl InMemoryLinkRepository {
    /// Creates an empty registry with random codes and the default attempt bound.
    pub fn new() -> Self {
        Self::with_generator(Arc::new(RandomCodeGenerator), DEFAULT_MAX_CODE_ATTEMPTS)
    }

    /// Creates an empty registry drawing candidates from `generator`.
    ///
    /// `max_attempts` is clamped to at least one.
    pub fn with_generator(generator: Arc<dyn CodeGenerator>, max_attempts: usize) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Number of candidate codes tried per registration before giving up.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn register(&self, url: &str) -> Result<Registration, RegistryError> {
        let mut tables = self.tables.write();

        if let Some(code) = tables.codes_by_url.get(url)
            && let Some(existing) = tables.records.get(code)
        {
            return Ok(Registration::Existing(existing.clone()));
        }

        for _ in 0..self.max_attempts {
            let code = self.generator.generate();
            if tables.records.contains_key(&code) {
                continue;
            }

            let record = UrlRecord::new(code.clone(), url.to_string());
            tables.codes_by_url.insert(url.to_string(), code.clone());
            tables.records.insert(code, record.clone());

            return Ok(Registration::Created(record));
        }

        Err(RegistryError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    async fn resolve(&self, code: &str) -> Result<UrlRecord, RegistryError> {
        let mut tables = self.tables.write();

        let record = tables
            .records
            .get_mut(code)
            .ok_or_else(|| RegistryError::not_found(code))?;
        record.record_click();

        Ok(record.clone())
    }

    async fn stats(&self, code: &str) -> Result<UrlRecord, RegistryError> {
        self.tables
            .read()
            .records
            .get(code)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(code))
    }

    async fn list(&self) -> Vec<UrlRecord> {
        let mut records: Vec<UrlRecord> = self.tables.read().records.values().cloned().collect();

        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.short_code.cmp(&b.short_code))
        });
        records
    }

    async fn remove(&self, code: &str) -> bool {
        let mut tables = self.tables.write();

        match tables.records.remove(code) {
            Some(record) => {
                tables.codes_by_url.remove(&record.original_url);
                true
            }
            None => false,
        }
    }

    async fn summary(&self) -> RegistrySummary {
        let tables = self.tables.read();
        let total_clicks = tables.records.values().map(|r| r.click_count).sum();

        RegistrySummary::from_totals(tables.records.len(), total_clicks)
    }
}
