use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A pre-scraped article as produced by the external fetch step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedArticle {
    pub title: String,
    pub url: String,
    pub pmc_id: String,
    pub content: String,
    #[serde(default)]
    pub content_length: usize,
    #[serde(default)]
    pub scraped_date: String,
}

impl ScrapedArticle {
    /// Parse one scraped-article JSON payload.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Outcome of a bulk content load. Partial failure is a normal result, not an
/// error: the ids that could not be loaded are reported alongside the count
/// that could.
#[derive(Debug, Default)]
pub struct BulkLoadOutcome {
    pub loaded: usize,
    pub failed_ids: Vec<String>,
}

/// In-memory cache from a publication's link to its fetched full text.
/// Single writer during the startup bulk load, many readers afterwards;
/// grows monotonically for the life of the process (the candidate set is
/// small and capped by the bounded startup list, so there is no eviction).
#[derive(Default)]
pub struct ContentStore {
    inner: RwLock<HashMap<String, String>>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, link: &str) -> Option<String> {
        self.inner.read().get(link).cloned()
    }

    pub fn put(&self, link: impl Into<String>, content: impl Into<String>) {
        self.inner.write().insert(link.into(), content.into());
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Load a batch of pre-fetched articles, keyed by the article's url.
    /// Items are independent: a failed read or parse skips that id and the
    /// load continues with the rest.
    pub fn bulk_load<I>(&self, items: I) -> BulkLoadOutcome
    where
        I: IntoIterator<Item = (String, anyhow::Result<ScrapedArticle>)>,
    {
        let mut outcome = BulkLoadOutcome::default();
        for (id, item) in items {
            match item {
                Ok(article) => {
                    self.put(article.url, article.content);
                    outcome.loaded += 1;
                }
                Err(err) => {
                    tracing::warn!(%id, error = %err, "skipping article");
                    outcome.failed_ids.push(id);
                }
            }
        }
        outcome
    }
}
