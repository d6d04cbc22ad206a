use crate::content::{ContentStore, ScrapedArticle};
use crate::corpus::{load_corpus, Publication};
use crate::engine::{self, SearchResult};
use anyhow::{bail, Result};
use std::collections::HashSet;

pub const DEFAULT_TOP_K: usize = 5;
const TOPIC_RESULTS_PER_KEYWORD: usize = 3;
const TOPIC_RESULT_LIMIT: usize = 10;

/// The owned search index: the publication corpus plus the content cache,
/// built once at startup. Read-only from the engine's point of view, so
/// queries are independent and reentrant.
pub struct SearchService {
    corpus: Vec<Publication>,
    content: ContentStore,
}

impl SearchService {
    /// Load the corpus and bulk-load pre-fetched article content. Per-item
    /// content failures are skipped and logged; an unparseable or empty
    /// corpus is the only fatal condition.
    pub fn initialize<I>(corpus_text: &str, articles: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Result<ScrapedArticle>)>,
    {
        let load = load_corpus(corpus_text);
        if load.records.is_empty() {
            bail!(
                "corpus parsed to zero records ({} malformed rows)",
                load.malformed_rows
            );
        }
        tracing::info!(
            records = load.records.len(),
            malformed = load.malformed_rows,
            "corpus loaded"
        );

        let content = ContentStore::new();
        let outcome = content.bulk_load(articles);
        tracing::info!(
            loaded = outcome.loaded,
            failed = outcome.failed_ids.len(),
            "article content loaded"
        );

        Ok(Self {
            corpus: load.records,
            content,
        })
    }

    pub fn is_ready(&self) -> bool {
        !self.corpus.is_empty()
    }

    /// Top-k lexical search. Returns an empty list when not ready or when no
    /// record overlaps the query; never an error.
    pub fn search(&self, query: &str, k: usize) -> Vec<SearchResult> {
        if !self.is_ready() {
            tracing::warn!("search called before corpus load");
            return Vec::new();
        }
        engine::search(query, &self.corpus, &self.content, k)
    }

    /// Aggregate search over a topic's keyword set: one underlying search per
    /// keyword, duplicates removed by link keeping the first occurrence,
    /// merged results re-sorted by score and capped. Pure composition over
    /// `search`; no ranking logic of its own.
    pub fn search_topic<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<SearchResult> {
        let mut merged: Vec<SearchResult> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for keyword in keywords {
            for result in self.search(keyword.as_ref(), TOPIC_RESULTS_PER_KEYWORD) {
                if seen.insert(result.link.clone()) {
                    merged.push(result);
                }
            }
        }
        merged.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        merged.truncate(TOPIC_RESULT_LIMIT);
        merged
    }

    pub fn publications(&self) -> &[Publication] {
        &self.corpus
    }

    /// Content cache, for ad hoc insertion or lookup after startup.
    pub fn content(&self) -> &ContentStore {
        &self.content
    }
}
