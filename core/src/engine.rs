use crate::content::ContentStore;
use crate::corpus::Publication;
use crate::preview::content_preview;
use crate::tokenizer::tokenize_query;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// How many characters of cached content join the title when scoring.
const SEARCH_CONTENT_CHARS: usize = 3000;
/// Raw score at which the absolute score component saturates.
const SATURATION_HITS: f32 = 3.0;

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub similarity_score: f32,
    pub content_preview: String,
    pub has_content: bool,
}

struct QueryTerm {
    token: String,
    whole_word: Regex,
}

fn compile_terms(query: &str) -> Vec<QueryTerm> {
    tokenize_query(query)
        .into_iter()
        .filter_map(|token| {
            let pattern = format!(r"\b{}\b", regex::escape(&token));
            let whole_word = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .ok()?;
            Some(QueryTerm { token, whole_word })
        })
        .collect()
}

/// Score every corpus record against the query and return the top `k`,
/// highest similarity first. Each token scores 1 for a substring hit plus a
/// 0.5 whole-word bonus; the final similarity is the larger of the match
/// ratio and a saturating absolute score, so a record with three or more hits
/// ranks at full weight regardless of query length. Records with zero overlap
/// are excluded. Ties keep corpus order (the sort is stable, with no
/// secondary comparison).
///
/// The score is a ranking weight, not a probability: with whole-word bonuses
/// the match ratio can exceed 1.0, and that is deliberate.
pub fn search(
    query: &str,
    corpus: &[Publication],
    content: &ContentStore,
    k: usize,
) -> Vec<SearchResult> {
    let terms = compile_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = Vec::new();
    for record in corpus {
        let cached = content.get(&record.link);
        let search_text = build_search_text(&record.title, cached.as_deref());

        let mut raw = 0.0f32;
        for term in &terms {
            if search_text.contains(term.token.as_str()) {
                raw += 1.0;
                if term.whole_word.is_match(&search_text) {
                    raw += 0.5;
                }
            }
        }

        let match_ratio = raw / terms.len().max(1) as f32;
        let absolute = (raw / SATURATION_HITS).min(1.0);
        let similarity = match_ratio.max(absolute);
        if similarity > 0.0 {
            results.push(SearchResult {
                title: record.title.clone(),
                link: record.link.clone(),
                similarity_score: similarity,
                content_preview: content_preview(&record.title, cached.as_deref()),
                has_content: cached.is_some(),
            });
        }
    }

    results.sort_by(|a, b| {
        b.similarity_score
            .partial_cmp(&a.similarity_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(k);
    results
}

/// The text a record is matched against: lowercased title, plus the first
/// 3000 characters of cached content when any exists.
fn build_search_text(title: &str, cached: Option<&str>) -> String {
    let mut text = title.to_lowercase();
    if let Some(content) = cached {
        let slice: String = content.chars().take(SEARCH_CONTENT_CHARS).collect();
        text.push(' ');
        text.push_str(&slice.to_lowercase());
    }
    text
}
