use anyhow::Result;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use pubsearch_core::{ScrapedArticle, SearchResult, SearchService};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default = "default_k")]
    pub k: usize,
}
fn default_k() -> usize {
    pubsearch_core::DEFAULT_TOP_K
}

#[derive(Deserialize)]
pub struct TopicParams {
    /// Comma-separated keyword list for a topic.
    pub keywords: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchResult>,
}

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SearchService>,
}

pub fn build_app(service: Arc<SearchService>) -> Router {
    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any)
            } else {
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/ready", get(ready_handler))
        .route("/search", get(search_handler))
        .route("/topic", get(topic_handler))
        .with_state(AppState { service })
        .layer(cors)
}

pub async fn ready_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ready": state.service.is_ready() }))
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let k = params.k.clamp(1, 100);
    let results = state.service.search(&params.q, k);
    Json(SearchResponse {
        query: params.q,
        took_s: start.elapsed().as_secs_f64(),
        total_hits: results.len(),
        results,
    })
}

pub async fn topic_handler(
    State(state): State<AppState>,
    Query(params): Query<TopicParams>,
) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let keywords: Vec<String> = params
        .keywords
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    let results = state.service.search_topic(&keywords);
    Json(SearchResponse {
        query: params.keywords,
        took_s: start.elapsed().as_secs_f64(),
        total_hits: results.len(),
        results,
    })
}

/// Read every `.json` file in the scraped-articles directory. Each file is
/// one bulk-load item; a read or parse failure becomes that item's error so
/// the load skips it and continues. A missing directory means no content,
/// which the engine handles as title-only search.
pub fn read_article_dir(dir: &Path) -> Vec<(String, Result<ScrapedArticle>)> {
    let mut items = Vec::new();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "no scraped articles loaded");
            return items;
        }
    };
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        let id = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let article = fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|text| ScrapedArticle::from_json(&text));
        items.push((id, article));
    }
    items
}
