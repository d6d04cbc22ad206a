pub mod content;
pub mod corpus;
pub mod engine;
pub mod preview;
pub mod service;
pub mod tokenizer;

pub use content::{BulkLoadOutcome, ContentStore, ScrapedArticle};
pub use corpus::{load_corpus, CorpusLoad, Publication};
pub use engine::SearchResult;
pub use service::{SearchService, DEFAULT_TOP_K};
