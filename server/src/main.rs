use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use pubsearch_core::SearchService;
use pubsearch_server::{build_app, read_article_dir};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Path to the two-column title,link publication corpus
    #[arg(long, default_value = "./data/publications.csv")]
    corpus: PathBuf,
    /// Directory of pre-scraped article JSON files
    #[arg(long, default_value = "./data/scraped_articles")]
    articles: PathBuf,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let corpus_text = std::fs::read_to_string(&args.corpus)
        .with_context(|| format!("reading corpus {}", args.corpus.display()))?;
    let articles = read_article_dir(&args.articles);
    let service = Arc::new(SearchService::initialize(&corpus_text, articles)?);

    let app: Router = build_app(service);
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
