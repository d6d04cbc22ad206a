use anyhow::anyhow;
use pubsearch_core::{ScrapedArticle, SearchService, DEFAULT_TOP_K};

type ArticleItem = (String, anyhow::Result<ScrapedArticle>);

fn no_articles() -> Vec<ArticleItem> {
    Vec::new()
}

fn article(url: &str, content: &str) -> ScrapedArticle {
    ScrapedArticle {
        title: "scraped".into(),
        url: url.into(),
        pmc_id: "PMC0".into(),
        content: content.into(),
        content_length: content.len(),
        scraped_date: "2024-01-01".into(),
    }
}

#[test]
fn end_to_end_bone_density_scenario() {
    let corpus = concat!(
        "Title,Link\n",
        "Microgravity and Bone Density,L1\n",
        "Plant Growth Studies,L2\n",
    );
    let service = SearchService::initialize(corpus, no_articles()).unwrap();
    assert!(service.is_ready());

    let results = service.search("bone density", DEFAULT_TOP_K);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].link, "L1");
    assert!(results[0].similarity_score > 0.0);
}

#[test]
fn empty_corpus_fails_initialization() {
    assert!(SearchService::initialize("Title,Link\n", no_articles()).is_err());
    assert!(SearchService::initialize("Title,Link\nno delimiter\n", no_articles()).is_err());
}

#[test]
fn content_failures_do_not_fail_initialization() {
    let corpus = "Title,Link\nMicrogravity and Bone Density,https://x/1\n";
    let items: Vec<ArticleItem> = vec![
        ("good.json".into(), Ok(article("https://x/1", "bone loss in flight"))),
        ("bad.json".into(), Err(anyhow!("connection reset"))),
    ];
    let service = SearchService::initialize(corpus, items).unwrap();
    assert_eq!(service.content().len(), 1);

    let results = service.search("flight", 5);
    assert_eq!(results.len(), 1);
    assert!(results[0].has_content);
}

#[test]
fn no_match_returns_empty_not_error() {
    let corpus = "Title,Link\nPlant Growth Studies,L2\n";
    let service = SearchService::initialize(corpus, no_articles()).unwrap();
    assert!(service.search("xylophone", 5).is_empty());
    assert!(service.search("", 5).is_empty());
}

#[test]
fn topic_search_dedupes_and_resorts() {
    let corpus = concat!(
        "Title,Link\n",
        "alpha beta overlap study,L1\n",
        "alpha only study,L2\n",
        "beta only study,L3\n",
    );
    let service = SearchService::initialize(corpus, no_articles()).unwrap();
    let results = service.search_topic(&["alpha", "beta"]);

    // L1 matches both keywords but appears once, first occurrence kept.
    assert_eq!(results.len(), 3);
    let links: Vec<&str> = results.iter().map(|r| r.link.as_str()).collect();
    assert_eq!(links.iter().filter(|l| **l == "L1").count(), 1);
    for pair in results.windows(2) {
        assert!(pair[0].similarity_score >= pair[1].similarity_score);
    }
}

#[test]
fn topic_search_caps_results_at_ten() {
    let mut corpus = String::from("Title,Link\n");
    let keywords = ["alpha", "beta", "gamma", "delta"];
    for keyword in &keywords {
        for i in 0..3 {
            corpus.push_str(&format!("{keyword} study number {i},https://x/{keyword}/{i}\n"));
        }
    }
    let service = SearchService::initialize(&corpus, no_articles()).unwrap();
    let results = service.search_topic(&keywords);
    assert_eq!(results.len(), 10);
}

#[test]
fn ad_hoc_content_insertion_is_visible_to_search() {
    let corpus = "Title,Link\nPlant Growth Studies,https://x/1\n";
    let service = SearchService::initialize(corpus, no_articles()).unwrap();
    assert!(service.search("osteoblast", 5).is_empty());

    service
        .content()
        .put("https://x/1", "osteoblast activity under microgravity");
    let results = service.search("osteoblast", 5);
    assert_eq!(results.len(), 1);
    assert!(results[0].has_content);
}
