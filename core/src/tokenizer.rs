/// Tokenize a query into lowercase whitespace-delimited words, discarding
/// tokens of one or two characters. No stemming or stopword list: the length
/// filter is the whole of the short-word handling, and matching is substring
/// based downstream.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .map(str::to_string)
        .collect()
}
