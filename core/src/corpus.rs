use serde::{Deserialize, Serialize};

/// One title/link row from the publication corpus. Order of appearance in the
/// source text is the canonical order, used to break ranking ties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Default)]
pub struct CorpusLoad {
    pub records: Vec<Publication>,
    pub malformed_rows: usize,
}

/// Parse two-column `title,link` text. The first line is a header and is
/// discarded. Rows are split at the *last* comma so titles that themselves
/// contain commas survive; quote characters are stripped and both parts
/// trimmed. A row that does not yield a non-empty title and link is dropped
/// and counted, never raised — the source format is known to be imperfect.
pub fn load_corpus(raw: &str) -> CorpusLoad {
    let mut load = CorpusLoad::default();
    for line in raw.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_row(line) {
            Some(record) => load.records.push(record),
            None => load.malformed_rows += 1,
        }
    }
    load
}

fn parse_row(line: &str) -> Option<Publication> {
    let idx = line.rfind(',')?;
    if idx == 0 {
        return None;
    }
    let title = clean_field(&line[..idx]);
    let link = clean_field(&line[idx + 1..]);
    if title.is_empty() || link.is_empty() {
        return None;
    }
    Some(Publication { title, link })
}

fn clean_field(part: &str) -> String {
    part.replace('"', "").trim().to_string()
}
