// Search links for manually checking a sentence against the web.
//
// Nothing is fetched. Each sentence becomes a handful of URLs the user can
// open themselves: a general web search, three site-restricted searches, and
// a video search.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

const GOOGLE_SEARCH: &str = "https://www.google.com/search?q=";
const YOUTUBE_SEARCH: &str = "https://www.youtube.com/results?search_query=";

/// One labelled search URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchLink {
    pub label: &'static str,
    pub url: String,
}

/// Encode a sentence as a query string: words percent-encoded, joined by `+`.
pub fn encode_query(sentence: &str) -> String {
    sentence
        .split_whitespace()
        .map(|word| utf8_percent_encode(word, NON_ALPHANUMERIC).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Build the search links for one sentence, in display order.
pub fn search_links(sentence: &str) -> Vec<SearchLink> {
    let query = encode_query(sentence);
    let site = |domain: &str| format!("{GOOGLE_SEARCH}{query}+site:{domain}");

    vec![
        SearchLink {
            label: "Google General Search",
            url: format!("{GOOGLE_SEARCH}{query}"),
        },
        SearchLink {
            label: "Google Scholar Search",
            url: site("scholar.google.com"),
        },
        SearchLink {
            label: "Google Books Search",
            url: site("books.google.com"),
        },
        SearchLink {
            label: "Google News Search",
            url: site("news.google.com"),
        },
        SearchLink {
            label: "YouTube Related Videos",
            url: format!("{YOUTUBE_SEARCH}{query}"),
        },
    ]
}
