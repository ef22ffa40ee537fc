use reqwest::Url;

/// Builds the video-search URL for a movie's trailer
///
/// `base` is the search page, e.g. `https://www.youtube.com/results`; the title
/// plus " trailer" goes in the `search_query` parameter.
pub fn trailer_url(base: &Url, title: &str) -> Url {
    let query = format!("{} trailer", title.trim());
    let mut url = base.clone();
    url.query_pairs_mut().append_pair("search_query", &query);
    url
}
