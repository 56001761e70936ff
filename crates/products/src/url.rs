//! Shareable URL state.
//!
//! Only the category is persisted, as `?category=<label>`. The `All` selection is
//! written as the bare path so the canonical "all products" URL has no query
//! string. Search text never appears in a URL.

use ::url::form_urlencoded;

use crate::category::CategoryFilter;
use crate::query::QueryState;

/// Query parameter that carries the category selection.
pub const CATEGORY_PARAM: &str = "category";

/// Canonical URL for `state` under `path`.
pub fn encode(path: &str, state: &QueryState) -> String {
    match &state.category {
        CategoryFilter::All => path.to_string(),
        other => {
            let label: String = form_urlencoded::byte_serialize(other.label().as_bytes()).collect();
            format!("{path}?{CATEGORY_PARAM}={label}")
        }
    }
}

/// Query state described by `url`. Search text is always empty.
///
/// Accepts a full URL, a path with query string, or a bare query string
/// (`?category=Office`). A missing `category` parameter means `All`.
pub fn decode(url: &str) -> QueryState {
    let category = query_param(url, CATEGORY_PARAM);
    QueryState::new(CategoryFilter::parse(category.as_deref()), String::new())
}

/// The part of `url` before any query string or fragment.
pub fn path_of(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

/// `encode(decode(url))` under the same path.
pub fn canonicalize(url: &str) -> String {
    encode(path_of(url), &decode(url))
}

/// First value of `name` in the query string of `url`, percent-decoded.
pub fn query_param(url: &str, name: &str) -> Option<String> {
    let without_fragment = url.split('#').next().unwrap_or_default();
    let (_, query) = without_fragment.split_once('?')?;
    find_param(query, name)
}

/// First value of `name` in a bare `application/x-www-form-urlencoded` query
/// string (no leading `?`). Later duplicates are ignored.
pub fn find_param(query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
