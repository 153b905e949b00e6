//! Query-string parameter extraction for "next" locators

use crate::error::{Error, Result};
use url::Url;

/// Signature of an injectable query parameter parser
pub type QueryParamParser = fn(&str, &str) -> Result<Option<String>>;

/// Base used to resolve relative locators such as `/v2/items?start=abc`
const RELATIVE_BASE: &str = "http://localhost/";

/// Extract the value of query parameter `name` from `url`
///
/// Accepts absolute and relative URLs. Returns `Ok(None)` when the URL has
/// no query, lacks the parameter, or carries it with an empty value.
pub fn get_query_param(url: &str, name: &str) -> Result<Option<String>> {
    if url.is_empty() {
        return Ok(None);
    }

    let parsed = parse_locator(url)?;
    let Some(query) = parsed.query() else {
        return Ok(None);
    };

    if let Some(position) = find_invalid_escape(query) {
        return Err(Error::query_parse(
            url,
            format!("invalid percent escape at offset {position}"),
        ));
    }

    Ok(parsed
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty()))
}

fn parse_locator(url: &str) -> Result<Url> {
    match Url::parse(url) {
        Ok(parsed) => Ok(parsed),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(RELATIVE_BASE).map_err(|e| Error::query_parse(url, e.to_string()))?;
            base.join(url)
                .map_err(|e| Error::query_parse(url, e.to_string()))
        }
        Err(e) => Err(Error::query_parse(url, e.to_string())),
    }
}

/// Position of the first `%` not followed by two hex digits
fn find_invalid_escape(query: &str) -> Option<usize> {
    let bytes = query.as_bytes();
    bytes.iter().enumerate().find_map(|(i, &b)| {
        if b != b'%' {
            return None;
        }
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        (!valid).then_some(i)
    })
}
