//! Share URLs: slot state carried in repeated `colour` query parameters.

use crate::config::QUERY_KEY;
use crate::model::{ColorName, SlotState};

/// Encode set slots as `colour=a&colour=b...`, in slot order.
pub fn encode_query(slots: &SlotState) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for name in slots.names() {
        query.append_pair(QUERY_KEY, name.as_str());
    }
    query.finish()
}

/// `path?query` for the current slots, keeping `path` unchanged.
pub fn share_url(path: &str, slots: &SlotState) -> String {
    format!("{}?{}", path, encode_query(slots))
}

/// Every `colour` value in a query string, in order.
///
/// Accepts a bare query, a query with its leading `?`, or a full URL/path
/// with a query part. A `#fragment` is ignored.
pub fn decode_colours(input: &str) -> Vec<ColorName> {
    let query = query_part(input);
    form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == QUERY_KEY)
        .map(|(_, value)| ColorName::new(value.into_owned()))
        .collect()
}

/// Split a location such as `/picker/?colour=red-500` into path and query.
pub fn split_location(location: &str) -> (&str, &str) {
    let location = location.split('#').next().unwrap_or_default();
    match location.split_once('?') {
        Some((path, query)) => (path, query),
        None => (location, ""),
    }
}

/// Turn user input into a history location.
///
/// A bare query (`colour=red-500`) is rooted at `/`; empty input is `/`.
pub fn normalize_location(location: &str) -> String {
    let location = location.trim();
    if location.is_empty() {
        "/".to_string()
    } else if !location.contains('?') && location.contains('=') {
        format!("/?{}", location)
    } else {
        location.to_string()
    }
}

fn query_part(input: &str) -> &str {
    let input = input.split('#').next().unwrap_or_default();
    match input.split_once('?') {
        Some((_, query)) => query,
        None if input.contains('=') => input,
        None => "",
    }
}
