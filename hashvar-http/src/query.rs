//! Query string lookup.
//!
//! Pairs are decoded one at a time, so repeated keys or nested parameters
//! elsewhere in the query never affect the lookup of a plain name.

use std::collections::HashMap;

/// Decodes a single `key=value` pair.
pub fn parse_pair(pair: &str) -> Result<HashMap<String, String>, serde_qs::Error> {
    serde_qs::Config::new(5, false).deserialize_str(pair)
}

/// First decoded value of the parameter `name` in a raw query string.
///
/// A pair that cannot be decoded is an error only when its raw key is
/// `name`; other pairs that fail to decode are skipped.
pub fn first_value(query: &str, name: &str) -> Result<Option<String>, serde_qs::Error> {
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let raw_key = pair.split_once('=').map_or(pair, |(key, _)| key);
        if raw_key != name && !raw_key.contains(['%', '+']) {
            continue;
        }
        match parse_pair(pair) {
            Ok(mut decoded) => {
                if let Some(value) = decoded.remove(name) {
                    return Ok(Some(value));
                }
            }
            Err(error) if raw_key == name => return Err(error),
            Err(_) => {}
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let pair = parse_pair("key=value").unwrap();
        assert_eq!(pair.get("key").map(String::as_str), Some("value"));
    }

    #[test]
    fn test_first_value() {
        let query = "id=42&page=2&sort=desc";
        assert_eq!(first_value(query, "id").unwrap().as_deref(), Some("42"));
        assert_eq!(first_value(query, "sort").unwrap().as_deref(), Some("desc"));
        assert_eq!(first_value(query, "missing").unwrap(), None);
    }

    #[test]
    fn test_first_value_repeated_key() {
        assert_eq!(first_value("id=1&id=2", "id").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_first_value_ignores_nested_parameters() {
        let query = "page[size]=10&color[]=red&color[]=blue&id=1";
        assert_eq!(first_value(query, "id").unwrap().as_deref(), Some("1"));
        assert_eq!(first_value(query, "page").unwrap(), None);
    }

    #[test]
    fn test_first_value_decodes() {
        assert_eq!(
            first_value("q=rust%20lang", "q").unwrap().as_deref(),
            Some("rust lang")
        );
    }

    #[test]
    fn test_first_value_skips_empty_pairs() {
        assert_eq!(first_value("&&a=1&", "a").unwrap().as_deref(), Some("1"));
    }
}
