//! Multi-valued parameter sources the parser reads from.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Anything that can answer "which values were supplied for this parameter name".
///
/// `None` means the parameter was not supplied at all; `Some(&[])` means it was
/// supplied with no values.
pub trait ParamSource {
    fn param_values(&self, name: &str) -> Option<&[String]>;
}

impl<S: BuildHasher> ParamSource for HashMap<String, Vec<String>, S> {
    fn param_values(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(Vec::as_slice)
    }
}

impl ParamSource for BTreeMap<String, Vec<String>> {
    fn param_values(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(Vec::as_slice)
    }
}

impl<T: ParamSource + ?Sized> ParamSource for &T {
    fn param_values(&self, name: &str) -> Option<&[String]> {
        (**self).param_values(name)
    }
}

/// Parameter name → values, keeping repeated values in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(HashMap<String, Vec<String>>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` query string (without the leading `?`).
    pub fn from_query_str(raw: &str) -> Self {
        url::form_urlencoded::parse(raw.as_bytes()).collect()
    }

    pub fn from_url(url: &url::Url) -> Self {
        url.query_pairs().collect()
    }

    /// Append `value` to the values of `name`.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.entry(name.into()).or_default().push(value.into());
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> HashMap<String, Vec<String>> {
        self.0
    }
}

impl ParamSource for QueryParams {
    fn param_values(&self, name: &str) -> Option<&[String]> {
        self.get(name)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.push(name, value);
        }
        params
    }
}

impl From<HashMap<String, Vec<String>>> for QueryParams {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_query_str_keeps_repeated_values_in_order() {
        let params = QueryParams::from_query_str("sort=a%2Cdesc&page=2&sort=b");
        assert_eq!(
            params.get("sort"),
            Some(&["a,desc".to_string(), "b".to_string()][..])
        );
        assert_eq!(params.get("page"), Some(&["2".to_string()][..]));
        assert_eq!(params.get("size"), None);
    }

    #[test]
    fn from_query_str_decodes_plus_and_empty_values() {
        let params = QueryParams::from_query_str("sort=first+name&page");
        assert_eq!(params.get("sort"), Some(&["first name".to_string()][..]));
        assert_eq!(params.get("page"), Some(&[String::new()][..]));
    }

    #[test]
    fn empty_query_has_no_params() {
        assert!(QueryParams::from_query_str("").is_empty());
    }

    #[test]
    fn from_url_reads_query_pairs() {
        let url = url::Url::parse("https://example.com/items?page=1&size=5").expect("url");
        let params = QueryParams::from_url(&url);
        assert_eq!(params.param_values("size"), Some(&["5".to_string()][..]));
    }

    #[test]
    fn hash_map_is_a_param_source() {
        let mut map = HashMap::new();
        map.insert("page".to_string(), vec!["1".to_string()]);
        assert_eq!(map.param_values("page").map(<[String]>::len), Some(1));
        assert!(map.param_values("size").is_none());
    }
}
