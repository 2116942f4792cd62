/// Decoded query-string parameters, kept in insertion order.
///
/// Parsing and serialisation follow `application/x-www-form-urlencoded`
/// (the same rules as `URLSearchParams`). When a key repeats, [`get`](Self::get)
/// returns the first value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        Self(form_urlencoded::parse(query.as_bytes()).into_owned().collect())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key` to `value`, dropping any other values for that key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter().position(|(k, _)| *k == key) {
            Some(index) => {
                self.0[index].1 = value;
                let mut seen = false;
                self.0.retain(|(k, _)| {
                    if *k != key {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.0.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode back to a query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for QueryParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decodes() {
        let params = QueryParams::parse("?search=h%C3%B4tel+lac&page=2");
        assert_eq!(params.get("search"), Some("hôtel lac"));
        assert_eq!(params.get("page"), Some("2"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let params = QueryParams::parse("tag=a&tag=b");
        assert_eq!(params.get("tag"), Some("a"));
    }

    #[test]
    fn test_encode() {
        let params = QueryParams::from([("search", "King Fahd & co"), ("page", "1")]);
        assert_eq!(params.to_query_string(), "search=King+Fahd+%26+co&page=1");
        assert_eq!(QueryParams::parse(&params.to_query_string()), params);
    }

    #[test]
    fn test_insert_replaces_and_dedups() {
        let mut params = QueryParams::parse("a=1&b=2&a=3");
        params.insert("a", "9");
        assert_eq!(params.to_query_string(), "a=9&b=2");

        params.remove("a");
        assert_eq!(params.to_query_string(), "b=2");
        assert!(!params.is_empty());
    }

    #[test]
    fn test_empty() {
        assert!(QueryParams::parse("").is_empty());
        assert_eq!(QueryParams::new().to_query_string(), "");
    }
}
