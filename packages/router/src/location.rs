use std::fmt;

use crate::query::QueryParams;

/// A location inside the application: a path plus an optional query string.
///
/// Fragments are not part of a location; in hash mode the whole
/// `#/path?query` fragment *is* the location and is parsed by stripping the `#`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    path: String,
    query: String,
}

impl Location {
    pub fn new(path: &str, query: &str) -> Self {
        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self {
            path,
            query: query.trim_start_matches('?').to_string(),
        }
    }

    /// Parse `"/path?query"`, `"#/path?query"` or a bare `"path"`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('#').unwrap_or(raw);
        let raw = raw.split('#').next().unwrap_or_default();
        match raw.split_once('?') {
            Some((path, query)) => Self::new(path, query),
            None => Self::new(raw, ""),
        }
    }

    /// The path component, always starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The raw query string without the leading `?`, if any.
    pub fn query(&self) -> Option<&str> {
        if self.query.is_empty() {
            None
        } else {
            Some(&self.query)
        }
    }

    pub fn query_params(&self) -> QueryParams {
        QueryParams::parse(&self.query)
    }

    /// Same path, whole query replaced by `params`.
    pub fn with_query(&self, params: &QueryParams) -> Self {
        Self {
            path: self.path.clone(),
            query: params.to_query_string(),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/", "")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.query() {
            Some(query) => write!(f, "{}?{}", self.path, query),
            None => f.write_str(&self.path),
        }
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_and_query() {
        let loc = Location::parse("/hotels?search=dakar");
        assert_eq!(loc.path(), "/hotels");
        assert_eq!(loc.query(), Some("search=dakar"));
        assert_eq!(loc.to_string(), "/hotels?search=dakar");
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(Location::parse("").path(), "/");
        assert_eq!(Location::parse("dashboard").path(), "/dashboard");
        assert_eq!(Location::parse("/login?").query(), None);
        assert_eq!(Location::parse("/login?").to_string(), "/login");
    }

    #[test]
    fn test_parse_hash_form() {
        let loc = Location::parse("#/hotels/create");
        assert_eq!(loc.path(), "/hotels/create");
        assert_eq!(loc.query(), None);

        // Empty hash is the root
        assert_eq!(Location::parse("#").path(), "/");
    }

    #[test]
    fn test_fragment_is_dropped() {
        let loc = Location::parse("/products?page=2#top");
        assert_eq!(loc.path(), "/products");
        assert_eq!(loc.query(), Some("page=2"));
    }

    #[test]
    fn test_with_query_replaces_everything() {
        let loc = Location::parse("/hotels?search=old&page=3");
        let next = loc.with_query(&QueryParams::from([("search", "new")]));
        assert_eq!(next.to_string(), "/hotels?search=new");

        let cleared = loc.with_query(&QueryParams::new());
        assert_eq!(cleared.to_string(), "/hotels");
    }
}
