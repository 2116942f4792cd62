use crate::location::Location;

/// A declared route pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Matches one path exactly.
    Exact(String),
    /// `*`: matches anything no exact entry claimed.
    Wildcard,
}

impl Pattern {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "*" => Self::Wildcard,
            path => Self::Exact(Location::parse(path).path().to_string()),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }
}

/// One `(pattern, screen)` pair.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteEntry<S> {
    pub pattern: Pattern,
    pub screen: S,
}

/// Ordered route declarations, built once at startup.
///
/// Declaration order matters: the first exact match wins, so declaring the
/// same path twice silently shadows the second entry. [`duplicate_paths`]
/// exists to catch that.
///
/// [`duplicate_paths`]: RouteTable::duplicate_paths
#[derive(Clone, Debug, PartialEq)]
pub struct RouteTable<S> {
    entries: Vec<RouteEntry<S>>,
}

impl<S> Default for RouteTable<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S> RouteTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `screen` at `pattern` (`"*"` declares the wildcard).
    pub fn route(mut self, pattern: &str, screen: S) -> Self {
        self.entries.push(RouteEntry {
            pattern: Pattern::parse(pattern),
            screen,
        });
        self
    }

    /// Declare the wildcard entry.
    pub fn fallback(self, screen: S) -> Self {
        self.route("*", screen)
    }

    pub fn entries(&self) -> &[RouteEntry<S>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose pattern equals `path`, else the first wildcard, else `None`.
    pub fn match_path(&self, path: &str) -> Option<&S> {
        self.entries
            .iter()
            .find(|entry| matches!(&entry.pattern, Pattern::Exact(p) if p == path))
            .or_else(|| self.entries.iter().find(|entry| entry.pattern.is_wildcard()))
            .map(|entry| &entry.screen)
    }

    pub fn match_location(&self, location: &Location) -> Option<&S> {
        self.match_path(location.path())
    }

    /// Paths declared more than once, in first-declaration order.
    pub fn duplicate_paths(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let mut duplicates: Vec<&str> = Vec::new();
        for entry in &self.entries {
            let Pattern::Exact(path) = &entry.pattern else {
                continue;
            };
            if seen.contains(&path.as_str()) {
                if !duplicates.contains(&path.as_str()) {
                    duplicates.push(path);
                }
            } else {
                seen.push(path);
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable<&'static str> {
        RouteTable::new()
            .route("/login", "login")
            .route("/hotels", "hotels")
            .route("/hotels/create", "create")
    }

    #[test]
    fn test_exact_match() {
        let table = table();
        assert_eq!(table.match_path("/hotels"), Some(&"hotels"));
        assert_eq!(table.match_path("/hotels/create"), Some(&"create"));
        // Exact only: no prefix or trailing-slash leniency
        assert_eq!(table.match_path("/hotels/"), None);
        assert_eq!(table.match_path("/hotel"), None);
    }

    #[test]
    fn test_no_match_without_wildcard() {
        assert_eq!(table().match_path("/nowhere"), None);
        assert_eq!(RouteTable::<u8>::new().match_path("/"), None);
    }

    #[test]
    fn test_wildcard_catches_unmatched() {
        let table = table().fallback("fallback");
        assert_eq!(table.match_path("/nowhere"), Some(&"fallback"));
        assert_eq!(table.match_path("/login"), Some(&"login"));
    }

    #[test]
    fn test_exact_beats_earlier_wildcard() {
        let table = RouteTable::new().route("*", "fallback").route("/login", "login");
        assert_eq!(table.match_path("/login"), Some(&"login"));
        assert_eq!(table.match_path("/x"), Some(&"fallback"));
    }

    #[test]
    fn test_first_declaration_wins() {
        let table = table().route("/hotels/create", "admin-create");
        assert_eq!(table.match_path("/hotels/create"), Some(&"create"));
        assert_eq!(table.duplicate_paths(), vec!["/hotels/create"]);
        assert!(self::table().duplicate_paths().is_empty());
    }

    #[test]
    fn test_match_location_ignores_query() {
        let table = table();
        let location = Location::parse("/hotels?search=dakar");
        assert_eq!(table.match_location(&location), Some(&"hotels"));
    }
}
