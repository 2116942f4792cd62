use std::cell::RefCell;
use std::rc::Rc;

use crate::location::Location;

/// Callback invoked with the new location.
pub type Listener = Rc<dyn Fn(&Location)>;

/// How a browser history writes locations to the address bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// `/hotels?search=x`
    #[default]
    Path,
    /// `/#/hotels?search=x`
    Hash,
}

/// A source of truth for the current location.
///
/// `push` and `replace` are only ever called by the router, which notifies its
/// own subscribers afterwards. `listen` is for everything else: the visitor
/// pressing back/forward or editing the address bar.
pub trait History {
    fn location(&self) -> Location;

    /// Add a new entry on top of the stack.
    fn push(&self, location: &Location);

    /// Overwrite the current entry.
    fn replace(&self, location: &Location);

    /// Register a callback for location changes the router did not initiate.
    fn listen(&self, listener: Listener);

    /// Value for an anchor `href` that points at `location`.
    fn href_for(&self, location: &Location) -> String {
        location.to_string()
    }
}

#[derive(Default)]
struct MemoryState {
    entries: Vec<Location>,
    index: usize,
    listeners: Vec<Listener>,
}

/// In-memory History for tests and non-browser targets.
///
/// Clones share the same stack, so a test can keep a handle to simulate
/// back/forward while the router owns another.
#[derive(Clone, Default)]
pub struct MemoryHistory {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryHistory {
    /// Start with a single entry at `initial`.
    pub fn new(initial: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(MemoryState {
                entries: vec![Location::parse(initial)],
                index: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.state.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move one entry back, as the browser back button would. Returns `false`
    /// at the start of the stack.
    pub fn back(&self) -> bool {
        self.go(-1)
    }

    /// Move one entry forward. Returns `false` at the end of the stack.
    pub fn forward(&self) -> bool {
        self.go(1)
    }

    fn go(&self, delta: isize) -> bool {
        let (location, listeners) = {
            let mut state = self.state.borrow_mut();
            let Some(target) = state.index.checked_add_signed(delta) else {
                return false;
            };
            if target >= state.entries.len() {
                return false;
            }
            state.index = target;
            (state.entries[target].clone(), state.listeners.clone())
        };
        // Listeners may read the history again, so the borrow is released first.
        for listener in listeners {
            listener(&location);
        }
        true
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Location {
        let state = self.state.borrow();
        state.entries.get(state.index).cloned().unwrap_or_default()
    }

    fn push(&self, location: &Location) {
        let mut state = self.state.borrow_mut();
        if state.entries.is_empty() {
            state.entries.push(location.clone());
            state.index = 0;
            return;
        }
        let next = state.index + 1;
        state.entries.truncate(next);
        state.entries.push(location.clone());
        state.index = next;
    }

    fn replace(&self, location: &Location) {
        let mut state = self.state.borrow_mut();
        let index = state.index;
        match state.entries.get_mut(index) {
            Some(entry) => *entry = location.clone(),
            None => state.entries.push(location.clone()),
        }
    }

    fn listen(&self, listener: Listener) {
        self.state.borrow_mut().listeners.push(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_push_replace_back_forward() {
        let history = MemoryHistory::new("/login");
        history.push(&Location::parse("/dashboard"));
        history.push(&Location::parse("/hotels"));
        assert_eq!(history.len(), 3);

        history.replace(&Location::parse("/hotels?search=x"));
        assert_eq!(history.len(), 3);
        assert_eq!(history.location().to_string(), "/hotels?search=x");

        assert!(history.back());
        assert_eq!(history.location().path(), "/dashboard");
        assert!(history.forward());
        assert_eq!(history.location().path(), "/hotels");
        assert!(!history.forward());
    }

    #[test]
    fn test_push_after_back_truncates() {
        let history = MemoryHistory::new("/a");
        history.push(&Location::parse("/b"));
        history.push(&Location::parse("/c"));
        history.back();
        history.back();
        assert!(!history.back());

        history.push(&Location::parse("/d"));
        assert_eq!(history.len(), 2);
        assert!(!history.forward());
        assert_eq!(history.location().path(), "/d");
    }

    #[test]
    fn test_listeners_fire_on_external_moves_only() {
        let history = MemoryHistory::new("/a");
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        history.listen(Rc::new(move |_: &Location| seen.set(seen.get() + 1)));

        history.push(&Location::parse("/b"));
        history.replace(&Location::parse("/c"));
        assert_eq!(calls.get(), 0);

        history.back();
        assert_eq!(calls.get(), 1);
    }
}
