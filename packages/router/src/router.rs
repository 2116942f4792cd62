use std::cell::RefCell;
use std::rc::Rc;

use crate::history::{History, Listener};
use crate::location::Location;
use crate::query::QueryParams;
use crate::table::RouteTable;

/// Options for [`Router::navigate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Overwrite the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl NavigateOptions {
    pub fn push() -> Self {
        Self { replace: false }
    }

    pub fn replace() -> Self {
        Self { replace: true }
    }
}

/// Router facade over a [`History`].
///
/// Every location change, whether it came from [`navigate`](Self::navigate)
/// or from the history itself (back/forward), is reported once to each
/// subscriber. The router is single-threaded: it lives on the UI thread next
/// to the history it wraps.
pub struct Router<H> {
    history: H,
    subscribers: Rc<RefCell<Vec<Listener>>>,
}

impl<H: Clone> Clone for Router<H> {
    fn clone(&self) -> Self {
        Self {
            history: self.history.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

fn notify(subscribers: &Rc<RefCell<Vec<Listener>>>, location: &Location) {
    let listeners = subscribers.borrow().clone();
    for listener in listeners {
        listener(location);
    }
}

impl<H: History> Router<H> {
    pub fn new(history: H) -> Self {
        let subscribers: Rc<RefCell<Vec<Listener>>> = Rc::default();
        let external = subscribers.clone();
        history.listen(Rc::new(move |location: &Location| {
            tracing::debug!("External navigation to {location}");
            notify(&external, location);
        }));
        Self {
            history,
            subscribers,
        }
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// The live location.
    pub fn current_location(&self) -> Location {
        self.history.location()
    }

    /// Go to `target`. A target starting with `?` keeps the current path.
    pub fn navigate(&self, target: &str, options: NavigateOptions) {
        let location = if target.starts_with('?') {
            Location::new(self.current_location().path(), target)
        } else {
            Location::parse(target)
        };
        if options.replace {
            self.history.replace(&location);
        } else {
            self.history.push(&location);
        }
        tracing::debug!(replace = options.replace, "Navigated to {location}");
        notify(&self.subscribers, &location);
    }

    /// Match the current location against `table`.
    pub fn match_route<'t, S>(&self, table: &'t RouteTable<S>) -> Option<&'t S> {
        table.match_location(&self.current_location())
    }

    pub fn query_params(&self) -> QueryParams {
        self.current_location().query_params()
    }

    /// Replace the whole query string, keeping the path. Pushes a history entry.
    pub fn set_query_params(&self, params: &QueryParams) {
        let next = self.current_location().with_query(params);
        self.navigate(&next.to_string(), NavigateOptions::push());
    }

    /// `href` for an anchor pointing at `target`.
    pub fn href_for(&self, target: &str) -> String {
        self.history.href_for(&Location::parse(target))
    }

    /// Be told about every location change.
    pub fn subscribe(&self, listener: impl Fn(&Location) + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(listener));
    }
}
