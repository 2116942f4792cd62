//! Browser History backed by `window.history` and `window.location`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::history::{History, HistoryMode, Listener};
use crate::location::Location;

/// History implementation for the web platform.
///
/// Both modes write entries with `pushState`/`replaceState` so that a
/// programmatic navigation never echoes back through [`History::listen`];
/// only `popstate` (back/forward, or a hand-edited hash) reaches listeners.
#[derive(Clone, Debug, Default)]
pub struct BrowserHistory {
    mode: HistoryMode,
}

impl BrowserHistory {
    pub fn new(mode: HistoryMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    fn read(mode: HistoryMode) -> Location {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return Location::default();
        };
        match mode {
            HistoryMode::Path => {
                let path = location.pathname().unwrap_or_default();
                let search = location.search().unwrap_or_default();
                Location::new(&path, &search)
            }
            HistoryMode::Hash => Location::parse(&location.hash().unwrap_or_default()),
        }
    }

    fn write(&self, location: &Location, replace: bool) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            tracing::warn!("window.history unavailable");
            return;
        };
        let url = self.href_for(location);
        let result = if replace {
            history.replace_state_with_url(&JsValue::NULL, "", Some(&url))
        } else {
            history.push_state_with_url(&JsValue::NULL, "", Some(&url))
        };
        if let Err(e) = result {
            tracing::error!("Failed to update history for {url}: {e:?}");
        }
    }
}

impl History for BrowserHistory {
    fn location(&self) -> Location {
        Self::read(self.mode)
    }

    fn push(&self, location: &Location) {
        self.write(location, false);
    }

    fn replace(&self, location: &Location) {
        self.write(location, true);
    }

    fn listen(&self, listener: Listener) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mode = self.mode;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            listener(&Self::read(mode));
        });
        if let Err(e) =
            window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
        {
            tracing::error!("Failed to register popstate listener: {e:?}");
        }
        // The listener lives as long as the page.
        closure.forget();
    }

    fn href_for(&self, location: &Location) -> String {
        match self.mode {
            HistoryMode::Path => location.to_string(),
            HistoryMode::Hash => format!("#{location}"),
        }
    }
}
