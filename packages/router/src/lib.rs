//! # Router — location tracking, navigation and route matching
//!
//! A small client-side router for the dashboard. It knows nothing about the UI
//! framework: the UI crate binds it to Dioxus signals, while tests drive it with
//! [`MemoryHistory`].
//!
//! ## Pieces
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Location`] / [`QueryParams`] | A parsed `path?query` pair and its decoded query mapping. |
//! | [`History`] | Where locations live: [`MemoryHistory`] (tests, native) or [`BrowserHistory`] (wasm + `web`). |
//! | [`RouteTable`] | Declared `(pattern, screen)` entries plus an optional `*` wildcard. |
//! | [`Router`] | Facade tying a history to subscribers: `current_location`, `navigate`, `match_route`, `query_params`, `set_query_params`. |

mod history;
mod location;
mod query;
mod router;
mod table;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserHistory;

pub use history::{History, HistoryMode, Listener, MemoryHistory};
pub use location::Location;
pub use query::QueryParams;
pub use router::{NavigateOptions, Router};
pub use table::{Pattern, RouteEntry, RouteTable};
