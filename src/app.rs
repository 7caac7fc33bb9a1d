//! Application module: exposes the page model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the laid-out catalog,
//! focus and scroll position, and every element the handlers update.

mod model;

pub use model::*;
