//! In-page anchor handling: `#id` links scroll the page to the element with
//! that id.

mod anchor;
mod handler;
mod smooth;

pub use anchor::{AnchorError, is_in_page, is_scroll_anchor, target_id};
pub use handler::{AnchorClick, ScrollSurface, SmoothScrollHandler};
pub use smooth::{ScrollBehavior, SmoothScroll};
