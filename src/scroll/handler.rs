use tracing::debug;

use super::anchor;
use super::smooth::ScrollBehavior;

/// What the handler needs from the page.
pub trait ScrollSurface {
    /// Row offset of the element with `id`, if it exists.
    fn element_offset(&self, id: &str) -> Option<u16>;
    fn scroll_to(&mut self, offset: u16, behavior: ScrollBehavior);
}

/// Result of a click on an anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AnchorClick {
    /// Whether the default navigation was suppressed.
    pub default_prevented: bool,
    /// Whether a scroll was started.
    pub scrolled: bool,
}

impl AnchorClick {
    const IGNORED: Self = Self {
        default_prevented: false,
        scrolled: false,
    };
}

#[derive(Copy, Clone, Debug)]
pub struct SmoothScrollHandler {
    behavior: ScrollBehavior,
}

impl SmoothScrollHandler {
    pub fn new(behavior: ScrollBehavior) -> Self {
        Self { behavior }
    }

    /// Handle a click on an anchor with `href`.
    ///
    /// Every in-page anchor except the bare `#` has its default navigation
    /// suppressed, even if its target turns out to be missing or malformed.
    pub fn on_anchor_click<S: ScrollSurface>(&self, href: &str, surface: &mut S) -> AnchorClick {
        if !anchor::is_scroll_anchor(href) {
            return AnchorClick::IGNORED;
        }

        let scrolled = match anchor::target_id(href) {
            Ok(id) => match surface.element_offset(id) {
                Some(offset) => {
                    debug!(%href, offset, "scrolling to anchor");
                    surface.scroll_to(offset, self.behavior);
                    true
                }
                None => {
                    debug!(%href, "anchor target not on page");
                    false
                }
            },
            Err(e) => {
                debug!(error = %e, "smooth scroll error");
                false
            }
        };

        AnchorClick {
            default_prevented: true,
            scrolled,
        }
    }
}

impl Default for SmoothScrollHandler {
    fn default() -> Self {
        Self::new(ScrollBehavior::Smooth)
    }
}
