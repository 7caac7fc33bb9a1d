use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnchorError {
    #[error("anchor `{0}` has an empty fragment")]
    EmptyFragment(String),

    #[error("anchor `{href}` has an invalid fragment `{fragment}`")]
    InvalidFragment { href: String, fragment: String },
}

/// Whether `href` points inside the current page (`#...`).
pub fn is_in_page(href: &str) -> bool {
    href.starts_with('#')
}

/// Whether `href` is handled at all: in-page and not the bare `#`.
pub fn is_scroll_anchor(href: &str) -> bool {
    is_in_page(href) && href != "#"
}

/// The element id an in-page anchor points at: the text between the first
/// and second `#`.
pub fn target_id(href: &str) -> Result<&str, AnchorError> {
    let fragment = href.split('#').nth(1).unwrap_or_default();
    if fragment.is_empty() {
        return Err(AnchorError::EmptyFragment(href.to_string()));
    }
    if fragment.chars().any(char::is_whitespace) {
        return Err(AnchorError::InvalidFragment {
            href: href.to_string(),
            fragment: fragment.to_string(),
        });
    }
    Ok(fragment)
}
