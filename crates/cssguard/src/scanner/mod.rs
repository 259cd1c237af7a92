//! Single-pass structural scanner.
//!
//! Walks the input one character at a time, tracking brace depth and
//! whether it is inside an allow-listed at-rule:
//!
//! - Selectors and at-rule heads are emitted verbatim.
//! - Bodies of top-level rules are split into declarations and filtered
//!   through [`crate::property`].
//! - Allow-listed at-rule bodies are emitted verbatim at every depth.
//!   Declarations inside `@media` and friends are never property-filtered.
//! - Blocks nested inside ordinary rules lose their head.
//!
//! Unbalanced braces are tolerated; the scan never fails.

mod state;


use std::sync::LazyLock;

use cssguard_common::Rejection;
use regex::Regex;

use crate::config::Configuration;

use state::{render, ScanState, Segment};

static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Sanitize a full stylesheet. Returns `""` when nothing survives.
pub fn sanitize_css(config: &Configuration, css: &str) -> String {
    render(&scan(config, css))
}

pub(crate) fn scan(config: &Configuration, css: &str) -> Vec<Segment> {
    let css = css.trim();
    if css.is_empty() {
        return Vec::new();
    }

    let css = truncate_chars(css, config.max_length());
    let css = strip_comments(css);

    let mut state = ScanState::new(config);
    for ch in css.chars() {
        state.feed(ch);
    }
    state.into_segments()
}

/// Keep at most `max_length` characters. May cut through a token.
pub(crate) fn truncate_chars(css: &str, max_length: usize) -> &str {
    match css.char_indices().nth(max_length) {
        Some((end, _)) => {
            let rejection = Rejection::OversizedInput {
                length: css.chars().count(),
                max_length,
            };
            tracing::warn!(reason = %rejection, "oversized stylesheet truncated");
            &css[..end]
        }
        None => css,
    }
}

/// Remove every `/* ... */` span, including ones that cross lines.
pub(crate) fn strip_comments(css: &str) -> std::borrow::Cow<'_, str> {
    COMMENT_RE.replace_all(css, "")
}
