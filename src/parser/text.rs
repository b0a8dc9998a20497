use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;

use crate::constants::INVISIBLE_ELEMENTS;

static BUBBLE_RATING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d*\.?\d+)\s+of\s+5\s+bubbles").expect("bubble rating pattern")
});

static REVIEWED_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*reviewed\s*").expect("reviewed prefix pattern"));

/// Visible text under `node` with whitespace runs collapsed to single spaces.
/// An absent node yields an empty string.
pub fn normalize_text(node: Option<ElementRef<'_>>) -> String {
    let Some(element) = node else {
        return String::new();
    };
    if is_invisible(element.value().name()) {
        return String::new();
    }

    let mut raw = String::new();
    for descendant in element.descendants() {
        let Some(text) = descendant.value().as_text() else {
            continue;
        };
        let hidden = descendant
            .ancestors()
            .take_while(|ancestor| ancestor.id() != element.id())
            .filter_map(|ancestor| ancestor.value().as_element())
            .any(|el| is_invisible(el.name()));
        if !hidden {
            raw.push_str(text);
        }
    }
    collapse_whitespace(&raw)
}

/// Collapse every whitespace run (newlines and tabs included) into one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Numeric part of an "X of 5 bubbles" label, or an empty string.
pub fn extract_rating(label: Option<&str>) -> String {
    label
        .and_then(|l| BUBBLE_RATING.captures(l))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Drop a leading "Reviewed" label. Only the start of the string is considered.
pub fn strip_reviewed_prefix(date: &str) -> String {
    REVIEWED_PREFIX.replace(date, "").into_owned()
}

fn is_invisible(tag: &str) -> bool {
    INVISIBLE_ELEMENTS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}
