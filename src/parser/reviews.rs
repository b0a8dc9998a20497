use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::text::{extract_rating, normalize_text, strip_reviewed_prefix};
use crate::constants::*;
use crate::types::{CardFields, PageSummary, ReviewRecord};

fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

static BUSINESS_NAME: Lazy<Selector> = Lazy::new(|| compile(BUSINESS_NAME_SELECTOR));
static FALLBACK_HEADING: Lazy<Selector> = Lazy::new(|| compile(FALLBACK_HEADING_SELECTOR));
static BUBBLE_RATING: Lazy<Selector> = Lazy::new(|| compile(BUBBLE_RATING_SELECTOR));
static REVIEW_CARD: Lazy<Selector> = Lazy::new(|| compile(REVIEW_CARD_SELECTOR));
static REVIEWER: Lazy<Selector> = Lazy::new(|| compile(REVIEWER_SELECTOR));
static REVIEW_DATE: Lazy<Selector> = Lazy::new(|| compile(REVIEW_DATE_SELECTOR));
static REVIEW_TEXT: Lazy<Selector> = Lazy::new(|| compile(REVIEW_TEXT_SELECTOR));
static REVIEW_TEXT_FALLBACK: Lazy<Selector> =
    Lazy::new(|| compile(REVIEW_TEXT_FALLBACK_SELECTOR));

fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

fn rating_label(element: Option<ElementRef<'_>>) -> Option<&str> {
    element.and_then(|el| el.value().attr("aria-label"))
}

/// The listing title; falls back to the first `h1` when the marked header
/// is missing or blank.
pub fn find_business_name(document: &Html) -> String {
    let name = normalize_text(document.select(&BUSINESS_NAME).next());
    if !name.is_empty() {
        return name;
    }
    normalize_text(document.select(&FALLBACK_HEADING).next())
}

/// Page-level bubble rating: the first bubble label anywhere in the document.
pub fn find_overall_rating(document: &Html) -> String {
    extract_rating(rating_label(document.select(&BUBBLE_RATING).next()))
}

pub fn find_page_summary(document: &Html) -> PageSummary {
    PageSummary {
        business_name: find_business_name(document),
        overall_rating: find_overall_rating(document),
    }
}

/// Review card containers in document order.
pub fn find_review_cards(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&REVIEW_CARD).collect()
}

pub fn extract_card(card: ElementRef<'_>) -> CardFields {
    let reviewer = normalize_text(first(card, &REVIEWER));
    let rating = extract_rating(rating_label(first(card, &BUBBLE_RATING)));
    let date = strip_reviewed_prefix(&normalize_text(first(card, &REVIEW_DATE)));
    let text_node = first(card, &REVIEW_TEXT).or_else(|| first(card, &REVIEW_TEXT_FALLBACK));
    let text = normalize_text(text_node);

    CardFields {
        reviewer,
        rating,
        date,
        text,
    }
}

/// All non-empty review records on the page, in card order.
pub fn extract(document: &Html) -> Vec<ReviewRecord> {
    let page = find_page_summary(document);
    debug!(
        "page summary business_name='{}' overall_rating='{}'",
        page.business_name, page.overall_rating
    );

    let mut records = Vec::new();
    for (index, card) in find_review_cards(document).into_iter().enumerate() {
        let fields = extract_card(card);
        if fields.is_noise() {
            debug!("dropping card {} with no reviewer or text", index);
            continue;
        }
        records.push(ReviewRecord::new(&page, fields));
    }
    records
}
