use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::error::{PipelineError, RecordError};

static CONTAINER_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.product_item").unwrap());
static NAME_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".product_name").unwrap());
static PRICE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".price").unwrap());
// Thousands separators and whitespace anywhere, currency suffix at the end.
static PRICE_NOISE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,\s]|원$").unwrap());

/// One parsed product: non-empty name, price in won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub price: u64,
}

/// Extract product records from a listing document, in document order.
/// A container with a missing or malformed field is logged and skipped;
/// a document with zero containers is fatal.
pub fn extract_records(markup: &str) -> Result<Vec<Record>, PipelineError> {
    let doc = Html::parse_document(markup);
    let containers: Vec<ElementRef> = doc.select(&CONTAINER_SEL).collect();
    if containers.is_empty() {
        return Err(PipelineError::NoDataFound);
    }

    let mut records = Vec::with_capacity(containers.len());
    for (index, container) in containers.iter().enumerate() {
        match extract_record(container) {
            Ok(record) => records.push(record),
            Err(err) => warn!(index, %err, "skipping product container"),
        }
    }
    Ok(records)
}

fn extract_record(container: &ElementRef) -> Result<Record, RecordError> {
    let name = select_text(container, &NAME_SEL).ok_or(RecordError::MissingName)?;
    let raw_price = select_text(container, &PRICE_SEL).ok_or(RecordError::MissingPrice)?;
    let price = parse_price(&raw_price).ok_or(RecordError::BadPrice(raw_price))?;
    Ok(Record { name, price })
}

/// First non-empty text match under `container` for `selector`.
fn select_text(container: &ElementRef, selector: &Selector) -> Option<String> {
    container
        .select(selector)
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Parse a displayed price like "3,500원" into won. Idempotent: feeding an
/// already-normalized integer back in yields the same value.
pub fn parse_price(raw: &str) -> Option<u64> {
    PRICE_NOISE_RE.replace_all(raw.trim(), "").parse().ok()
}

// ── Tests ──
