//! Category scraper for the video listing page
//!
//! The listing page marks every selectable program with a `td` whose id
//! starts with `mItem_` and whose `onclick` handler invokes the program
//! selector. The same markup also carries news-clip cells wired to the
//! "selected" variant of that handler; those are excluded here.

use scraper::{Html, Selector};

use crate::error::{AljazeeraError, Result};
use crate::types::CategoryLabel;

// The live page ships one attribute with a missing `=`, which trips the
// tree builder into mis-nesting the table. A single fixed substitution
// repairs it; this is not general sanitization.
const BROKEN_ATTR: &str = r#"id"adSpacer""#;
const REPAIRED_ATTR: &str = r#"id="adSpacer""#;

const ITEM_ID_PREFIX: &str = "mItem_";
const SELECT_HANDLER: &str = "SelectProgInfo";
const SELECTED_HANDLER: &str = "SelectProgInfo('Selected')";

/// Extracts category labels from the raw listing page, in document order
///
/// Labels are the qualifying elements' direct text content, verbatim;
/// no trimming or normalization is applied. A page with no qualifying
/// elements yields an empty vector, not an error.
///
/// # Errors
/// Returns `MalformedMarkup` only if the document cannot be interpreted
/// as markup at all, even after the repair step.
pub fn extract_categories(html: &[u8]) -> Result<Vec<CategoryLabel>> {
    let src = std::str::from_utf8(html)
        .map_err(|e| AljazeeraError::MalformedMarkup(format!("not valid UTF-8: {}", e)))?;
    let src = src.replace(BROKEN_ATTR, REPAIRED_ATTR);

    let document = Html::parse_document(&src);
    let selector = Selector::parse("td[id][onclick]")
        .map_err(|e| AljazeeraError::MalformedMarkup(format!("invalid selector: {:?}", e)))?;

    let mut labels = Vec::new();

    for element in document.select(&selector) {
        let id = element.value().attr("id").unwrap_or_default();
        let onclick = element.value().attr("onclick").unwrap_or_default();

        if !id.starts_with(ITEM_ID_PREFIX) {
            continue;
        }
        if !onclick.contains(SELECT_HANDLER) || onclick.contains(SELECTED_HANDLER) {
            continue;
        }

        // Direct text children only, so nested markup does not leak in
        let label: CategoryLabel = element
            .children()
            .filter_map(|node| node.value().as_text())
            .map(|text| text.to_string())
            .collect();
        labels.push(label);
    }

    Ok(labels)
}
