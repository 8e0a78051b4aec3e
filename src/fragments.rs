//! Fragment builders: HTML and JSON-LD views of the same catalog data
//!
//! Each sub-structure of a state record is serialized by an explicit pair of
//! builders, one per output dialect. The HTML dialect escapes every
//! user-authored string; the JSON-LD dialect embeds the raw text via exact
//! JSON string encoding instead, since it lands inside a data block, not
//! markup. Keep the pairs in sync when adding fields.

use serde_json::json;

use crate::catalog::{Catalog, Faq};
use crate::transform::escape_html;

/// Ordered `<li>` items for the renewal steps
pub fn steps_html(steps: &[String]) -> String {
    list_items(steps)
}

/// Ordered `<li>` items for the pitfall warnings
pub fn pitfalls_html(pitfalls: &[String]) -> String {
    list_items(pitfalls)
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// FAQ accordion: one `<details>` block per pair, first item open
pub fn faq_html(faqs: &[Faq]) -> String {
    faqs.iter()
        .enumerate()
        .map(|(i, faq)| {
            let open = if i == 0 { " open" } else { "" };
            format!(
                "<details class=\"faq-item\"{}>\n  <summary>{}</summary>\n  <div class=\"faq-answer\"><p>{}</p></div>\n</details>",
                open,
                escape_html(&faq.question),
                escape_html(&faq.answer)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Anchor cards for related states, resolved against the full catalog.
///
/// A slug with no matching state is dropped silently; the card list may
/// legitimately be shorter than `related_states`.
pub fn related_cards(related: &[String], catalog: &Catalog) -> String {
    related
        .iter()
        .filter_map(|slug| catalog.get(slug))
        .map(|state| {
            format!(
                "<a class=\"state-card\" href=\"{}.html\"><span class=\"state-abbr\">{}</span><span class=\"state-name\">{}</span></a>",
                state.slug,
                escape_html(&state.abbreviation),
                escape_html(&state.name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON-LD `Question` items for the FAQPage block.
///
/// Items are comma-separated except the last; the template supplies the
/// enclosing `[...]`.
pub fn faq_jsonld(faqs: &[Faq]) -> String {
    faqs.iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer
                }
            })
            .to_string()
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

/// JSON-LD `HowToStep` items with 1-based positions
pub fn steps_jsonld(steps: &[String]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            json!({
                "@type": "HowToStep",
                "position": i + 1,
                "text": step
            })
            .to_string()
        })
        .collect::<Vec<_>>()
        .join(",\n")
}
