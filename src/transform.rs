//! Field transforms: derived machine values and HTML escaping
//!
//! Everything here is pure and total. Free-text fields that don't match the
//! expected shape degrade to documented defaults rather than failing the run.

/// Escape user-authored text for insertion into HTML.
///
/// Rewrites `&`, `<`, `>`, `"` to their entity equivalents. Applied exactly
/// once to every catalog string destined for markup; never applied to
/// generated markup or to JSON-LD text (that dialect gets exact JSON string
/// encoding of the raw text instead).
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Extract the numeric part of a free-text fee string.
///
/// Takes the first contiguous run of ASCII digits and `,` grouping
/// separators, strips the separators, and returns the digit string.
/// `"$1,250 biennial"` becomes `"1250"`. A string with no digits returns
/// `"0"`. Not currency-aware: a decimal point ends the run, so cents are
/// truncated (whole-currency-unit approximation).
pub fn fee_numeric(fee: &str) -> String {
    let mut digits = String::new();
    for ch in fee.chars().skip_while(|ch| !ch.is_ascii_digit()) {
        match ch {
            '0'..='9' => digits.push(ch),
            ',' => {}
            _ => break,
        }
    }
    if digits.is_empty() {
        "0".to_string()
    } else {
        digits
    }
}

/// Derive an ISO-8601 duration from a free-text processing-time string.
///
/// The first integer token is read as a count of weeks and emitted as
/// `P{weeks*7}D`. With no integer token (or an absurdly large one) the
/// result is the fixed `P30D` default.
pub fn duration_iso8601(processing_time: &str) -> String {
    match first_integer(processing_time) {
        Some(weeks) => format!("P{}D", weeks.saturating_mul(7)),
        None => format!("P{}D", crate::DEFAULT_PROCESSING_DAYS),
    }
}

/// Display string for the CME-hours field.
///
/// `0` is a sentinel meaning "no fixed numeric requirement".
pub fn cme_display(hours: u32) -> String {
    if hours == 0 {
        "No fixed hourly requirement".to_string()
    } else {
        format!("{} hours", hours)
    }
}

/// First run of ASCII digits in the text, parsed as an integer.
fn first_integer(text: &str) -> Option<u64> {
    let digits: String = text
        .chars()
        .skip_while(|ch| !ch.is_ascii_digit())
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_rewrites_special_characters() {
        let escaped = escape_html(r#"Fish & Chips <b>"fried"</b>"#);
        assert_eq!(escaped, "Fish &amp; Chips &lt;b&gt;&quot;fried&quot;&lt;/b&gt;");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
    }

    #[test]
    fn test_escape_html_identity_on_clean_text() {
        assert_eq!(escape_html("plain renewal text"), "plain renewal text");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_fee_numeric_simple() {
        assert_eq!(fee_numeric("$300"), "300");
    }

    #[test]
    fn test_fee_numeric_grouping_separator() {
        assert_eq!(fee_numeric("$1,250 biennial"), "1250");
    }

    #[test]
    fn test_fee_numeric_no_digits() {
        assert_eq!(fee_numeric("varies by county"), "0");
        assert_eq!(fee_numeric(""), "0");
    }

    #[test]
    fn test_fee_numeric_truncates_at_decimal_point() {
        assert_eq!(fee_numeric("$99.50"), "99");
    }

    #[test]
    fn test_duration_from_week_range() {
        assert_eq!(duration_iso8601("4-6 weeks"), "P28D");
        assert_eq!(duration_iso8601("2 weeks"), "P14D");
    }

    #[test]
    fn test_duration_default_without_integer() {
        assert_eq!(duration_iso8601("no defined timeframe"), "P30D");
        assert_eq!(duration_iso8601(""), "P30D");
    }

    #[test]
    fn test_cme_display_sentinel_and_hours() {
        assert_eq!(cme_display(0), "No fixed hourly requirement");
        assert_eq!(cme_display(50), "50 hours");
    }

    #[test]
    fn test_fee_numeric_idempotent_on_its_output() {
        assert_eq!(fee_numeric(&fee_numeric("$1,250 biennial")), "1250");
        assert_eq!(fee_numeric(&fee_numeric("varies")), "0");
    }
}
