//! State catalog and template loading
//!
//! The catalog is a JSON array of state records authored by an external UI
//! (camelCase keys). Loading is all-or-nothing: a missing file or malformed
//! JSON is a fatal setup error, never a per-state one.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One question/answer pair for the FAQ section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// One state record in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    /// Stable identifier and output filename stem
    pub slug: String,
    pub name: String,
    pub abbreviation: String,
    pub board_name: String,
    pub board_url: String,
    pub renewal_cycle: String,
    pub renewal_month: String,
    /// 0 is a sentinel: no fixed numeric CME requirement
    pub cme_hours: u32,
    pub cme_details: String,
    /// Free text, e.g. "$1,250 biennial"; a numeric value is derived from it
    pub renewal_fee: String,
    /// Free text, e.g. "4-6 weeks"; an ISO-8601 duration is derived from it
    pub processing_time: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub pitfalls: Vec<String>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    /// Weak references to other states by slug; dangling slugs are dropped
    #[serde(default)]
    pub related_states: Vec<String>,
}

/// Ordered, immutable set of state records keyed by slug
#[derive(Debug, Clone)]
pub struct Catalog {
    states: Vec<State>,
}

impl Catalog {
    /// Build a catalog, enforcing slug uniqueness and URL-safety
    pub fn new(states: Vec<State>) -> Result<Self> {
        let mut seen = HashSet::new();
        for state in &states {
            if !is_url_safe(&state.slug) {
                return Err(eyre!(
                    "Slug '{}' is not URL-safe (expected lowercase letters, digits, hyphens)",
                    state.slug
                ));
            }
            if !seen.insert(state.slug.as_str()) {
                return Err(eyre!("Duplicate slug in catalog: '{}'", state.slug));
            }
        }
        Ok(Self { states })
    }

    /// Load the catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .context(format!("Failed to read catalog: {}", path.display()))?;
        let states: Vec<State> = serde_json::from_str(&content)
            .context(format!("Malformed catalog: {}", path.display()))?;
        let catalog = Self::new(states)?;
        info!(path = %path.display(), states = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Look up a state by slug
    pub fn get(&self, slug: &str) -> Option<&State> {
        self.states.iter().find(|s| s.slug == slug)
    }

    /// All slugs, in catalog order
    pub fn slugs(&self) -> Vec<&str> {
        self.states.iter().map(|s| s.slug.as_str()).collect()
    }

    /// All states, in catalog order
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Load the page template as UTF-8 text
pub fn load_template(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let template = fs::read_to_string(path)
        .context(format!("Failed to read template: {}", path.display()))?;
    debug!(path = %path.display(), bytes = template.len(), "Loaded template");
    Ok(template)
}

fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(slug: &str) -> State {
        State {
            slug: slug.to_string(),
            name: "Texas".to_string(),
            abbreviation: "TX".to_string(),
            board_name: "Texas Medical Board".to_string(),
            board_url: "https://www.tmb.state.tx.us".to_string(),
            renewal_cycle: "Biennial".to_string(),
            renewal_month: "Birth month".to_string(),
            cme_hours: 48,
            cme_details: "48 hours per cycle".to_string(),
            renewal_fee: "$452".to_string(),
            processing_time: "4-6 weeks".to_string(),
            steps: vec![],
            pitfalls: vec![],
            faqs: vec![],
            related_states: vec![],
        }
    }

    #[test]
    fn test_catalog_lookup_and_order() {
        let catalog = Catalog::new(vec![state("texas"), state("oklahoma")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.slugs(), vec!["texas", "oklahoma"]);
        assert!(catalog.get("texas").is_some());
        assert!(catalog.get("atlantis").is_none());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = Catalog::new(vec![state("texas"), state("texas")]).unwrap_err();
        assert!(err.to_string().contains("Duplicate slug"));
        assert!(err.to_string().contains("texas"));
    }

    #[test]
    fn test_url_unsafe_slug_rejected() {
        let err = Catalog::new(vec![state("New Mexico")]).unwrap_err();
        assert!(err.to_string().contains("not URL-safe"));
    }

    #[test]
    fn test_load_missing_catalog_is_fatal() {
        let err = Catalog::load("/nonexistent/states.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }

    #[test]
    fn test_load_malformed_catalog_is_fatal() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("states.json");
        fs::write(&path, "[{\"slug\": \"texas\"").unwrap();
        let err = Catalog::load(&path).unwrap_err();
        assert!(err.to_string().contains("Malformed catalog"));
    }

    #[test]
    fn test_camel_case_parsing_with_defaults() {
        let json = r#"[{
            "slug": "texas",
            "name": "Texas",
            "abbreviation": "TX",
            "boardName": "Texas Medical Board",
            "boardUrl": "https://www.tmb.state.tx.us",
            "renewalCycle": "Biennial",
            "renewalMonth": "Birth month",
            "cmeHours": 48,
            "cmeDetails": "48 hours per cycle",
            "renewalFee": "$452",
            "processingTime": "4-6 weeks"
        }]"#;
        let states: Vec<State> = serde_json::from_str(json).unwrap();
        assert_eq!(states[0].board_name, "Texas Medical Board");
        assert!(states[0].steps.is_empty());
        assert!(states[0].related_states.is_empty());
    }
}
