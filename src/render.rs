//! Literal placeholder substitution over the page template
//!
//! Tokens are `{{UPPER_SNAKE}}` markers. Substitution is plain string
//! replacement, never regex semantics: scalar tokens are replaced at every
//! occurrence, fragment tokens (large structural blocks that appear exactly
//! once in the template) at most once. After substitution the output is
//! scanned for surviving markers, so a template/record mismatch surfaces as
//! an error instead of leaking tokens into published pages.

use std::collections::BTreeSet;

use eyre::{Result, eyre};
use regex::Regex;
use tracing::debug;

/// Ordered substitution sets for one page render
#[derive(Debug, Default)]
pub struct Replacements {
    scalars: Vec<(&'static str, String)>,
    fragments: Vec<(&'static str, String)>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scalar token, replaced at every occurrence
    pub fn scalar(&mut self, token: &'static str, value: impl Into<String>) -> &mut Self {
        self.scalars.push((token, value.into()));
        self
    }

    /// Register a fragment token, replaced at most once
    pub fn fragment(&mut self, token: &'static str, value: impl Into<String>) -> &mut Self {
        self.fragments.push((token, value.into()));
        self
    }
}

/// Substitute all registered tokens and verify none survive
pub fn render(template: &str, replacements: &Replacements) -> Result<String> {
    let mut output = template.to_string();

    for (token, value) in &replacements.scalars {
        output = output.replace(token, value);
    }
    for (token, value) in &replacements.fragments {
        output = output.replacen(token, value, 1);
    }

    let marker = Regex::new(r"\{\{[A-Z0-9_]+\}\}")?;
    let leftover: BTreeSet<&str> = marker.find_iter(&output).map(|m| m.as_str()).collect();
    if !leftover.is_empty() {
        return Err(eyre!(
            "Unresolved placeholders after rendering: {}",
            leftover.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }

    debug!(bytes = output.len(), "Rendered template");
    Ok(output)
}
