//! Page generation orchestration
//!
//! Loads the template and catalog once, then renders each selected state
//! strictly sequentially. States are independent; a failure on any one state
//! aborts the run (pages already written for earlier states are kept).

use std::fs;
use std::path::PathBuf;

use eyre::{Context, Result, eyre};
use tracing::{debug, info};

use crate::catalog::{self, Catalog, State};
use crate::config::Config;
use crate::fragments;
use crate::render::{self, Replacements};
use crate::transform::{cme_display, duration_iso8601, escape_html, fee_numeric};

/// Whether generated pages are persisted or only sized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Write each page to `output_dir/{slug}.html`, overwriting wholesale
    Write,
    /// Compute each page and report its size without touching the filesystem
    Preview,
}

/// Result of generating one page
#[derive(Debug, Clone)]
pub struct PageOutcome {
    pub slug: String,
    pub bytes: usize,
    /// Written path; `None` in preview mode
    pub path: Option<PathBuf>,
}

/// Drives the pipeline: catalog -> transforms -> fragments -> render -> output
pub struct Generator {
    catalog: Catalog,
    template: String,
    output_dir: PathBuf,
    current_year: i32,
}

impl Generator {
    /// Load the template and catalog for one run; both are immutable after this
    pub fn load(config: &Config) -> Result<Self> {
        let template = catalog::load_template(&config.template_path)?;
        let catalog = Catalog::load(&config.catalog_path)?;
        Ok(Self {
            catalog,
            template,
            output_dir: config.output_dir.clone(),
            current_year: config.current_year,
        })
    }

    /// Generate pages for all states, or exactly one when a slug is given.
    ///
    /// An unknown slug is a fatal error naming every valid slug; nothing is
    /// written in that case.
    pub fn run(&self, slug: Option<&str>, mode: RunMode) -> Result<Vec<PageOutcome>> {
        let selected: Vec<&State> = match slug {
            Some(requested) => {
                let state = self.catalog.get(requested).ok_or_else(|| {
                    eyre!(
                        "Unknown state slug '{}'. Valid slugs: {}",
                        requested,
                        self.catalog.slugs().join(", ")
                    )
                })?;
                vec![state]
            }
            None => self.catalog.states().iter().collect(),
        };

        if mode == RunMode::Write {
            fs::create_dir_all(&self.output_dir).context(format!(
                "Failed to create output directory: {}",
                self.output_dir.display()
            ))?;
        }

        let mut outcomes = Vec::with_capacity(selected.len());
        for state in selected {
            let page = self.render_page(state)?;
            let path = match mode {
                RunMode::Write => {
                    let path = self.output_dir.join(format!("{}.html", state.slug));
                    fs::write(&path, &page)
                        .context(format!("Failed to write page: {}", path.display()))?;
                    debug!(slug = %state.slug, bytes = page.len(), "Wrote page");
                    Some(path)
                }
                RunMode::Preview => {
                    debug!(slug = %state.slug, bytes = page.len(), "Previewed page");
                    None
                }
            };
            outcomes.push(PageOutcome {
                slug: state.slug.clone(),
                bytes: page.len(),
                path,
            });
        }

        info!(count = outcomes.len(), ?mode, "Generation complete");
        Ok(outcomes)
    }

    /// Render one state's page: scalars and fragments over the template.
    ///
    /// User-authored display strings are HTML-escaped exactly once here;
    /// derived machine values (fee digits, ISO duration, year) and the
    /// generated fragments are inserted as-is.
    pub fn render_page(&self, state: &State) -> Result<String> {
        let mut repl = Replacements::new();
        repl.scalar("{{STATE_SLUG}}", state.slug.clone())
            .scalar("{{STATE_NAME}}", escape_html(&state.name))
            .scalar("{{STATE_ABBR}}", escape_html(&state.abbreviation))
            .scalar("{{BOARD_NAME}}", escape_html(&state.board_name))
            .scalar("{{BOARD_URL}}", escape_html(&state.board_url))
            .scalar("{{RENEWAL_CYCLE}}", escape_html(&state.renewal_cycle))
            .scalar("{{RENEWAL_MONTH}}", escape_html(&state.renewal_month))
            .scalar("{{RENEWAL_FEE}}", escape_html(&state.renewal_fee))
            .scalar("{{RENEWAL_FEE_NUMERIC}}", fee_numeric(&state.renewal_fee))
            .scalar("{{CME_HOURS}}", cme_display(state.cme_hours))
            .scalar("{{CME_DETAILS}}", escape_html(&state.cme_details))
            .scalar("{{PROCESSING_TIME}}", escape_html(&state.processing_time))
            .scalar(
                "{{PROCESSING_TIME_ISO}}",
                duration_iso8601(&state.processing_time),
            )
            .scalar("{{CURRENT_YEAR}}", self.current_year.to_string());

        repl.fragment("{{STEPS_LIST}}", fragments::steps_html(&state.steps))
            .fragment("{{PITFALLS_LIST}}", fragments::pitfalls_html(&state.pitfalls))
            .fragment("{{FAQ_ACCORDION}}", fragments::faq_html(&state.faqs))
            .fragment("{{FAQ_SCHEMA}}", fragments::faq_jsonld(&state.faqs))
            .fragment("{{STEPS_SCHEMA}}", fragments::steps_jsonld(&state.steps))
            .fragment(
                "{{RELATED_CARDS}}",
                fragments::related_cards(&state.related_states, &self.catalog),
            );

        render::render(&self.template, &repl)
            .context(format!("Failed to render page for '{}'", state.slug))
    }

    /// Slugs of every state in the loaded catalog
    pub fn slugs(&self) -> Vec<&str> {
        self.catalog.slugs()
    }
}
