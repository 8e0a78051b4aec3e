//! statepages - static state-page generator
//!
//! Takes one HTML page template and a catalog of state license records and
//! deterministically emits one complete, SEO-structured document per state.
//! Each page carries two parallel representations of the same content:
//! human-readable HTML and machine-readable JSON-LD structured data.
//!
//! # Pipeline
//!
//! ```text
//! assets/page.template.html ─┐
//!                            ├─> render ─> dist/states/{slug}.html
//! data/states.json ──> transform + fragments ─┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use statepages::{Config, Generator, RunMode};
//!
//! let config = Config::load(None)?;
//! let generator = Generator::load(&config)?;
//! let outcomes = generator.run(Some("texas"), RunMode::Write)?;
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod fragments;
pub mod generator;
pub mod render;
pub mod transform;

pub use catalog::{Catalog, Faq, State};
pub use config::Config;
pub use generator::{Generator, PageOutcome, RunMode};

/// Processing-time fallback when the free-text field has no integer token (days)
pub const DEFAULT_PROCESSING_DAYS: u32 = 30;
