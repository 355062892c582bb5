//! Fixed-width shortening of postal address lines
//!
//! This crate shortens a free-text address line so that it fits a maximum
//! number of characters, following the multi-stage French abbreviation
//! convention used for mailing labels: road types, titles, general words,
//! given names, saint/extension words, then article elision and residual
//! initials as a last resort.
//!
//! # Architecture
//!
//! - **rules**: the rule table, its TOML source format and the embedded
//!   French rule set
//! - **canonical**: diacritic stripping and character folding
//! - **pipeline**: the word tie-break selector and the stage sequencer
//!
//! # Example
//!
//! ```rust
//! use normadresse_core::{rules, Normalizer};
//!
//! let table = rules::embedded().unwrap();
//! let normalizer = Normalizer::new(table);
//!
//! let short = normalizer.normalize("15 boulevard Victor Hugo", 20);
//! assert_eq!(short, "15 BD VICTOR HUGO");
//! ```

pub mod canonical;
pub mod error;
pub mod pipeline;
pub mod rules;

pub use canonical::canonicalize;
pub use error::{Result, RuleError};
pub use pipeline::{
    select_short_words, Alignment, Normalizer, PipelineStage, Slot, SlotKind, StageResult,
    DEFAULT_MAX_LENGTH, MERGE_MARKER,
};
pub use rules::{CompiledRule, Rule, RuleSetConfig, RuleTable, Stage};

/// Shorten `address` to at most `max_length` characters with the embedded
/// French rule set.
///
/// Best effort: the result may still be longer than `max_length` once every
/// stage has run.
pub fn normalize(address: &str, max_length: usize) -> String {
    match rules::loader::embedded() {
        Ok(table) => Normalizer::new(table).normalize(address, max_length),
        Err(e) => {
            log::error!("embedded rule table unavailable, falling back to an empty table: {e}");
            Normalizer::new(std::sync::Arc::new(RuleTable::empty())).normalize(address, max_length)
        }
    }
}
