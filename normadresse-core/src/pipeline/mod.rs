//! The abbreviation pipeline
//!
//! Canonicalize, then run the stages in a fixed order, each one followed by
//! the word tie-break selector, stopping at the first result that fits.

pub mod selector;
pub mod sequencer;
pub mod stage;

pub use selector::{select_short_words, Alignment, Slot, SlotKind, MERGE_MARKER};
pub use sequencer::{Normalizer, StageResult};
pub use stage::PipelineStage;

/// Label width used when the caller does not ask for another one
pub const DEFAULT_MAX_LENGTH: usize = 32;

/// Length budget check, counted in characters
#[inline]
pub(crate) fn fits(text: &str, max_length: usize) -> bool {
    text.chars().count() <= max_length
}
