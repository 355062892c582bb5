//! Word tie-break selection
//!
//! After a stage abbreviates a phrase, keep as much of the original wording
//! as the length budget allows: grow the abbreviated prefix one word at a
//! time and stop at the first candidate that fits.

use super::fits;

/// Word a rule emits in place of a word it merged into its predecessor
pub const MERGE_MARKER: &str = "@";

/// How a slot relates the two phrasings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Word `i` of one phrase corresponds to word `i` of the other
    Kept,
    /// The abbreviated word absorbed the following original word; the
    /// original side already carries the abbreviation so selection cannot
    /// undo the merge
    Merged,
}

/// One aligned position. `None` is an absent word: dropped by a merge or
/// past the end of the shorter phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a> {
    pub original: Option<&'a str>,
    pub abbreviated: Option<&'a str>,
    pub kind: SlotKind,
}

/// Positional alignment between an original phrase and its abbreviation
#[derive(Debug, Clone)]
pub struct Alignment<'a> {
    slots: Vec<Slot<'a>>,
    abbreviated_words: usize,
}

impl<'a> Alignment<'a> {
    /// Align two phrases word by word, resolving merge markers.
    ///
    /// Markers are resolved from the last word to the first. A marker at
    /// index 0 has no predecessor; both words at index 0 are dropped.
    pub fn new(original: &'a str, abbreviated: &'a str) -> Self {
        let mut long: Vec<Option<&'a str>> = original.split(' ').map(Some).collect();
        let mut short: Vec<Option<&'a str>> = abbreviated.split(' ').map(Some).collect();
        let abbreviated_words = short.len();

        let width = long.len().max(short.len());
        long.resize(width, None);
        short.resize(width, None);
        let mut kinds = vec![SlotKind::Kept; width];

        for i in (0..abbreviated_words).rev() {
            if short[i] != Some(MERGE_MARKER) {
                continue;
            }
            if i > 0 {
                long[i - 1] = short[i - 1];
                kinds[i - 1] = SlotKind::Merged;
            }
            long[i] = None;
            short[i] = None;
        }

        let slots = long
            .into_iter()
            .zip(short)
            .zip(kinds)
            .map(|((original, abbreviated), kind)| Slot {
                original,
                abbreviated,
                kind,
            })
            .collect();

        Self {
            slots,
            abbreviated_words,
        }
    }

    pub fn slots(&self) -> &[Slot<'a>] {
        &self.slots
    }

    /// Word count of the abbreviated phrase, merge markers included
    pub fn abbreviated_words(&self) -> usize {
        self.abbreviated_words
    }

    /// Abbreviated words before `prefix`, original words from `prefix` on,
    /// skipping absent and empty words
    pub fn candidate(&self, prefix: usize) -> String {
        let head = self.slots.iter().take(prefix).filter_map(|s| s.abbreviated);
        let tail = self.slots.iter().skip(prefix).filter_map(|s| s.original);

        head.chain(tail)
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Pick the least abbreviated phrasing that fits `max_length`.
///
/// Prefixes `1..n` are tried, `n` being the abbreviated word count, so the
/// last word always keeps its original form. When nothing fits, the
/// candidate for the longest tried prefix is returned. A phrase of a single
/// word has no prefix to try and comes back fully abbreviated.
pub fn select_short_words(original: &str, abbreviated: &str, max_length: usize) -> String {
    let alignment = Alignment::new(original, abbreviated);

    let mut selected = None;
    for prefix in 1..alignment.abbreviated_words() {
        let candidate = alignment.candidate(prefix);
        let done = fits(&candidate, max_length);
        selected = Some(candidate);
        if done {
            break;
        }
    }

    selected.unwrap_or_else(|| alignment.candidate(alignment.abbreviated_words()))
}
