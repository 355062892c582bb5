//! Stage sequencer
//!
//! Runs the pipeline as a linear chain of stages with an early exit as soon
//! as the working string fits. Every substitution replaces the first match
//! only, and every loop has a fixed pass count.

use super::{fits, select_short_words, PipelineStage};
use crate::canonical::canonicalize;
use crate::error::Result;
use crate::rules::{self, CompiledRule, RuleTable, Stage};
use log::trace;
use regex::Regex;
use std::sync::{Arc, LazyLock};

static UPPERCASE_ARTICLES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(" (LE|LA|LES|AU|AUX|DE|DU|DES|D|ET|A|L|SUR|EN) ").expect("valid regex")
});

static LOWERCASE_ARTICLES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(" (le|la|les|au|aux|de|du|des|d|et|a|l|sur) ").expect("valid regex")
});

const TITLE_PASSES: usize = 2;
const GENERAL_PASSES: usize = 3;
const SECONDARY_ROAD_TYPE_PASSES: usize = 2;
const SAINT_EXTENSION_PASSES: usize = 2;
const UPPERCASE_ARTICLE_PASSES: usize = 6;
const LOWERCASE_ARTICLE_PASSES: usize = 4;

/// Outcome of one stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageResult {
    /// The text fits; later stages are skipped
    Satisfied(String),
    /// Still too long; hand the text to the next stage
    Continue(String),
}

impl StageResult {
    /// Tag `text` by whether it fits `max_length`
    pub fn check(text: String, max_length: usize) -> Self {
        if fits(&text, max_length) {
            StageResult::Satisfied(text)
        } else {
            StageResult::Continue(text)
        }
    }

    pub fn is_satisfied(&self) -> bool {
        matches!(self, StageResult::Satisfied(_))
    }

    pub fn text(&self) -> &str {
        match self {
            StageResult::Satisfied(text) | StageResult::Continue(text) => text,
        }
    }

    pub fn into_inner(self) -> String {
        match self {
            StageResult::Satisfied(text) | StageResult::Continue(text) => text,
        }
    }

    fn and_then(self, f: impl FnOnce(String) -> StageResult) -> StageResult {
        match self {
            StageResult::Satisfied(text) => StageResult::Satisfied(text),
            StageResult::Continue(text) => f(text),
        }
    }
}

/// Address shortener bound to one rule table.
///
/// Cheap to clone; the table is shared read-only, so one normalizer can
/// serve any number of threads.
#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Arc<RuleTable>,
}

impl Normalizer {
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self { rules }
    }

    /// Normalizer over the embedded French rule set
    pub fn embedded() -> Result<Self> {
        rules::embedded().map(Self::new)
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Shorten `address` to at most `max_length` characters.
    ///
    /// Never fails. When no stage gets the text under the budget, the most
    /// abbreviated form reached is returned, even if it is still too long.
    pub fn normalize(&self, address: &str, max_length: usize) -> String {
        let mut result = StageResult::check(canonicalize(address), max_length);

        for stage in PipelineStage::ORDER {
            result = result.and_then(|text| {
                let outcome = self.run_stage(stage, text, max_length);
                trace!(
                    "stage {}: {} chars{}",
                    stage.label(),
                    outcome.text().chars().count(),
                    if outcome.is_satisfied() { ", fits" } else { "" }
                );
                outcome
            });
        }

        result.into_inner()
    }

    fn run_stage(&self, stage: PipelineStage, input: String, max_length: usize) -> StageResult {
        match stage {
            PipelineStage::Particle => {
                StageResult::Continue(self.apply_raw(Stage::Particle, input, RuleShort::AsWritten))
            }
            PipelineStage::UppercaseArticle => elide_articles(
                input,
                &UPPERCASE_ARTICLES,
                UPPERCASE_ARTICLE_PASSES,
                max_length,
            ),
            PipelineStage::ResidualInitial => initial_residual_words(input, max_length),
            PipelineStage::LowercaseArticle => elide_articles(
                input,
                &LOWERCASE_ARTICLES,
                LOWERCASE_ARTICLE_PASSES,
                max_length,
            ),
            _ => {
                let output = self.abbreviate(stage, &input);
                StageResult::check(select_short_words(&input, &output, max_length), max_length)
            }
        }
    }

    /// Apply the substitutions of a selector stage
    fn abbreviate(&self, stage: PipelineStage, input: &str) -> String {
        let output = input.to_string();

        match stage {
            PipelineStage::RoadType => self.apply_raw(Stage::RoadType, output, RuleShort::AsWritten),
            PipelineStage::Title => (0..TITLE_PASSES).fold(output, |text, _| {
                substitute(self.rules.rules(Stage::Title), text, |rule| {
                    (rule.spaced(), format!(" {} ", rule.short()))
                })
            }),
            PipelineStage::General => (0..GENERAL_PASSES).fold(output, |text, _| {
                self.rules.rules(Stage::General).iter().fold(text, |text, rule| {
                    let replacement = format!(" {} ", rule.short_lower());
                    let replaced = rule.word_start().replace(&text, replacement.as_str());
                    replaced.trim().to_string()
                })
            }),
            PipelineStage::SecondaryRoadType => {
                (0..SECONDARY_ROAD_TYPE_PASSES).fold(output, |text, _| {
                    let text = substitute(
                        self.rules.rules(Stage::SecondaryRoadType),
                        text,
                        spaced_trimmed_lower,
                    );
                    substitute(self.rules.rules(Stage::RoadType), text, spaced_trimmed_lower)
                })
            }
            PipelineStage::GivenName => self.abbreviate_given_names(&output),
            PipelineStage::SaintExtension => (0..SAINT_EXTENSION_PASSES).fold(output, |text, _| {
                self.apply_raw(Stage::SaintExtension, text, RuleShort::Lowercase)
            }),
            PipelineStage::LeadingRoadType => {
                substitute(self.rules.rules(Stage::SecondaryRoadType), output, |rule| {
                    (rule.leading(), format!("{} ", rule.short_trimmed_lower()))
                })
            }
            PipelineStage::Particle
            | PipelineStage::UppercaseArticle
            | PipelineStage::ResidualInitial
            | PipelineStage::LowercaseArticle => output,
        }
    }

    /// Substitute each rule's pattern as written
    fn apply_raw(&self, stage: Stage, text: String, short: RuleShort) -> String {
        substitute(self.rules.rules(stage), text, |rule| {
            let replacement = match short {
                RuleShort::AsWritten => rule.short(),
                RuleShort::Lowercase => rule.short_lower(),
            };
            (rule.raw(), replacement.to_string())
        })
    }

    /// Reduce interior given names to their lower-cased short form, unless
    /// the previous word starts with SAINT (street named after a saint).
    fn abbreviate_given_names(&self, text: &str) -> String {
        let rules = self.rules.rules(Stage::GivenName);
        let mut words: Vec<String> = text.split(' ').map(str::to_string).collect();

        for i in 1..words.len().saturating_sub(1) {
            if words[i - 1].starts_with("SAINT") {
                continue;
            }
            let word = words[i].clone();
            for rule in rules {
                if rule.raw().is_match(&word) {
                    words[i] = rule.short_lower().to_string();
                }
            }
        }

        words.join(" ")
    }
}

#[derive(Debug, Clone, Copy)]
enum RuleShort {
    AsWritten,
    Lowercase,
}

/// Replace the first match of each rule, in table order
fn substitute<'r>(
    rules: &'r [CompiledRule],
    text: String,
    form: impl Fn(&'r CompiledRule) -> (&'r Regex, String),
) -> String {
    rules.iter().fold(text, |text, rule| {
        let (pattern, replacement) = form(rule);
        pattern.replace(&text, replacement.as_str()).into_owned()
    })
}

/// ` <pattern> ` to ` <short> `, both trimmed, short lower-cased
fn spaced_trimmed_lower(rule: &CompiledRule) -> (&Regex, String) {
    (rule.spaced_trimmed(), format!(" {} ", rule.short_trimmed_lower()))
}

/// Remove the first article token per pass, checking the budget after each
fn elide_articles(
    text: String,
    articles: &Regex,
    passes: usize,
    max_length: usize,
) -> StageResult {
    let mut output = text;
    for _ in 0..passes {
        output = articles.replace(&output, " ").into_owned();
        if fits(&output, max_length) {
            return StageResult::Satisfied(output);
        }
    }
    StageResult::Continue(output)
}

/// Reduce interior uppercase words to their first letter, one at a time
fn initial_residual_words(text: String, max_length: usize) -> StageResult {
    let mut words: Vec<String> = text.split(' ').map(str::to_string).collect();
    let mut output = text;

    for i in 1..words.len().saturating_sub(1) {
        let Some(initial) = residual_initial(&words[i]) else {
            continue;
        };
        words[i] = initial.to_string();
        output = words.join(" ");
        if fits(&output, max_length) {
            return StageResult::Satisfied(output);
        }
    }

    StageResult::Continue(output)
}

fn residual_initial(word: &str) -> Option<char> {
    let mut chars = word.chars();
    let first = chars.next()?;
    let is_candidate = chars.next().is_some()
        && first.is_alphabetic()
        && word.to_uppercase() == word;
    is_candidate.then_some(first)
}
