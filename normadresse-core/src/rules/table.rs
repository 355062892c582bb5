//! Compiled, read-only rule table
//!
//! Every rule is compiled into each regex form the pipeline applies it
//! with, so a bad pattern is reported when the table is built and never
//! while an address is being shortened.

use crate::error::{Result, RuleError};
use crate::rules::{Rule, RuleSetConfig, Stage};
use log::debug;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

/// `\g<n>` group reference in rule files
static GROUP_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\g<(\d+)>").expect("valid regex"));

/// Rewrite `\g<n>` placeholders into the regex crate's `${n}` syntax
fn convert_template(short: &str) -> String {
    GROUP_REFERENCE
        .replace_all(short, |caps: &Captures| format!("${{{}}}", &caps[1]))
        .into_owned()
}

/// A rule compiled for every way the pipeline applies it
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: Rule,
    /// Replacement template with `${n}` group references
    short: String,
    short_lower: String,
    short_trimmed_lower: String,
    raw: Regex,
    spaced: Regex,
    spaced_trimmed: Regex,
    word_start: Regex,
    leading: Regex,
}

impl CompiledRule {
    /// Compile a rule
    pub fn compile(rule: Rule) -> Result<Self> {
        let compile = |expr: String| {
            Regex::new(&expr).map_err(|source| RuleError::InvalidPattern {
                stage: rule.stage,
                pattern: rule.pattern.clone(),
                source,
            })
        };

        let long = rule.pattern.as_str();
        let trimmed = long.trim();

        let raw = compile(long.to_string())?;
        let spaced = compile(format!(" {long} "))?;
        let spaced_trimmed = compile(format!(" {trimmed} "))?;
        let word_start = compile(format!("(?:^| ){long} "))?;
        let leading = compile(format!("^{trimmed} "))?;

        let short = convert_template(&rule.short);
        let short_lower = short.to_lowercase();
        let short_trimmed_lower = short.trim().to_lowercase();

        Ok(Self {
            rule,
            short,
            short_lower,
            short_trimmed_lower,
            raw,
            spaced,
            spaced_trimmed,
            word_start,
            leading,
        })
    }

    /// Source rule
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Stage this rule belongs to
    pub fn stage(&self) -> Stage {
        self.rule.stage
    }

    /// Replacement template as written, with group references converted
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Lower-cased replacement template
    pub fn short_lower(&self) -> &str {
        &self.short_lower
    }

    /// Trimmed, lower-cased replacement template
    pub fn short_trimmed_lower(&self) -> &str {
        &self.short_trimmed_lower
    }

    /// The pattern as written
    pub fn raw(&self) -> &Regex {
        &self.raw
    }

    /// ` <pattern> `
    pub fn spaced(&self) -> &Regex {
        &self.spaced
    }

    /// ` <trimmed pattern> `
    pub fn spaced_trimmed(&self) -> &Regex {
        &self.spaced_trimmed
    }

    /// `(start or space)<pattern> `, without capturing the prefix so the
    /// rule's own group numbers are unchanged
    pub fn word_start(&self) -> &Regex {
        &self.word_start
    }

    /// `^<trimmed pattern> `
    pub fn leading(&self) -> &Regex {
        &self.leading
    }
}

/// Immutable mapping from stage to its rules, in source order
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    code: String,
    name: String,
    stages: BTreeMap<Stage, Vec<CompiledRule>>,
}

impl RuleTable {
    /// Build and compile a table from rules in application order
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        rules: impl IntoIterator<Item = Rule>,
    ) -> Result<Self> {
        let mut stages: BTreeMap<Stage, Vec<CompiledRule>> = BTreeMap::new();

        for rule in rules {
            let compiled = CompiledRule::compile(rule)?;
            stages.entry(compiled.stage()).or_default().push(compiled);
        }

        let table = Self {
            code: code.into(),
            name: name.into(),
            stages,
        };

        debug!(
            "built rule table '{}' with {} rules: {}",
            table.code,
            table.len(),
            table
                .stages()
                .map(|(stage, count)| format!("stage {stage}={count}"))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(table)
    }

    /// Table without rules: only canonicalization and the literal
    /// elision/initial passes have any effect
    pub fn empty() -> Self {
        Self {
            code: "empty".to_string(),
            name: "No rules".to_string(),
            stages: BTreeMap::new(),
        }
    }

    /// Create from configuration
    pub fn from_config(config: &RuleSetConfig) -> Result<Self> {
        config.validate()?;
        Self::new(
            config.metadata.code.clone(),
            config.metadata.name.clone(),
            config.rules.iter().cloned(),
        )
    }

    /// Parse and compile a TOML rule file's contents
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: RuleSetConfig =
            toml::from_str(source).map_err(|e| RuleError::Parse(e.to_string()))?;
        Self::from_config(&config)
    }

    /// Load a TOML rule file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RuleError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_toml_str(&content)
    }

    /// Rules of `stage`, in application order; empty when the stage has none
    pub fn rules(&self, stage: Stage) -> &[CompiledRule] {
        self.stages.get(&stage).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Populated stages with their rule counts, in identifier order
    pub fn stages(&self) -> impl Iterator<Item = (Stage, usize)> + '_ {
        self.stages.iter().map(|(stage, rules)| (*stage, rules.len()))
    }

    /// Total number of rules
    pub fn len(&self) -> usize {
        self.stages.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
