//! Rewrite rules: a pattern, its replacement, and how the pattern is matched.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::utils::error::{PatchError, PatchResult};

/// How a rule's pattern is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Exact, case-sensitive substring.
    #[default]
    Literal,
    /// Regular expression in `regex` crate syntax.
    Regex,
}

/// A single find/replace rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    pub name: String,
    pub pattern: String,
    pub replacement: String,
    #[serde(default)]
    pub kind: RuleKind,
    /// Let `.` match newlines so the pattern can span a whole block.
    #[serde(default)]
    pub multiline: bool,
    /// Expand `$1` / `${name}` capture references in the replacement.
    #[serde(default)]
    pub expand: bool,
}

impl Rule {
    pub fn literal(name: &str, pattern: &str, replacement: &str) -> Self {
        Rule {
            name: name.to_string(),
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            kind: RuleKind::Literal,
            multiline: false,
            expand: false,
        }
    }

    pub fn regex(name: &str, pattern: &str, replacement: &str) -> Self {
        Rule {
            kind: RuleKind::Regex,
            ..Rule::literal(name, pattern, replacement)
        }
    }

    /// A regex rule whose pattern is expected to cross line boundaries.
    pub fn structural(name: &str, pattern: &str, replacement: &str) -> Self {
        Rule {
            multiline: true,
            ..Rule::regex(name, pattern, replacement)
        }
    }

    pub fn compile(&self) -> PatchResult<CompiledRule> {
        let source = match self.kind {
            RuleKind::Literal => regex::escape(&self.pattern),
            RuleKind::Regex => self.pattern.clone(),
        };
        let regex = RegexBuilder::new(&source)
            .dot_matches_new_line(self.multiline)
            .build()
            .map_err(|source| PatchError::InvalidPattern {
                rule: self.name.clone(),
                source,
            })?;
        Ok(CompiledRule {
            rule: self.clone(),
            regex,
        })
    }
}

/// A rule together with its compiled matcher.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: Rule,
    regex: Regex,
}

impl CompiledRule {
    pub fn name(&self) -> &str {
        &self.rule.name
    }

    pub fn count_matches(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// Replaces every non-overlapping match, left to right.
    /// Returns the new text and the number of matches replaced.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let matches = self.count_matches(text);
        if matches == 0 {
            return (text.to_string(), 0);
        }
        let replaced = if self.rule.expand {
            self.regex.replace_all(text, self.rule.replacement.as_str())
        } else {
            self.regex
                .replace_all(text, regex::NoExpand(&self.rule.replacement))
        };
        (replaced.into_owned(), matches)
    }

    /// True when the pattern still matches the rule's own replacement text,
    /// i.e. running the rule again would rewrite what it just produced.
    pub fn rematches_own_output(&self) -> bool {
        self.regex.is_match(&self.rule.replacement)
    }
}

/// Compiles rules in order, failing on the first bad pattern.
pub fn compile_all(rules: &[Rule]) -> PatchResult<Vec<CompiledRule>> {
    rules.iter().map(Rule::compile).collect()
}
