//! The built-in mobile responsiveness rule set for `CompactStatsHeader.tsx`.
//!
//! Order matters: later rules see the output of earlier ones. The two
//! structural rules at the end expect the `flex-shrink-0` classes and the
//! shortened `MAX` label produced by the simple rules.

use super::rule::Rule;

/// Default file the built-in rules are written against.
pub const DEFAULT_TARGET: &str = "src/components/CompactStatsHeader.tsx";

const NEXT_LEVEL_PATTERN: &str = r#"\{nextLevel && \(\s*<span className="text-xs text-muted-foreground min-w-fit flex-shrink-0">\s*\{gloryToNext\} to \{nextLevel\.name\}\s*</span>\s*\)\}"#;

const NEXT_LEVEL_REPLACEMENT: &str = r#"{nextLevel && (
            <>
              <span className="text-xs text-muted-foreground min-w-fit flex-shrink-0 whitespace-nowrap hidden sm:inline">
                {gloryToNext} to {nextLevel.name}
              </span>
              <span className="text-xs text-muted-foreground min-w-fit flex-shrink-0 whitespace-nowrap sm:hidden">
                {gloryToNext}
              </span>
            </>
          )}"#;

const MAX_LEVEL_PATTERN: &str = r#"\{!nextLevel && \(\s*<span className="text-xs text-yellow-500 min-w-fit font-semibold flex-shrink-0">\s*MAX\s*</span>\s*\)\}"#;

const MAX_LEVEL_REPLACEMENT: &str = r#"{!nextLevel && (
            <span className="text-xs text-yellow-500 min-w-fit font-semibold flex-shrink-0 whitespace-nowrap">
              MAX
            </span>
          )}"#;

/// Simple class and label substitutions, applied first.
pub fn simple_rules() -> Vec<Rule> {
    vec![
        // responsive gaps and text sizing
        Rule::literal(
            "responsive-header-gap",
            "gap-3 flex-1 min-w-0",
            "gap-2 sm:gap-3 flex-1 min-w-0",
        ),
        Rule::literal(
            "responsive-title-size",
            "text-lg font-bold text-gradient-solar truncate",
            "text-base sm:text-lg font-bold text-gradient-solar truncate",
        ),
        Rule::literal("tighter-stats-gap", "gap-2 text-sm", "gap-1.5 text-sm"),
        // touch targets
        Rule::literal(
            "touch-target-size",
            r#"h-8 w-8 p-0""#,
            r#"h-9 w-9 sm:h-8 sm:w-8 p-0 touch-manipulation""#,
        ),
        // no wrapping
        Rule::literal(
            "no-shrink-min-fit",
            r#"min-w-fit">"#,
            r#"min-w-fit flex-shrink-0">"#,
        ),
        Rule::literal(
            "no-shrink-star-icon",
            r#"w-3 h-3 text-yellow-500""#,
            r#"w-3 h-3 text-yellow-500 flex-shrink-0""#,
        ),
        Rule::literal(
            "nowrap-level-name",
            "<span>{currentLevel.name}</span>",
            r#"<span className="whitespace-nowrap">{currentLevel.name}</span>"#,
        ),
        Rule::regex(
            "progress-min-width",
            r#"className="flex-1">\s*<Progress"#,
            "className=\"flex-1 min-w-[60px]\">\n            <Progress",
        ),
        Rule::literal("short-max-label", "MAX LEVEL", "MAX"),
    ]
}

/// Multi-line block rewrites, applied after [`simple_rules`].
pub fn structural_rules() -> Vec<Rule> {
    vec![
        Rule::structural(
            "next-level-variants",
            NEXT_LEVEL_PATTERN,
            NEXT_LEVEL_REPLACEMENT,
        ),
        Rule::structural("max-level-nowrap", MAX_LEVEL_PATTERN, MAX_LEVEL_REPLACEMENT),
    ]
}

/// The full built-in rule list in execution order.
pub fn builtin_rules() -> Vec<Rule> {
    let mut rules = simple_rules();
    rules.extend(structural_rules());
    rules
}
