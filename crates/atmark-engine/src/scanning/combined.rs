use regex::{Captures, Regex};

use crate::config::MentionConfig;
use crate::diagnostics::Diagnostic;

/// One regex scanning for every configured mention type at once.
///
/// Each per-type pattern body is wrapped in its own capturing group and the
/// groups joined with `|`, so a single left-to-right pass yields every
/// occurrence in document order, non-overlapping. Which alternative matched
/// is recovered from wrapper-group participation rather than from captured
/// text, so an empty capture cannot be misattributed to another type.
#[derive(Debug, Clone)]
pub struct CombinedMatcher {
    regex: Regex,
    groups: Vec<GroupLayout>,
}

/// Capture-group layout for one config inside the combined pattern.
#[derive(Debug, Clone, Copy)]
struct GroupLayout {
    /// Index of the group wrapping the config's whole pattern.
    wrapper: usize,
    /// Index of the config's first own capturing group.
    inner: usize,
}

impl CombinedMatcher {
    /// Compiles the combined pattern, reporting per-type patterns that
    /// carry inline flags (flags are not merged; the pattern is still
    /// included as-is).
    pub(crate) fn new(configs: &[MentionConfig]) -> (Self, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let mut groups = Vec::with_capacity(configs.len());
        let mut pieces = Vec::with_capacity(configs.len());
        let mut next_group = 1;

        for config in configs {
            let pattern = config.regex().as_str();
            if has_inline_flags(pattern) {
                let diagnostic = Diagnostic::UnsupportedFlags {
                    pattern: pattern.to_string(),
                };
                diagnostic.emit();
                diagnostics.push(diagnostic);
            }
            groups.push(GroupLayout {
                wrapper: next_group,
                inner: next_group + 1,
            });
            next_group += 1 + config.group_count();
            pieces.push(format!("({pattern})"));
        }

        let regex = if pieces.is_empty() {
            never_matching()
        } else {
            // Each piece compiled on its own already; wrapping in a plain
            // group and alternating keeps them valid.
            Regex::new(&pieces.join("|")).unwrap_or_else(|_| never_matching())
        };

        (Self { regex, groups }, diagnostics)
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Attributes a combined match to its config, returning the config
    /// index and the index of the config's first own capturing group.
    pub(crate) fn attribute(&self, caps: &Captures<'_>) -> Option<(usize, usize)> {
        self.groups
            .iter()
            .position(|layout| caps.get(layout.wrapper).is_some())
            .map(|child_index| (child_index, self.groups[child_index].inner))
    }
}

/// Detects a leading inline-flag construct such as `(?i)` or `(?im:`.
fn has_inline_flags(pattern: &str) -> bool {
    pattern
        .strip_prefix("(?")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| matches!(c, 'i' | 'm' | 's' | 'x' | 'u' | 'U' | 'R' | '-'))
}

fn never_matching() -> Regex {
    // A class that excludes every character matches nothing.
    Regex::new(r"[^\s\S]").expect("constant pattern")
}
