//! Mention type configuration.
//!
//! A [`MentionConfig`] describes one mention type: the markup template its
//! occurrences are stored as, the capture pattern that recognizes them, and
//! how a captured `(id, display)` pair is rendered for the user. A
//! [`MentionSet`] compiles an ordered list of configs into a single
//! immutable scanner; every engine operation borrows the set, so the
//! per-keystroke cost is one pass with an already-compiled pattern.

pub mod placeholders;
pub mod template;

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::Deserialize;

use crate::diagnostics::Diagnostic;
use crate::scanning::combined::CombinedMatcher;
use placeholders::Param;

pub use template::make_mention_markup;

/// Maps a captured `(id, display)` pair to the text shown to the user.
pub type DisplayTransform = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// Configuration for one mention type.
#[derive(Clone)]
pub struct MentionConfig {
    template: String,
    regex: Regex,
    display_transform: Option<DisplayTransform>,
    id_position: usize,
    display_position: usize,
    diagnostics: Vec<Diagnostic>,
}

impl MentionConfig {
    /// Builds a config whose capture pattern is derived from `template`.
    ///
    /// A template containing neither `__id__` nor `__display__` is reported
    /// as a diagnostic; the config still participates in scanning with
    /// whatever its pattern happens to match.
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        let mut diagnostics = Vec::new();
        if placeholders::count_placeholders(&template) == 0 {
            let diagnostic = Diagnostic::MissingPlaceholder {
                template: template.clone(),
            };
            diagnostic.emit();
            diagnostics.push(diagnostic);
        }
        let regex = template::markup_to_regex(&template);
        let id_position = placeholders::capture_group_position(&template, Param::Id);
        let display_position = placeholders::capture_group_position(&template, Param::Display);
        Self {
            template,
            regex,
            display_transform: None,
            id_position,
            display_position,
            diagnostics,
        }
    }

    /// Replaces the derived capture pattern with a caller-supplied one.
    ///
    /// The pattern must declare exactly one capturing group per placeholder
    /// present in the template; a mismatch is diagnosed but the pattern is
    /// still used. A pattern that fails to compile is diagnosed and the
    /// derived pattern kept, so the mention type keeps matching.
    pub fn with_regex(mut self, pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(regex) => {
                let groups = regex.captures_len() - 1;
                let expected = placeholders::count_placeholders(&self.template);
                if groups != expected {
                    let diagnostic = Diagnostic::CaptureGroupMismatch {
                        pattern: pattern.to_string(),
                        template: self.template.clone(),
                        groups,
                        placeholders: expected,
                    };
                    diagnostic.emit();
                    self.diagnostics.push(diagnostic);
                }
                self.regex = regex;
            }
            Err(err) => {
                let diagnostic = Diagnostic::InvalidRegex {
                    pattern: pattern.to_string(),
                    message: err.to_string(),
                };
                diagnostic.emit();
                self.diagnostics.push(diagnostic);
            }
        }
        self
    }

    /// Overrides how a captured `(id, display)` pair is rendered. The
    /// default renders the display text, falling back to the id when the
    /// capture is empty.
    pub fn with_display_transform(
        mut self,
        transform: impl Fn(&str, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.display_transform = Some(Arc::new(transform));
        self
    }

    /// The markup template occurrences of this type are stored as.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The capture pattern recognizing one occurrence of this type.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Renders the markup for one mention of this type.
    pub fn make_markup(&self, id: &str, display: &str) -> String {
        template::make_mention_markup(&self.template, id, display)
    }

    /// Applies the display transform to a captured pair.
    pub fn transform_display(&self, id: &str, display: &str) -> String {
        match &self.display_transform {
            Some(transform) => transform(id, display),
            None if display.is_empty() => id.to_string(),
            None => display.to_string(),
        }
    }

    /// Number of capturing groups the pattern contributes to the combined
    /// scanner.
    pub(crate) fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    pub(crate) fn id_position(&self) -> usize {
        self.id_position
    }

    pub(crate) fn display_position(&self) -> usize {
        self.display_position
    }

    pub(crate) fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Debug for MentionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MentionConfig")
            .field("template", &self.template)
            .field("regex", &self.regex.as_str())
            .field("has_display_transform", &self.display_transform.is_some())
            .finish()
    }
}

/// Declarative form of [`MentionConfig`], e.g. parsed from a TOML or JSON
/// definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct MentionDescriptor {
    /// Markup template containing `__id__` and/or `__display__`.
    pub markup: String,
    /// Optional custom capture pattern overriding the derived one.
    #[serde(default)]
    pub regex: Option<String>,
}

impl From<MentionDescriptor> for MentionConfig {
    fn from(descriptor: MentionDescriptor) -> Self {
        let config = MentionConfig::new(descriptor.markup);
        match descriptor.regex {
            Some(pattern) => config.with_regex(&pattern),
            None => config,
        }
    }
}

/// An immutable, compiled, ordered list of mention types.
///
/// Compiling happens once, up front; the set is read-only afterwards and
/// can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct MentionSet {
    configs: Vec<MentionConfig>,
    matcher: CombinedMatcher,
    diagnostics: Vec<Diagnostic>,
}

impl MentionSet {
    /// Compiles the combined scanner for an ordered list of configs.
    pub fn new(configs: Vec<MentionConfig>) -> Self {
        let (matcher, matcher_diagnostics) = CombinedMatcher::new(&configs);
        let mut diagnostics: Vec<Diagnostic> = configs
            .iter()
            .flat_map(|config| config.diagnostics().iter().cloned())
            .collect();
        diagnostics.extend(matcher_diagnostics);
        Self {
            configs,
            matcher,
            diagnostics,
        }
    }

    /// Builds a set from declarative descriptors.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = MentionDescriptor>) -> Self {
        Self::new(descriptors.into_iter().map(MentionConfig::from).collect())
    }

    /// The configs in scan order.
    pub fn configs(&self) -> &[MentionConfig] {
        &self.configs
    }

    /// Anomalies recorded while building the configs and compiling the set.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub(crate) fn matcher(&self) -> &CombinedMatcher {
        &self.matcher
    }
}
