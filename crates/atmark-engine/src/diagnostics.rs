use serde::Serialize;

/// A non-fatal configuration anomaly.
///
/// Misconfigured mention types never fail an operation: the affected type
/// degrades to literal text or resolves the wrong captured group, and the
/// degradation is recorded as one of these. Diagnostics are collected on
/// the compiled [`MentionSet`](crate::config::MentionSet) and also emitted
/// through `tracing::warn!` at the point of detection, so hosts can either
/// inspect them programmatically or route them through a subscriber.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum Diagnostic {
    /// The markup template contains neither `__id__` nor `__display__`.
    #[error("markup template `{template}` contains neither `__id__` nor `__display__`")]
    MissingPlaceholder { template: String },

    /// A custom capture regex declares a different number of capturing
    /// groups than the template has placeholders.
    #[error(
        "regex `{pattern}` declares {groups} capturing group(s) but markup template `{template}` uses {placeholders} placeholder(s)"
    )]
    CaptureGroupMismatch {
        pattern: String,
        template: String,
        groups: usize,
        placeholders: usize,
    },

    /// A custom capture regex sets inline flags, which do not carry over
    /// into the combined scan pattern.
    #[error("regex flags are not supported: change `{pattern}` into a flagless pattern")]
    UnsupportedFlags { pattern: String },

    /// A custom capture regex failed to compile; the template-derived
    /// pattern is used instead.
    #[error("invalid regex `{pattern}`: {message}")]
    InvalidRegex { pattern: String, message: String },
}

impl Diagnostic {
    pub(crate) fn emit(&self) {
        tracing::warn!("{self}");
    }
}
