use serde::Serialize;

use crate::config::MentionSet;
use crate::span::Span;

use super::iterate::{ScanEvent, iterate_mentions_markup};

/// One mention found in a markup value.
///
/// Occurrences are recomputed on every scan and never persisted; the spans
/// are only valid against the exact value they were scanned from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentionOccurrence {
    /// Identifier captured from the markup.
    pub id: String,
    /// Transformed display text.
    pub display: String,
    /// Index of the mention type that matched.
    pub child_index: usize,
    /// Range of the full occurrence in markup space.
    pub markup_span: Span,
    /// Range of the display text in plain-text space.
    pub plain_span: Span,
}

/// Lists every mention in `value`, left to right, regardless of type.
pub fn get_mentions(value: &str, set: &MentionSet) -> Vec<MentionOccurrence> {
    let mut mentions = Vec::new();
    iterate_mentions_markup(value, set, |event| {
        if let ScanEvent::Mention(m) = event {
            mentions.push(MentionOccurrence {
                id: m.id.to_string(),
                child_index: m.child_index,
                markup_span: Span {
                    start: m.markup_index,
                    end: m.markup_index + m.markup_text.len(),
                },
                plain_span: Span {
                    start: m.plain_text_index,
                    end: m.plain_text_index + m.display.len(),
                },
                display: m.display,
            });
        }
    });
    mentions
}
