//! Offset translation between markup space and plain-text space.
//!
//! Every mention contributes a drift of `markup_len - display_len` between
//! the two spaces. Both mapping directions are total over `[0, len]`:
//! offsets that land inside a mention clamp to one of its boundaries
//! rather than resolving into the opaque identifier portion of the markup.

use crate::config::MentionSet;
use crate::scanning::{ScanEvent, get_mentions, iterate_mentions_markup};

/// Which markup boundary an offset inside a mention's display text clamps
/// to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnMention {
    /// Clamp to the start of the mention's markup.
    Start,
    /// Clamp to the end of the mention's markup.
    End,
}

/// Mapping direction for [`map_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    PlainToMarkup,
    MarkupToPlain,
}

/// Converts `offset` between the two string spaces.
///
/// Plain-to-markup clamps offsets inside a mention's display text to the
/// mention's markup start; markup-to-plain clamps offsets inside a
/// mention's markup to the mention's plain-text start.
pub fn map_index(value: &str, set: &MentionSet, offset: usize, direction: Direction) -> usize {
    match direction {
        Direction::PlainToMarkup => map_plain_text_index(value, set, offset, OnMention::Start),
        Direction::MarkupToPlain => map_markup_index(value, set, offset),
    }
}

/// Maps an offset in plain-text space to markup space.
///
/// Total over `[0, plain_len]`. Boundary offsets belong to the literal run
/// ending there, so the position just before or just after a mention maps
/// without clamping; only offsets strictly inside a display span clamp to
/// the boundary selected by `on_mention`.
pub fn map_plain_text_index(
    value: &str,
    set: &MentionSet,
    plain_index: usize,
    on_mention: OnMention,
) -> usize {
    let mut result = None;
    iterate_mentions_markup(value, set, |event| {
        if result.is_some() {
            return;
        }
        match event {
            ScanEvent::Literal(run) => {
                if run.plain_text_index + run.text.len() >= plain_index {
                    result = Some(run.markup_index + (plain_index - run.plain_text_index));
                }
            }
            ScanEvent::Mention(m) => {
                if m.plain_text_index + m.display.len() > plain_index {
                    result = Some(match on_mention {
                        OnMention::Start => m.markup_index,
                        OnMention::End => m.markup_index + m.markup_text.len(),
                    });
                }
            }
        }
    });
    // An offset past the last mention with no trailing literal text maps
    // to the end of the value.
    result.unwrap_or(value.len())
}

/// Maps an offset in markup space to plain-text space.
///
/// Total over `[0, markup_len]`; offsets inside a mention's markup span
/// clamp to the mention's plain-text start.
pub fn map_markup_index(value: &str, set: &MentionSet, markup_index: usize) -> usize {
    let mut result = None;
    let mut plain_len = 0;
    iterate_mentions_markup(value, set, |event| {
        match &event {
            ScanEvent::Literal(run) => plain_len = run.plain_text_index + run.text.len(),
            ScanEvent::Mention(m) => plain_len = m.plain_text_index + m.display.len(),
        }
        if result.is_some() {
            return;
        }
        match event {
            ScanEvent::Literal(run) => {
                if run.markup_index + run.text.len() >= markup_index {
                    result = Some(run.plain_text_index + (markup_index - run.markup_index));
                }
            }
            ScanEvent::Mention(m) => {
                if m.markup_index + m.markup_text.len() > markup_index {
                    result = Some(m.plain_text_index);
                }
            }
        }
    });
    result.unwrap_or(plain_len)
}

/// Returns the plain-text start offset of the mention whose display span
/// contains `plain_index`, or `None` when the offset is not inside any
/// mention. A caret inside a mention is treated as addressing the whole
/// mention, starting here.
pub fn find_start_of_mention_in_plain_text(
    value: &str,
    set: &MentionSet,
    plain_index: usize,
) -> Option<usize> {
    let mut result = None;
    iterate_mentions_markup(value, set, |event| {
        if let ScanEvent::Mention(m) = event {
            if m.plain_text_index <= plain_index && plain_index < m.plain_text_index + m.display.len()
            {
                result = Some(m.plain_text_index);
            }
        }
    });
    result
}

/// Returns the plain-text offset just past the right-most mention, or 0
/// when the value has none. Text at or beyond this offset is freely
/// editable trailing text.
pub fn get_end_of_last_mention(value: &str, set: &MentionSet) -> usize {
    get_mentions(value, set)
        .last()
        .map_or(0, |mention| mention.plain_span.end)
}
