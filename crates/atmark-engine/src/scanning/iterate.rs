use crate::config::MentionSet;

/// One mention occurrence reported during a scan.
#[derive(Debug, Clone)]
pub struct RawMention<'a> {
    /// The exact markup text that matched.
    pub markup_text: &'a str,
    /// Byte offset of the match in the markup value.
    pub markup_index: usize,
    /// Byte offset where the display text begins in the plain-text
    /// projection.
    pub plain_text_index: usize,
    /// Captured identifier.
    pub id: &'a str,
    /// Transformed display text.
    pub display: String,
    /// Index of the matching config within the set.
    pub child_index: usize,
}

/// A literal run between mentions.
///
/// Runs before a mention are reported even when empty (two adjacent
/// mentions, or a mention at the start of the value); the position mapper
/// relies on empty runs to own the boundary between two mentions. A
/// trailing run is only reported when non-empty.
#[derive(Debug, Clone, Copy)]
pub struct LiteralRun<'a> {
    pub text: &'a str,
    /// Byte offset of the run in the markup value.
    pub markup_index: usize,
    /// Byte offset of the run in the plain-text projection.
    pub plain_text_index: usize,
}

/// One item in document order during a markup scan.
#[derive(Debug, Clone)]
pub enum ScanEvent<'a> {
    Literal(LiteralRun<'a>),
    Mention(RawMention<'a>),
}

/// Walks `value` once, reporting every literal run and mention occurrence
/// in document order with synchronized offsets in both string spaces.
///
/// The plain-text offset advances by each literal run's length and each
/// mention's display length (not its markup length), so the offset
/// reported for a mention is exactly where its display text starts in the
/// extracted plain text. Zero-width matches are skipped, so the scan
/// terminates for any pattern.
pub fn iterate_mentions_markup<'a>(
    value: &'a str,
    set: &MentionSet,
    mut visit: impl FnMut(ScanEvent<'a>),
) {
    let matcher = set.matcher();
    let mut markup_cursor = 0;
    let mut plain_cursor = 0;

    for caps in matcher.regex().captures_iter(value) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.as_str().is_empty() {
            // A degenerate pattern may match zero width; such a match is
            // not a mention and must not stall the scan.
            continue;
        }
        let Some((child_index, inner)) = matcher.attribute(&caps) else {
            continue;
        };
        let config = &set.configs()[child_index];

        let id = caps
            .get(inner + config.id_position())
            .map_or("", |m| m.as_str());
        let captured_display = caps
            .get(inner + config.display_position())
            .map_or("", |m| m.as_str());
        let display = config.transform_display(id, captured_display);
        let display_len = display.len();

        let literal = &value[markup_cursor..whole.start()];
        visit(ScanEvent::Literal(LiteralRun {
            text: literal,
            markup_index: markup_cursor,
            plain_text_index: plain_cursor,
        }));
        plain_cursor += literal.len();

        visit(ScanEvent::Mention(RawMention {
            markup_text: whole.as_str(),
            markup_index: whole.start(),
            plain_text_index: plain_cursor,
            id,
            display,
            child_index,
        }));
        plain_cursor += display_len;
        markup_cursor = whole.end();
    }

    if markup_cursor < value.len() {
        visit(ScanEvent::Literal(LiteralRun {
            text: &value[markup_cursor..],
            markup_index: markup_cursor,
            plain_text_index: plain_cursor,
        }));
    }
}
