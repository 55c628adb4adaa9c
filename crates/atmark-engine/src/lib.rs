pub mod config;
pub mod diagnostics;
pub mod editing;
pub mod mapping;
pub mod scanning;
pub mod span;

#[cfg(test)]
pub mod tests;

// Re-export the functional surface for easier usage
pub use config::{
    DisplayTransform, MentionConfig, MentionDescriptor, MentionSet, make_mention_markup,
};
pub use diagnostics::Diagnostic;
pub use editing::{apply_change_to_value, splice_string};
pub use mapping::{
    Direction, OnMention, find_start_of_mention_in_plain_text, get_end_of_last_mention, map_index,
    map_markup_index, map_plain_text_index,
};
pub use scanning::{
    LiteralRun, MentionOccurrence, RawMention, ScanEvent, get_mentions, get_plain_text,
    iterate_mentions_markup,
};
pub use span::Span;
