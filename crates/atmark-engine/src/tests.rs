//! Shared helpers for unit tests.

use crate::config::{MentionConfig, MentionSet};

/// A set with the conventional user-mention template.
pub fn user_mentions() -> MentionSet {
    MentionSet::new(vec![MentionConfig::new("@[__display__](__id__)")])
}

/// Users plus tags, in that order.
pub fn user_and_tag_mentions() -> MentionSet {
    MentionSet::new(vec![
        MentionConfig::new("@[__display__](__id__)"),
        MentionConfig::new("#[__display__](__id__)"),
    ])
}
