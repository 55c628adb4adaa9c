use atmark_engine::{MentionConfig, MentionSet};

pub fn user_and_tag_mentions() -> MentionSet {
    MentionSet::new(vec![
        MentionConfig::new("@[__display__](__id__)"),
        MentionConfig::new("#[__display__](__id__)"),
    ])
}

/// Builds a markup value with `mentions` occurrences separated by prose.
pub fn generate_markup_value(mentions: usize) -> String {
    let mut value = String::new();
    for i in 0..mentions {
        value.push_str("some leading prose talking to ");
        if i % 2 == 0 {
            value.push_str(&format!("@[User {i}](u{i})"));
        } else {
            value.push_str(&format!("#[topic-{i}](t{i})"));
        }
        value.push_str(" and then more text follows. ");
    }
    value
}
