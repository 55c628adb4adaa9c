use crate::config::MentionSet;

use super::iterate::{ScanEvent, iterate_mentions_markup};

/// Projects a markup value to the plain text shown to the user: literal
/// runs pass through unchanged, each mention contributes its transformed
/// display text.
pub fn get_plain_text(value: &str, set: &MentionSet) -> String {
    let mut plain = String::with_capacity(value.len());
    iterate_mentions_markup(value, set, |event| match event {
        ScanEvent::Literal(run) => plain.push_str(run.text),
        ScanEvent::Mention(mention) => plain.push_str(&mention.display),
    });
    plain
}
