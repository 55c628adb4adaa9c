use crate::config::MentionSet;
use crate::mapping::{OnMention, map_plain_text_index};
use crate::scanning::{get_mentions, get_plain_text};
use crate::span::Span;

use super::splice::splice_string;

/// A single contiguous plain-text edit recovered by diffing the old and
/// new plain text.
#[derive(Debug, PartialEq, Eq)]
struct EditDescriptor<'a> {
    /// Removed range in the old plain text.
    removed: Span,
    /// Replacement text, a slice of the new plain text.
    inserted: &'a str,
}

/// Reconciles a plain-text edit back into the markup value.
///
/// `new_plain_text` is the text after the user's edit and
/// `selection_start` the caret position within it. Mentions untouched by
/// the edit are preserved byte for byte; a mention whose display text
/// intersects the removed region is deleted in full, even when only one of
/// its characters was removed. Inserted text is spliced in verbatim and
/// never re-parsed as markup, even if it resembles a configured template.
pub fn apply_change_to_value(
    value: &str,
    set: &MentionSet,
    new_plain_text: &str,
    selection_start: usize,
) -> String {
    let old_plain_text = get_plain_text(value, set);
    if old_plain_text == new_plain_text {
        return value.to_string();
    }

    let descriptor = diff_plain_text(&old_plain_text, new_plain_text, selection_start);
    let mut removed = descriptor.removed;

    // Deleting any character of a mention deletes the whole mention.
    if !removed.is_empty() {
        for mention in get_mentions(value, set) {
            if mention.plain_span.intersects(removed) {
                removed.start = removed.start.min(mention.plain_span.start);
                removed.end = removed.end.max(mention.plain_span.end);
            }
        }
    }

    let splice_start = map_plain_text_index(value, set, removed.start, OnMention::Start);
    let splice_end = map_plain_text_index(value, set, removed.end, OnMention::End);
    splice_string(value, splice_start, splice_end, descriptor.inserted)
}

/// Isolates the single changed region between the old and new plain text.
fn diff_plain_text<'a>(old: &str, new: &'a str, selection_start: usize) -> EditDescriptor<'a> {
    let prefix = common_prefix_len(old, new);
    // A suffix overlapping the prefix would double-count unchanged text.
    let max_suffix = old.len().min(new.len()) - prefix;
    let suffix = common_suffix_len(old, new, max_suffix);

    let descriptor = EditDescriptor {
        removed: Span {
            start: prefix,
            end: old.len() - suffix,
        },
        inserted: &new[prefix..new.len() - suffix],
    };
    refine_with_caret(old, new, descriptor, selection_start)
}

/// Slides a pure insertion or deletion left to where the caret says it
/// happened.
///
/// Maximal prefix matching alone always blames the last copy in a repeated
/// run: deleting the first `a` of `aa` diffs as deleting the second. The
/// two spellings produce the same plain text but not the same markup when
/// one copy belongs to a mention, so when the caret proves the edit site
/// was earlier and the slid descriptor still reproduces the new text
/// exactly, the earlier site wins.
fn refine_with_caret<'a>(
    old: &str,
    new: &'a str,
    descriptor: EditDescriptor<'a>,
    selection_start: usize,
) -> EditDescriptor<'a> {
    if descriptor.removed.is_empty() && !descriptor.inserted.is_empty() {
        // Pure insertion: the caret sits at the end of the inserted text.
        let len = descriptor.inserted.len();
        let target = selection_start.saturating_sub(len);
        if target < descriptor.removed.start
            && new.is_char_boundary(target)
            && new.is_char_boundary(target + len)
            && old[..target] == new[..target]
            && old[target..] == new[target + len..]
        {
            return EditDescriptor {
                removed: Span {
                    start: target,
                    end: target,
                },
                inserted: &new[target..target + len],
            };
        }
    } else if descriptor.inserted.is_empty() && !descriptor.removed.is_empty() {
        // Pure deletion: the caret sits where the removed text began.
        let len = descriptor.removed.len();
        let target = selection_start;
        if target < descriptor.removed.start
            && target + len <= old.len()
            && old.is_char_boundary(target)
            && old.is_char_boundary(target + len)
            && new[..target] == old[..target]
            && new[target..] == old[target + len..]
        {
            return EditDescriptor {
                removed: Span {
                    start: target,
                    end: target + len,
                },
                inserted: "",
            };
        }
    }
    descriptor
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}

/// Longest common suffix in bytes, never exceeding `max` so the suffix
/// cannot reach into the common prefix.
fn common_suffix_len(a: &str, b: &str, max: usize) -> usize {
    let mut len = 0;
    for (x, y) in a.chars().rev().zip(b.chars().rev()) {
        if x != y || len + x.len_utf8() > max {
            break;
        }
        len += x.len_utf8();
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::user_mentions;

    #[test]
    fn diff_isolates_a_middle_replacement() {
        let descriptor = diff_plain_text("Hi John, bye", "Hi Ada, bye", 6);
        assert_eq!(descriptor.removed, Span { start: 3, end: 7 });
        assert_eq!(descriptor.inserted, "Ada");
    }

    #[test]
    fn diff_of_total_replacement_spans_everything() {
        let descriptor = diff_plain_text("abc", "xyz", 3);
        assert_eq!(descriptor.removed, Span { start: 0, end: 3 });
        assert_eq!(descriptor.inserted, "xyz");
    }

    #[test]
    fn caret_slides_a_deletion_in_a_repeated_run() {
        // Deleting the first `a` of "aa" diffs as deleting the second;
        // the caret at 0 proves it was the first.
        let descriptor = diff_plain_text("aa", "a", 0);
        assert_eq!(descriptor.removed, Span { start: 0, end: 1 });
    }

    #[test]
    fn caret_slides_an_insertion_in_a_repeated_run() {
        let descriptor = diff_plain_text("a", "aa", 1);
        assert_eq!(descriptor.removed, Span { start: 0, end: 0 });
        assert_eq!(descriptor.inserted, "a");
    }

    #[test]
    fn caret_outside_the_run_leaves_the_diff_alone() {
        let descriptor = diff_plain_text("aa", "a", 1);
        assert_eq!(descriptor.removed, Span { start: 1, end: 2 });
    }

    #[test]
    fn removing_one_display_char_deletes_the_whole_mention() {
        let set = user_mentions();
        let value = "Hi @[John](u1), how are you?";
        // old plain: "Hi John, how are you?"; the `h` of John was removed
        let result = apply_change_to_value(value, &set, "Hi Jon, how are you?", 6);
        assert_eq!(result, "Hi , how are you?");
    }

    #[test]
    fn backspacing_the_mention_not_the_neighbor_deletes_it() {
        let set = user_mentions();
        // plain: "aa" — first `a` is the mention, second is literal
        let value = "@[a](1)a";
        assert_eq!(apply_change_to_value(value, &set, "a", 0), "a");
        assert_eq!(apply_change_to_value(value, &set, "a", 1), "@[a](1)");
    }

    #[test]
    fn typing_before_a_mention_stays_before_it() {
        let set = user_mentions();
        // plain: "a"; typing another `a` at the start, caret ends at 1
        let value = "@[a](1)";
        assert_eq!(apply_change_to_value(value, &set, "aa", 1), "a@[a](1)");
        // typing after the mention, caret ends at 2
        assert_eq!(apply_change_to_value(value, &set, "aa", 2), "@[a](1)a");
    }

    #[test]
    fn noop_edit_returns_the_value_unchanged() {
        let set = user_mentions();
        let value = "Hi @[John](u1), bye";
        assert_eq!(apply_change_to_value(value, &set, "Hi John, bye", 4), value);
    }

    #[test]
    fn insert_into_literal_text_leaves_mentions_untouched() {
        let set = user_mentions();
        let value = "Hi @[John](u1), bye";
        let result = apply_change_to_value(value, &set, "Hi John, good bye", 13);
        assert_eq!(result, "Hi @[John](u1), good bye");
    }

    #[test]
    fn typing_inside_a_display_span_replaces_the_mention() {
        let set = user_mentions();
        let value = "Hi @[John](u1)";
        // plain "Hi John" -> "Hi Johxn": insertion lands inside the span
        let result = apply_change_to_value(value, &set, "Hi Johxn", 7);
        assert_eq!(result, "Hi x");
    }

    #[test]
    fn selecting_across_mention_and_literal_removes_both() {
        let set = user_mentions();
        let value = "Hi @[John](u1), bye";
        // selection covered "ohn, " (plain [4, 9)) and was deleted
        let result = apply_change_to_value(value, &set, "Hi Jbye", 4);
        assert_eq!(result, "Hi bye");
    }

    #[test]
    fn total_replacement_drops_every_mention() {
        let set = user_mentions();
        let value = "@[a](1) and @[b](2)";
        assert_eq!(apply_change_to_value(value, &set, "fresh", 5), "fresh");
    }

    #[test]
    fn multibyte_text_splices_on_char_boundaries() {
        let set = user_mentions();
        let value = "héllo @[Jörg](u1)!";
        // plain: "héllo Jörg!" — replace the `é` with `e`
        let result = apply_change_to_value(value, &set, "hello Jörg!", 2);
        assert_eq!(result, "hello @[Jörg](u1)!");
    }
}
