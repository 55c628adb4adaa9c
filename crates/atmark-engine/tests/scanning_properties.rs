use atmark_engine::{
    Direction, MentionConfig, MentionSet, ScanEvent, get_mentions, get_plain_text,
    iterate_mentions_markup, map_index,
};

fn user_and_tag_mentions() -> MentionSet {
    MentionSet::new(vec![
        MentionConfig::new("@[__display__](__id__)"),
        MentionConfig::new("#[__display__](__id__)"),
    ])
}

const VALUE: &str = "Hi @[John](u1), look at #[rust](t7) with @[Ada](u2)!";

/// The plain-text offset reported for each occurrence must be exactly
/// where its display text starts in the extracted plain text.
#[test]
fn iterator_offsets_agree_with_the_extractor() {
    let set = user_and_tag_mentions();
    let plain = get_plain_text(VALUE, &set);

    for mention in get_mentions(VALUE, &set) {
        assert_eq!(
            &plain[mention.plain_span.start..mention.plain_span.end],
            mention.display,
            "display text must sit at its reported plain-text offset"
        );
        assert_eq!(
            &VALUE[mention.markup_span.start..mention.markup_span.end],
            format!(
                "{}[{}]({})",
                if mention.child_index == 0 { "@" } else { "#" },
                mention.display,
                mention.id
            ),
        );
    }
}

#[test]
fn literal_runs_and_mentions_tile_both_spaces() {
    let set = user_and_tag_mentions();
    let mut markup_cursor = 0;
    let mut plain_cursor = 0;

    walk_and_check(VALUE, &set, &mut markup_cursor, &mut plain_cursor);
    assert_eq!(markup_cursor, VALUE.len());
    assert_eq!(plain_cursor, get_plain_text(VALUE, &set).len());
}

fn walk_and_check(
    value: &str,
    set: &MentionSet,
    markup_cursor: &mut usize,
    plain_cursor: &mut usize,
) {
    iterate_mentions_markup(value, set, |event| match event {
        ScanEvent::Literal(run) => {
            assert_eq!(run.markup_index, *markup_cursor);
            assert_eq!(run.plain_text_index, *plain_cursor);
            *markup_cursor += run.text.len();
            *plain_cursor += run.text.len();
        }
        ScanEvent::Mention(m) => {
            assert_eq!(m.markup_index, *markup_cursor);
            assert_eq!(m.plain_text_index, *plain_cursor);
            *markup_cursor += m.markup_text.len();
            *plain_cursor += m.display.len();
        }
    });
}

#[test]
fn extraction_is_pure() {
    let set = user_and_tag_mentions();
    assert_eq!(get_plain_text(VALUE, &set), get_plain_text(VALUE, &set));
}

#[test]
fn mentions_list_in_document_order_across_types() {
    let set = user_and_tag_mentions();
    let mentions = get_mentions(VALUE, &set);

    let ids: Vec<_> = mentions.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "t7", "u2"]);

    let child_indices: Vec<_> = mentions.iter().map(|m| m.child_index).collect();
    assert_eq!(child_indices, vec![0, 1, 0]);

    for pair in mentions.windows(2) {
        assert!(pair[0].markup_span.end <= pair[1].markup_span.start);
        assert!(pair[0].plain_span.end <= pair[1].plain_span.start);
    }
}

#[test]
fn plain_is_never_longer_than_markup_with_id_bearing_templates() {
    let set = user_and_tag_mentions();
    assert!(get_plain_text(VALUE, &set).len() <= VALUE.len());
}

#[test]
fn mapping_round_trips_outside_mentions() {
    let set = user_and_tag_mentions();
    let plain = get_plain_text(VALUE, &set);
    let inside_mention: Vec<(usize, usize)> = get_mentions(VALUE, &set)
        .iter()
        .map(|m| (m.plain_span.start, m.plain_span.end))
        .collect();

    for offset in 0..=plain.len() {
        if inside_mention
            .iter()
            .any(|&(start, end)| offset > start && offset < end)
        {
            continue;
        }
        let markup_offset = map_index(VALUE, &set, offset, Direction::PlainToMarkup);
        assert_eq!(
            map_index(VALUE, &set, markup_offset, Direction::MarkupToPlain),
            offset
        );
    }
}
