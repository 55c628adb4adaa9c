//! Deriving capture patterns from markup templates, and the inverse:
//! rendering a template into concrete mention markup.

use regex::Regex;

use super::placeholders;

/// Derives the capture pattern for a markup template.
///
/// The template is escaped verbatim and each placeholder becomes a lazy
/// capturing group that refuses the character following it in the template,
/// so `@[__display__](__id__)` yields `@\[([^\]]+?)\]\(([^\)]+?)\)`. A
/// trailing placeholder, with no delimiter after it, captures greedily up
/// to whatever the surrounding alternation allows via `(.+?)`.
pub fn markup_to_regex(template: &str) -> Regex {
    let mut pattern = regex::escape(template);
    for placeholder in [placeholders::DISPLAY, placeholders::ID] {
        if let Some(group) = placeholder_group(template, placeholder) {
            // The escape of a placeholder is the placeholder itself
            // (underscores and letters only), so it is searchable in the
            // escaped template.
            pattern = pattern.replacen(placeholder, &group, 1);
        }
    }
    Regex::new(&pattern).expect("escaped template always derives a valid pattern")
}

/// Builds the capturing group replacing `placeholder`, or `None` when the
/// template does not contain it.
fn placeholder_group(template: &str, placeholder: &str) -> Option<String> {
    let index = template.find(placeholder)?;
    let group = match template[index + placeholder.len()..].chars().next() {
        Some(next) => format!("([^{}]+?)", regex::escape(&next.to_string())),
        None => "(.+?)".to_string(),
    };
    Some(group)
}

/// Renders the markup for a single mention by substituting `id` and
/// `display` into the template. Only the first occurrence of each
/// placeholder is replaced, matching the lookup side.
pub fn make_mention_markup(template: &str, id: &str, display: &str) -> String {
    template
        .replacen(placeholders::ID, id, 1)
        .replacen(placeholders::DISPLAY, display, 1)
}
