//! Reserved placeholder tokens in mention markup templates.

/// Placeholder substituted by the mention id.
pub const ID: &str = "__id__";
/// Placeholder substituted by the mention display text.
pub const DISPLAY: &str = "__display__";

/// Which captured parameter is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Id,
    Display,
}

/// Counts how many of the reserved placeholders appear in `template`.
pub fn count_placeholders(template: &str) -> usize {
    usize::from(template.contains(ID)) + usize::from(template.contains(DISPLAY))
}

/// Resolves which capturing group, relative to the template's own groups,
/// carries the requested parameter.
///
/// With both placeholders present the earlier one owns group 0; on a tie
/// the requested parameter wins. A template with a single placeholder maps
/// both parameters to group 0, so the same captured text serves as id and
/// display. A template with neither placeholder is a configuration error
/// (diagnosed when the config is built) and resolves to group 0.
pub fn capture_group_position(template: &str, param: Param) -> usize {
    match (template.find(ID), template.find(DISPLAY)) {
        (Some(id_index), Some(display_index)) => {
            let requested_is_first = match param {
                Param::Id => id_index <= display_index,
                Param::Display => display_index <= id_index,
            };
            if requested_is_first { 0 } else { 1 }
        }
        _ => 0,
    }
}
