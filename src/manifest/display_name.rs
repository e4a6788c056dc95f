use crate::constant::{ARGS_MARKER, MAX_DISPLAY_NAME_WIDENING};
use std::collections::HashSet;

/// Shorten template ids for display in a picker.
///
/// Each id is cut down to the part starting at its last `Args` marker. While
/// two shortened names collide, every cut is widened one character to the
/// left. Ids without the marker (or starting with it) are kept whole.
pub fn display_names(ids: &[&str]) -> Vec<String> {
    let mut widen = 0;
    let mut names = shorten_all(ids, widen);

    while has_duplicates(&names) && widen < MAX_DISPLAY_NAME_WIDENING {
        widen += 1;
        names = shorten_all(ids, widen);
    }

    names
}

fn shorten_all(ids: &[&str], widen: usize) -> Vec<String> {
    ids.iter().map(|id| shorten(id, widen)).collect()
}

fn shorten(id: &str, widen: usize) -> String {
    match id.rfind(ARGS_MARKER) {
        Some(marker) if marker > 0 => {
            let prefix = &id[..marker];
            let skip = prefix.chars().count().saturating_sub(widen);
            let start = prefix
                .char_indices()
                .nth(skip)
                .map(|(i, _)| i)
                .unwrap_or(marker);
            id[start..].to_string()
        }
        _ => id.to_string(),
    }
}

fn has_duplicates(names: &[String]) -> bool {
    let mut seen = HashSet::new();
    names.iter().any(|n| !seen.insert(n.as_str()))
}
