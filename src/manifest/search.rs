use super::{Event, TaskGroup};

/// Events whose symbol, task or opcode contains `query`, ignoring case.
/// A blank query matches everything.
pub fn filter_events<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    match normalize(query) {
        None => events.iter().collect(),
        Some(needle) => events
            .iter()
            .filter(|e| {
                contains(&e.symbol, &needle)
                    || e.task().is_some_and(|t| contains(t, &needle))
                    || e.opcode().is_some_and(|o| contains(o, &needle))
            })
            .collect(),
    }
}

/// Task groups whose task name contains `query`, ignoring case
pub fn filter_task_groups<'g, 'a>(
    groups: &'g [TaskGroup<'a>],
    query: &str,
) -> Vec<&'g TaskGroup<'a>> {
    match normalize(query) {
        None => groups.iter().collect(),
        Some(needle) => groups.iter().filter(|g| contains(g.task, &needle)).collect(),
    }
}

fn normalize(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
