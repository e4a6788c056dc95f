use super::types::{ChangeKind, DiffResult};
use serde::Serialize;
use similar::{ChangeTag, TextDiff};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub unchanged: usize,
    pub modified: usize,
    pub deleted: usize,
    pub inserted: usize,
    pub placeholders: usize,
    /// Characters added across changed rows
    pub added_chars: usize,
    /// Characters removed across changed rows
    pub removed_chars: usize,
}

impl DiffStats {
    pub fn has_changes(&self) -> bool {
        self.modified + self.deleted + self.inserted > 0
    }
}

/// Count rows per change kind, plus character-level totals over changed rows
pub fn calculate_stats(result: &DiffResult) -> DiffStats {
    let mut stats = DiffStats::default();
    let mut removed_text = String::new();
    let mut added_text = String::new();

    for (left, right) in result.rows() {
        if left.kind == ChangeKind::Unchanged {
            stats.unchanged += 1;
            continue;
        }
        if left.kind == ChangeKind::Modified {
            stats.modified += 1;
        }
        for line in [left, right] {
            match line.kind {
                ChangeKind::Deleted => stats.deleted += 1,
                ChangeKind::Inserted => stats.inserted += 1,
                ChangeKind::Placeholder => stats.placeholders += 1,
                _ => {}
            }
        }
        if left.position.is_some() {
            removed_text.push_str(&left.text);
            removed_text.push('\n');
        }
        if right.position.is_some() {
            added_text.push_str(&right.text);
            added_text.push('\n');
        }
    }

    let diff = TextDiff::from_chars(&removed_text, &added_text);
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => stats.added_chars += change.value().chars().count(),
            ChangeTag::Delete => stats.removed_chars += change.value().chars().count(),
            ChangeTag::Equal => {}
        }
    }

    stats
}
