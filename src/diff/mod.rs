//! Side-by-side diffing of manifest records
//!
//! Both sides are rendered to canonical text first, then aligned line by
//! line. Rows of the two columns always correspond one to one.

mod align;
mod stats;
mod types;

use crate::canonical::{render_event, render_template};
use crate::manifest::{Event, Manifest, Template};
use tracing::debug;

pub use align::{align, split_lines};
pub use stats::{DiffStats, calculate_stats};
pub use types::{
    AnnotatedLine, ChangeKind, DiffAlgorithm, DiffOptions, DiffResult, InlineMode, Piece,
};

/// Diff two arbitrary texts. Header and labels are left empty.
pub fn diff_text(left: &str, right: &str, options: &DiffOptions) -> DiffResult {
    let (left, right) = align(left, right, options);
    debug_assert_eq!(left.len(), right.len());
    DiffResult {
        header: String::new(),
        left_label: String::new(),
        right_label: String::new(),
        left,
        right,
    }
}

/// Compare two versions of an event, each with its template fields inlined
pub fn diff_events(
    left: &Event,
    right: &Event,
    manifest: &Manifest,
    options: &DiffOptions,
) -> DiffResult {
    let left_text = render_event(left, manifest);
    let right_text = render_event(right, manifest);

    let mut result = diff_text(&left_text, &right_text, options);
    result.header = format!("Diff: {}", left.symbol);
    result.left_label = format!("Version {}", left.version);
    result.right_label = format!("Version {}", right.version);

    debug!(
        "Diffed event {} v{} against v{}: {} rows",
        left.value,
        left.version,
        right.version,
        result.left.len()
    );
    result
}

/// Compare two templates used by the same task
pub fn diff_templates(
    task: &str,
    left: &Template,
    right: &Template,
    options: &DiffOptions,
) -> DiffResult {
    let left_text = render_template(left);
    let right_text = render_template(right);

    let mut result = diff_text(&left_text, &right_text, options);
    result.header = format!("Diff: {}", task);
    result.left_label = left.id.clone();
    result.right_label = right.id.clone();

    debug!(
        "Diffed templates {} and {} for task {}: {} rows",
        left.id,
        right.id,
        task,
        result.left.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::TemplateData;

    fn manifest() -> Manifest {
        Manifest::new(
            vec![],
            vec![Template::new(
                "FooArgs",
                vec![TemplateData::new("A", "int32"), TemplateData::new("B", "string")],
            )],
        )
    }

    fn changed(col: &[AnnotatedLine]) -> Vec<&AnnotatedLine> {
        col.iter().filter(|l| l.kind != ChangeKind::Unchanged).collect()
    }

    #[test]
    fn self_diff_is_all_unchanged() {
        let m = manifest();
        let event = Event::new(5, 1, "Foo").with_task("T").with_template("FooArgs");
        let result = diff_events(&event, &event, &m, &DiffOptions::default());
        assert!(result.is_identical());
        assert!(result.rows().all(|(l, r)| l.position.is_some() && r.position.is_some()));
        // Trailing newline of the canonical text shows up as a final empty row
        let last = result.left.last().unwrap();
        assert_eq!(last.text, "");
        assert_eq!(last.kind, ChangeKind::Unchanged);
    }

    #[test]
    fn renamed_symbol_changes_only_symbol_lines() {
        let m = manifest();
        let v1 = Event::new(5, 1, "Foo").with_template("FooArgs");
        let v2 = Event::new(5, 1, "FooBar").with_template("FooArgs");
        let result = diff_events(&v1, &v2, &m, &DiffOptions::default());

        assert_eq!(result.left.len(), result.right.len());
        let left = changed(&result.left);
        let right = changed(&result.right);
        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 2);
        assert!(left.iter().all(|l| l.kind == ChangeKind::Modified && l.text.contains("Foo")));
        assert!(right.iter().all(|l| l.kind == ChangeKind::Modified && l.text.contains("FooBar")));
        assert_eq!(result.header, "Diff: Foo");
    }

    #[test]
    fn added_field_is_inserted_against_placeholder() {
        let v1 = Template::new("Args", vec![TemplateData::new("A", "int32")]);
        let v2 = Template::new(
            "Args",
            vec![TemplateData::new("A", "int32"), TemplateData::new("B", "string")],
        );
        let result = diff_templates("Task", &v1, &v2, &DiffOptions::default());

        let rows: Vec<_> = result
            .rows()
            .filter(|(l, r)| l.kind != ChangeKind::Unchanged || r.kind != ChangeKind::Unchanged)
            .collect();
        assert_eq!(rows.len(), 1);
        let (left, right) = rows[0];
        assert_eq!(left.kind, ChangeKind::Placeholder);
        assert_eq!(left.position, None);
        assert_eq!(right.kind, ChangeKind::Inserted);
        assert!(right.text.contains("<data name=\"B\""));
        assert_eq!((result.left_label.as_str(), result.right_label.as_str()), ("Args", "Args"));
    }

    #[test]
    fn empty_templates_differing_in_id() {
        let v1 = Template::new("OldArgs", vec![]);
        let v2 = Template::new("NewArgs", vec![]);
        let result = diff_templates("Task", &v1, &v2, &DiffOptions::default());

        assert_eq!(result.left.len(), result.right.len());
        assert!(result
            .rows()
            .all(|(l, r)| l.kind != ChangeKind::Placeholder && r.kind != ChangeKind::Placeholder));
        let left = changed(&result.left);
        assert!(!left.is_empty());
        assert!(left.iter().all(|l| l.text.contains("OldArgs")));
        assert!(changed(&result.right).iter().all(|l| l.text.contains("NewArgs")));
    }

    #[test]
    fn unresolved_template_drops_block_from_diff() {
        let m = manifest();
        let v1 = Event::new(7, 0, "Bar").with_template("FooArgs");
        let v2 = Event::new(7, 1, "Bar").with_template("Gone");
        let result = diff_events(&v1, &v2, &m, &DiffOptions::default());
        assert!(result.right.iter().all(|l| !l.text.contains("<template")));
        assert!(result
            .rows()
            .any(|(l, r)| l.kind == ChangeKind::Deleted && r.kind == ChangeKind::Placeholder));
        assert_eq!(result.left_label, "Version 0");
        assert_eq!(result.right_label, "Version 1");
    }

    #[test]
    fn result_serializes_for_rendering() {
        let result = diff_text("a\n", "b\n", &DiffOptions::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["left"][0]["kind"], "Modified");
        assert_eq!(json["right"][1]["position"], 2);
    }
}
