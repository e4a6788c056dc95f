//! Prints side-by-side diffs for every event and task with several versions
//!
//! Run with: cargo run --example diff_demo

use etw_manifest_diff::config::Config;
use etw_manifest_diff::diff::calculate_stats;
use etw_manifest_diff::{ChangeKind, DiffResult, Manifest};

const MANIFEST: &str = r#"{
    "events": [
        {"value": 1, "version": 0, "symbol": "ProcessStart", "task": "Process",
         "opcode": "win:Start", "template": "ProcessStartArgs"},
        {"value": 1, "version": 1, "symbol": "ProcessStart_V1", "task": "Process",
         "opcode": "win:Start", "keyword": "Process", "template": "ProcessStartArgs_V1"},
        {"value": 2, "version": 0, "symbol": "ProcessStop", "task": "Process", "opcode": "win:Stop"}
    ],
    "templates": [
        {"id": "ProcessStartArgs", "fields": [
            {"name": "ProcessID", "inType": "win:UInt32"},
            {"name": "ImageName", "inType": "win:UnicodeString"}
        ]},
        {"id": "ProcessStartArgs_V1", "fields": [
            {"name": "ProcessID", "inType": "win:UInt32"},
            {"name": "ParentProcessID", "inType": "win:UInt32"},
            {"name": "ImageName", "inType": "win:UnicodeString"}
        ]}
    ]
}"#;

fn marker(kind: ChangeKind) -> char {
    match kind {
        ChangeKind::Unchanged => ' ',
        ChangeKind::Inserted => '+',
        ChangeKind::Deleted => '-',
        ChangeKind::Modified => '~',
        ChangeKind::Placeholder => ' ',
    }
}

fn print_diff(result: &DiffResult) {
    println!("=== {} ===", result.header);
    println!("{:<50} | {}", result.left_label, result.right_label);
    for (left, right) in result.rows() {
        println!(
            "{}{:<49} |{}{}",
            marker(left.kind),
            left.text,
            marker(right.kind),
            right.text
        );
    }
    let stats = calculate_stats(result);
    println!(
        "{} modified, {} deleted, {} inserted\n",
        stats.modified, stats.deleted, stats.inserted
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = Config::default();
    let options = config.settings.diff_options();
    let manifest: Manifest = serde_json::from_str(MANIFEST)?;

    for group in manifest.event_groups() {
        if let Some(result) = group.diff(group.default_selection(), &manifest, &options) {
            print_diff(&result);
        }
    }

    for group in manifest.task_groups() {
        let names: Vec<&str> = group.templates.iter().map(|t| t.display_name.as_str()).collect();
        println!("Task {} ({}): {}", group.task, group.template_count(), names.join(", "));
        if let Some(result) = group.diff(group.default_selection(), &options) {
            print_diff(&result);
        }
    }

    Ok(())
}
