//! ETW manifest diff library
//!
//! Renders manifest events and templates into canonical XML-shaped text and
//! aligns two versions into parallel, equal-length columns for side-by-side
//! display.

pub mod canonical;
pub mod config;
pub mod constant;
pub mod diff;
pub mod manifest;
pub mod style;

pub use diff::{
    AnnotatedLine, ChangeKind, DiffAlgorithm, DiffOptions, DiffResult, DiffStats, InlineMode, Piece,
    diff_events, diff_templates, diff_text,
};
pub use manifest::{Event, Manifest, Template, TemplateData};
