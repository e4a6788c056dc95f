use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a line (or a piece of a line) relates to the other column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    Unchanged,
    Inserted,
    Deleted,
    Modified,
    /// Blank filler keeping both columns the same height
    Placeholder,
}

/// A highlighted run of text inside a modified line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub text: String,
    pub kind: ChangeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedLine {
    pub text: String,
    pub kind: ChangeKind,
    /// 1-based line number within its own column; `None` for placeholders
    pub position: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pieces: Vec<Piece>,
}

impl AnnotatedLine {
    pub(crate) fn new(text: &str, kind: ChangeKind, position: usize) -> Self {
        Self {
            text: text.to_string(),
            kind,
            position: Some(position),
            pieces: Vec::new(),
        }
    }

    pub(crate) fn placeholder() -> Self {
        Self {
            text: String::new(),
            kind: ChangeKind::Placeholder,
            position: None,
            pieces: Vec::new(),
        }
    }
}

/// Two aligned columns ready for side-by-side display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub header: String,
    pub left_label: String,
    pub right_label: String,
    pub left: Vec<AnnotatedLine>,
    pub right: Vec<AnnotatedLine>,
}

impl DiffResult {
    /// Iterate rows as (left, right) pairs
    pub fn rows(&self) -> impl Iterator<Item = (&AnnotatedLine, &AnnotatedLine)> {
        self.left.iter().zip(self.right.iter())
    }

    /// True when every row is unchanged on both sides
    pub fn is_identical(&self) -> bool {
        self.rows()
            .all(|(l, r)| l.kind == ChangeKind::Unchanged && r.kind == ChangeKind::Unchanged)
    }
}

/// Edit script algorithm used for line alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    Lcs,
    Patience,
}

impl From<DiffAlgorithm> for similar::Algorithm {
    fn from(value: DiffAlgorithm) -> Self {
        match value {
            DiffAlgorithm::Myers => similar::Algorithm::Myers,
            DiffAlgorithm::Lcs => similar::Algorithm::Lcs,
            DiffAlgorithm::Patience => similar::Algorithm::Patience,
        }
    }
}

/// Granularity of highlighting inside modified lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineMode {
    Off,
    #[default]
    Words,
    Chars,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    pub algorithm: DiffAlgorithm,
    pub inline: InlineMode,
    /// Upper bound on time spent aligning. Past it the edit script may be
    /// less than minimal but stays valid.
    pub deadline: Option<Duration>,
}
