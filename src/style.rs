use crate::diff::ChangeKind;
use serde::{Deserialize, Serialize};

// Row background colours as #AARRGGBB
pub const DELETED_LINE_BG: &str = "#FFFFE0E0";
pub const INSERTED_LINE_BG: &str = "#FFE0FFE0";
pub const MODIFIED_LINE_BG: &str = "#FFFFFFE0";
pub const PLACEHOLDER_LINE_BG: &str = "#FFF0F0F0";

/// Background colour per change kind. Unchanged rows are never highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_deleted")]
    pub deleted: String,
    #[serde(default = "default_inserted")]
    pub inserted: String,
    #[serde(default = "default_modified")]
    pub modified: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Palette {
    pub fn background(&self, kind: ChangeKind) -> Option<&str> {
        match kind {
            ChangeKind::Deleted => Some(&self.deleted),
            ChangeKind::Inserted => Some(&self.inserted),
            ChangeKind::Modified => Some(&self.modified),
            ChangeKind::Placeholder => Some(&self.placeholder),
            ChangeKind::Unchanged => None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            deleted: default_deleted(),
            inserted: default_inserted(),
            modified: default_modified(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_deleted() -> String {
    DELETED_LINE_BG.to_string()
}

fn default_inserted() -> String {
    INSERTED_LINE_BG.to_string()
}

fn default_modified() -> String {
    MODIFIED_LINE_BG.to_string()
}

fn default_placeholder() -> String {
    PLACEHOLDER_LINE_BG.to_string()
}
