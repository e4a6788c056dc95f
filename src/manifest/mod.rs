//! In-memory manifest model
//!
//! These records are handed over by whatever parsed the manifest. Nothing in
//! this crate mutates them; diffing and grouping only read.

mod display_name;
mod groups;
mod search;

use serde::{Deserialize, Serialize};

pub use display_name::display_names;
pub use groups::{DiffSelection, EventGroup, TaskGroup, TemplateDisplayItem};
pub use search::{filter_events, filter_task_groups};

/// One version of a manifest event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub value: u32,
    pub version: u32,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl Event {
    pub fn new(value: u32, version: u32, symbol: impl Into<String>) -> Self {
        Self {
            value,
            version,
            symbol: symbol.into(),
            level: None,
            task: None,
            opcode: None,
            keyword: None,
            template: None,
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    pub fn with_opcode(mut self, opcode: impl Into<String>) -> Self {
        self.opcode = Some(opcode.into());
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn level(&self) -> Option<&str> {
        non_empty(&self.level)
    }

    pub fn task(&self) -> Option<&str> {
        non_empty(&self.task)
    }

    pub fn opcode(&self) -> Option<&str> {
        non_empty(&self.opcode)
    }

    pub fn keyword(&self) -> Option<&str> {
        non_empty(&self.keyword)
    }

    /// Template id this event references, if any
    pub fn template_id(&self) -> Option<&str> {
        non_empty(&self.template)
    }
}

/// A single typed field of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateData {
    pub name: String,
    #[serde(rename = "inType")]
    pub in_type: String,
}

impl TemplateData {
    pub fn new(name: impl Into<String>, in_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            in_type: in_type.into(),
        }
    }
}

/// Payload layout shared by one or more events. Field order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    #[serde(default)]
    pub fields: Vec<TemplateData>,
}

impl Template {
    pub fn new(id: impl Into<String>, fields: Vec<TemplateData>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub templates: Vec<Template>,
}

impl Manifest {
    pub fn new(events: Vec<Event>, templates: Vec<Template>) -> Self {
        Self { events, templates }
    }

    /// Look up a template by id. The first match wins when ids repeat.
    pub fn template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Resolve the template an event references
    pub fn template_for(&self, event: &Event) -> Option<&Template> {
        event.template_id().and_then(|id| self.template(id))
    }

    /// Fields of the template an event references; empty when it has none or
    /// the id does not resolve.
    pub fn template_data(&self, event: &Event) -> &[TemplateData] {
        self.template_for(event)
            .map(|t| t.fields.as_slice())
            .unwrap_or(&[])
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_attributes_read_as_absent() {
        let event = Event::new(1, 0, "Start").with_task("").with_opcode("win:Start");
        assert_eq!(event.task(), None);
        assert_eq!(event.opcode(), Some("win:Start"));
        assert_eq!(event.level(), None);
    }

    #[test]
    fn template_lookup_first_match_wins() {
        let manifest = Manifest::new(
            vec![],
            vec![
                Template::new("T", vec![TemplateData::new("A", "win:Int32")]),
                Template::new("T", vec![]),
            ],
        );
        assert_eq!(manifest.template("T").map(|t| t.fields.len()), Some(1));
        assert!(manifest.template("Missing").is_none());
    }

    #[test]
    fn unresolved_template_has_no_data() {
        let manifest = Manifest::default();
        let event = Event::new(3, 1, "Stop").with_template("StopArgs");
        assert!(manifest.template_data(&event).is_empty());
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{
            "events": [{"value": 5, "version": 1, "symbol": "Foo", "template": "FooArgs"}],
            "templates": [{"id": "FooArgs", "fields": [{"name": "A", "inType": "win:Int32"}]}]
        }"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.events[0].template_id(), Some("FooArgs"));
        assert_eq!(manifest.template_data(&manifest.events[0])[0].in_type, "win:Int32");
    }
}
