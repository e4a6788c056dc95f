use super::display_name::display_names;
use super::{Event, Manifest, Template};
use crate::diff::{DiffOptions, DiffResult, diff_events, diff_templates};
use std::collections::BTreeMap;

/// A pair of picked indices into a list of versions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSelection {
    pub first: Option<usize>,
    pub second: Option<usize>,
}

impl DiffSelection {
    /// First and last entry preselected when there is anything to compare
    pub fn for_len(len: usize) -> Self {
        if len >= 2 {
            Self {
                first: Some(0),
                second: Some(len - 1),
            }
        } else {
            Self::default()
        }
    }

    /// Both sides picked, distinct, and in range of a list with several entries
    pub fn can_diff(&self, len: usize) -> bool {
        match (self.first, self.second) {
            (Some(a), Some(b)) => len > 1 && a != b && a < len && b < len,
            _ => false,
        }
    }

    fn pair(&self, len: usize) -> Option<(usize, usize)> {
        if !self.can_diff(len) {
            return None;
        }
        Some((self.first?, self.second?))
    }
}

/// All versions of one event number, lowest version first
#[derive(Debug, Clone)]
pub struct EventGroup<'a> {
    pub value: u32,
    pub name: &'a str,
    pub versions: Vec<&'a Event>,
}

impl<'a> EventGroup<'a> {
    pub fn has_multiple_versions(&self) -> bool {
        self.versions.len() > 1
    }

    /// Versions joined for display, e.g. `0, 1, 2`
    pub fn version_list(&self) -> String {
        self.versions
            .iter()
            .map(|v| v.version.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn default_selection(&self) -> DiffSelection {
        DiffSelection::for_len(self.versions.len())
    }

    pub fn diff(
        &self,
        selection: DiffSelection,
        manifest: &Manifest,
        options: &DiffOptions,
    ) -> Option<DiffResult> {
        let (a, b) = selection.pair(self.versions.len())?;
        Some(diff_events(self.versions[a], self.versions[b], manifest, options))
    }
}

#[derive(Debug, Clone)]
pub struct TemplateDisplayItem<'a> {
    pub template: &'a Template,
    pub display_name: String,
}

/// Templates used by the events of one task
#[derive(Debug, Clone)]
pub struct TaskGroup<'a> {
    pub task: &'a str,
    pub templates: Vec<TemplateDisplayItem<'a>>,
}

impl<'a> TaskGroup<'a> {
    fn new(task: &'a str, templates: Vec<&'a Template>) -> Self {
        let ids: Vec<&str> = templates.iter().map(|t| t.id.as_str()).collect();
        let names = display_names(&ids);
        let templates = templates
            .into_iter()
            .zip(names)
            .map(|(template, display_name)| TemplateDisplayItem {
                template,
                display_name,
            })
            .collect();
        Self { task, templates }
    }

    pub fn has_multiple_templates(&self) -> bool {
        self.templates.len() > 1
    }

    pub fn template_count(&self) -> String {
        if self.has_multiple_templates() {
            format!("{} templates", self.templates.len())
        } else {
            "1 template".to_string()
        }
    }

    pub fn default_selection(&self) -> DiffSelection {
        DiffSelection::for_len(self.templates.len())
    }

    pub fn diff(&self, selection: DiffSelection, options: &DiffOptions) -> Option<DiffResult> {
        let (a, b) = selection.pair(self.templates.len())?;
        Some(diff_templates(
            self.task,
            self.templates[a].template,
            self.templates[b].template,
            options,
        ))
    }
}

impl Manifest {
    /// Events grouped by event number, ordered by number then version
    pub fn event_groups(&self) -> Vec<EventGroup<'_>> {
        let mut events: Vec<&Event> = self.events.iter().collect();
        events.sort_by_key(|e| (e.value, e.version));

        let mut groups: Vec<EventGroup<'_>> = Vec::new();
        for event in events {
            match groups.last_mut() {
                Some(group) if group.value == event.value => group.versions.push(event),
                _ => groups.push(EventGroup {
                    value: event.value,
                    name: &event.symbol,
                    versions: vec![event],
                }),
            }
        }
        groups
    }

    /// Templates grouped by the task of the events that use them
    pub fn task_groups(&self) -> Vec<TaskGroup<'_>> {
        let mut by_task: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for event in &self.events {
            let Some(task) = event.task() else { continue };
            let ids = by_task.entry(task).or_default();
            if let Some(id) = event.template_id()
                && !ids.contains(&id)
            {
                ids.push(id);
            }
        }

        by_task
            .into_iter()
            .filter_map(|(task, ids)| {
                let templates: Vec<&Template> =
                    ids.into_iter().filter_map(|id| self.template(id)).collect();
                (!templates.is_empty()).then(|| TaskGroup::new(task, templates))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::TemplateData;

    fn sample() -> Manifest {
        Manifest::new(
            vec![
                Event::new(2, 1, "Load_V1").with_task("Loader").with_template("LoadArgs_V1"),
                Event::new(1, 0, "Start").with_task("Process"),
                Event::new(2, 0, "Load").with_task("Loader").with_template("LoadArgs"),
                Event::new(2, 2, "Load_V2").with_task("Loader").with_template("LoadArgs_V1"),
                Event::new(3, 0, "Orphan").with_task("Ghost").with_template("Nowhere"),
            ],
            vec![
                Template::new("LoadArgs", vec![TemplateData::new("Path", "win:UnicodeString")]),
                Template::new(
                    "LoadArgs_V1",
                    vec![
                        TemplateData::new("Path", "win:UnicodeString"),
                        TemplateData::new("Flags", "win:UInt32"),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn events_grouped_by_value_then_version() {
        let manifest = sample();
        let groups = manifest.event_groups();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].value, 1);
        assert!(!groups[0].has_multiple_versions());
        assert_eq!(groups[1].name, "Load");
        assert_eq!(groups[1].version_list(), "0, 1, 2");
        assert_eq!(
            groups[1].default_selection(),
            DiffSelection {
                first: Some(0),
                second: Some(2)
            }
        );
    }

    #[test]
    fn selection_rules() {
        assert_eq!(DiffSelection::for_len(1), DiffSelection::default());
        let same = DiffSelection {
            first: Some(1),
            second: Some(1),
        };
        assert!(!same.can_diff(3));
        let out_of_range = DiffSelection {
            first: Some(0),
            second: Some(5),
        };
        assert!(!out_of_range.can_diff(3));
        assert!(DiffSelection::for_len(2).can_diff(2));
    }

    #[test]
    fn group_diff_uses_selected_versions() {
        let manifest = sample();
        let groups = manifest.event_groups();
        let result = groups[1]
            .diff(groups[1].default_selection(), &manifest, &DiffOptions::default())
            .unwrap();
        assert_eq!(result.left_label, "Version 0");
        assert_eq!(result.right_label, "Version 2");
        assert!(groups[0]
            .diff(groups[0].default_selection(), &manifest, &DiffOptions::default())
            .is_none());
    }

    #[test]
    fn tasks_collect_distinct_resolved_templates() {
        let manifest = sample();
        let groups = manifest.task_groups();
        // "Process" has no templates and "Ghost" references an unknown one
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].task, "Loader");
        let ids: Vec<&str> = groups[0].templates.iter().map(|t| t.template.id.as_str()).collect();
        assert_eq!(ids, vec!["LoadArgs_V1", "LoadArgs"]);
        assert_eq!(groups[0].template_count(), "2 templates");

        let result = groups[0]
            .diff(groups[0].default_selection(), &DiffOptions::default())
            .unwrap();
        assert_eq!(result.header, "Diff: Loader");
        assert_eq!(result.left_label, "LoadArgs_V1");
        assert_eq!(result.right_label, "LoadArgs");
    }
}
