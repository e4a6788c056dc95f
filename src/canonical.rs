//! Canonical text rendering
//!
//! Turns one event or template into a fixed, XML-shaped block of lines so two
//! versions can be compared line by line. Attribute and field order is fixed;
//! nothing is sorted.

use crate::constant::INDENT;
use crate::manifest::{Event, Manifest, Template, TemplateData};

/// Render an event, inlining the fields of the template it references.
///
/// The template block is left out when the id does not resolve or the
/// template has no fields.
pub fn render_event(event: &Event, manifest: &Manifest) -> String {
    let mut out = String::new();

    line(&mut out, &format!("<!-- Event: {} -->", event.symbol));
    line(&mut out, "<event");
    attribute(&mut out, "value", &event.value);
    attribute(&mut out, "version", &event.version);
    attribute(&mut out, "symbol", &event.symbol);

    let optional = [
        ("level", event.level()),
        ("task", event.task()),
        ("opcode", event.opcode()),
        ("keyword", event.keyword()),
        ("template", event.template_id()),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            attribute(&mut out, name, &value);
        }
    }
    line(&mut out, "/>");

    if let Some(template) = manifest.template_for(event)
        && !template.fields.is_empty()
    {
        out.push('\n');
        template_block(&mut out, template);
    }

    out
}

/// Render a template on its own
pub fn render_template(template: &Template) -> String {
    let mut out = String::new();
    template_block(&mut out, template);
    out
}

fn template_block(out: &mut String, template: &Template) {
    line(out, &format!("<!-- Template: {} -->", template.id));
    line(out, &format!("<template tid=\"{}\">", template.id));
    for field in &template.fields {
        data(out, field);
    }
    line(out, "</template>");
}

fn data(out: &mut String, field: &TemplateData) {
    line(
        out,
        &format!(
            "{INDENT}<data name=\"{}\" inType=\"{}\" />",
            field.name, field.in_type
        ),
    );
}

fn attribute(out: &mut String, name: &str, value: &dyn std::fmt::Display) {
    line(out, &format!("{INDENT}{name}=\"{value}\""));
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}
