//! `{{VAR}}` substitution renderer.

use tracing::{instrument, warn};

use reactor_core::{
    application::ports::TemplateRenderer, domain::RenderContext, error::ReactorResult,
};

/// Renderer that delegates to [`RenderContext::render`].
///
/// Unknown placeholders are left in the output untouched. Any that look like
/// one of ours (`{{UPPER_SNAKE}}`) are logged, since they usually point at a
/// typo in an override template.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    #[instrument(skip_all, fields(bytes = body.len(), variables = context.len()))]
    fn render(&self, body: &str, context: &RenderContext) -> ReactorResult<String> {
        let rendered = context.render(body);

        for name in unresolved_placeholders(&rendered) {
            warn!(placeholder = name, "template placeholder left unresolved");
        }

        Ok(rendered)
    }
}

/// Names of `{{UPPER_SNAKE}}` placeholders still present in `text`.
pub fn unresolved_placeholders(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };

        let name = after[..end].trim();
        if is_placeholder_name(name) {
            if !found.contains(&name) {
                found.push(name);
            }
            rest = &after[end + 2..];
        } else {
            rest = &rest[start + 1..];
        }
    }

    found
}

fn is_placeholder_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase())
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_known_variables() {
        let ctx = RenderContext::new().with_variable("CLASS_NAME", "TestStore");
        let out = PlaceholderRenderer::new()
            .render("let {{CLASS_NAME}} = {};", &ctx)
            .unwrap();
        assert_eq!(out, "let TestStore = {};");
    }

    #[test]
    fn unknown_variables_survive() {
        let ctx = RenderContext::new();
        let out = PlaceholderRenderer::new()
            .render("{{ CLASS_NAME }} {{lower}}", &ctx)
            .unwrap();
        assert_eq!(out, "{{ CLASS_NAME }} {{lower}}");
    }

    #[test]
    fn finds_only_upper_snake_leftovers() {
        let text = "{{A_1}} {{lower}} {{ B }} {{A_1}} {{}} {{9X}} {{C";
        assert_eq!(unresolved_placeholders(text), vec!["A_1", "B"]);
    }

    #[test]
    fn jsx_object_literals_are_not_placeholders() {
        assert!(unresolved_placeholders("<div style={{color: 'red'}} />").is_empty());
    }
}
