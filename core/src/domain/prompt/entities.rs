use std::sync::LazyLock;

use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
});

/// A named, versioned prompt with `{{placeholder}}` slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub version: &'static str,
    pub template: &'static str,
}

impl PromptTemplate {
    pub const fn new(name: &'static str, version: &'static str, template: &'static str) -> Self {
        Self {
            name,
            version,
            template,
        }
    }

    /// Names of the placeholders in order of first appearance.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for captures in PLACEHOLDER.captures_iter(self.template) {
            if let Some(name) = captures.get(1).map(|m| m.as_str())
                && !names.contains(&name)
            {
                names.push(name);
            }
        }
        names
    }

    /// Substitute every placeholder. A placeholder without a value is an error.
    pub fn render(&self, vars: &[(&str, &str)]) -> Result<String, CoreError> {
        let mut missing: Option<String> = None;

        let rendered = PLACEHOLDER.replace_all(self.template, |captures: &regex::Captures| {
            let key = &captures[1];
            match vars.iter().find(|(name, _)| *name == key) {
                Some((_, value)) => value.to_string(),
                None => {
                    missing.get_or_insert_with(|| key.to_string());
                    String::new()
                }
            }
        });

        if let Some(key) = missing {
            tracing::error!(prompt = self.name, "Unresolved prompt placeholder: {}", key);
            return Err(CoreError::Invalid(format!(
                "prompt {} is missing a value for {}",
                self.name, key
            )));
        }

        Ok(rendered.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: PromptTemplate =
        PromptTemplate::new("greeting", "1", "Hello {{name}}, you ate {{ food }}. Bye {{name}}.");

    #[test]
    fn test_placeholders_are_deduplicated() {
        assert_eq!(GREETING.placeholders(), vec!["name", "food"]);
    }

    #[test]
    fn test_render_substitutes_every_occurrence() {
        let rendered = GREETING
            .render(&[("name", "Alex"), ("food", "a salad")])
            .unwrap();
        assert_eq!(rendered, "Hello Alex, you ate a salad. Bye Alex.");
    }

    #[test]
    fn test_render_fails_on_missing_value() {
        let err = GREETING.render(&[("name", "Alex")]).unwrap_err();
        assert!(matches!(err, CoreError::Invalid(msg) if msg.contains("food")));
    }

    #[test]
    fn test_values_are_not_reinterpreted() {
        let rendered = GREETING
            .render(&[("name", "{{food}}"), ("food", "soup")])
            .unwrap();
        assert_eq!(rendered, "Hello {{food}}, you ate soup. Bye {{food}}.");
    }
}
