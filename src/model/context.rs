//! Persona + task context used to score relevance.

use serde_json::Value;

use super::Manifest;

/// The combined persona and task description for one batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    /// Flattened persona description
    pub persona: String,

    /// Flattened job-to-be-done description
    pub task: String,
}

impl Context {
    /// Build a context from a manifest, flattening nested persona/job values.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            persona: flatten_text(&manifest.persona),
            task: flatten_text(&manifest.job_to_be_done),
        }
    }

    /// The context string handed to the embedding collaborator.
    pub fn text(&self) -> String {
        format!("{} {}", self.persona, self.task)
    }
}

/// Flatten an arbitrarily nested JSON value into a space-joined string.
///
/// Objects join their stringified values, arrays join their stringified
/// elements, scalars stringify. Manifests in the wild carry persona and job
/// descriptions as plain strings, objects, or lists interchangeably.
pub fn flatten_text(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .values()
            .map(flatten_text)
            .collect::<Vec<_>>()
            .join(" "),
        Value::Array(items) => items
            .iter()
            .map(flatten_text)
            .collect::<Vec<_>>()
            .join(" "),
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_scalar() {
        assert_eq!(flatten_text(&json!("Travel Planner")), "Travel Planner");
        assert_eq!(flatten_text(&json!(42)), "42");
        assert_eq!(flatten_text(&json!(null)), "");
    }

    #[test]
    fn test_flatten_object_joins_values() {
        let value = json!({"role": "HR professional", "seniority": "senior"});
        assert_eq!(flatten_text(&value), "HR professional senior");
    }

    #[test]
    fn test_flatten_list_joins_elements() {
        let value = json!(["plan a trip", "for 10 people"]);
        assert_eq!(flatten_text(&value), "plan a trip for 10 people");
    }

    #[test]
    fn test_flatten_nested() {
        let value = json!({"task": ["create forms", {"for": "onboarding"}]});
        assert_eq!(flatten_text(&value), "create forms onboarding");
    }

    #[test]
    fn test_context_text() {
        let context = Context {
            persona: "researcher".to_string(),
            task: "find methods".to_string(),
        };
        assert_eq!(context.text(), "researcher find methods");
    }
}
