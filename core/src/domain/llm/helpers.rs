use serde::de::DeserializeOwned;

use crate::domain::common::entities::app_errors::CoreError;

/// Decode the raw text of a structured LLM answer into `T`.
///
/// Missing text, blank text, text that is not JSON and a literal JSON `null`
/// count as "no result" and yield `Ok(None)`. JSON that parses must match the
/// shape of `T`.
pub fn decode_structured_output<T>(raw: Option<String>) -> Result<Option<T>, CoreError>
where
    T: DeserializeOwned,
{
    let Some(raw) = raw else {
        return Ok(None);
    };

    let trimmed = strip_code_fence(raw.trim());
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("LLM response is not JSON, treating as no result: {}", e);
            return Ok(None);
        }
    };

    if value.is_null() {
        return Ok(None);
    }

    serde_json::from_value(value).map(Some).map_err(|e| {
        tracing::error!("Invalid LLM response format: {}", e);
        CoreError::SchemaValidation(format!("Invalid response format: {}", e))
    })
}

/// Models sometimes wrap JSON in a markdown fence such as ```json ... ```.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return text;
    };

    // drop the info string (e.g. `json`) on the opening line
    match body.split_once('\n') {
        Some((info, content)) if !info.trim().contains(['{', '[']) => content.trim(),
        _ => body.trim(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        value: f64,
    }

    #[test]
    fn test_missing_or_blank_text_is_no_result() {
        assert_eq!(decode_structured_output::<Sample>(None), Ok(None));
        assert_eq!(
            decode_structured_output::<Sample>(Some("  \n".to_string())),
            Ok(None)
        );
        assert_eq!(
            decode_structured_output::<Sample>(Some("null".to_string())),
            Ok(None)
        );
    }

    #[test]
    fn test_decodes_matching_shape() {
        let decoded = decode_structured_output::<Sample>(Some(r#"{"value": 4.5}"#.to_string()));
        assert_eq!(decoded, Ok(Some(Sample { value: 4.5 })));
    }

    #[test]
    fn test_string_where_number_expected_is_schema_error() {
        let decoded = decode_structured_output::<Sample>(Some(r#"{"value": "4.5"}"#.to_string()));
        assert!(matches!(decoded, Err(CoreError::SchemaValidation(_))));
    }

    #[test]
    fn test_text_that_is_not_json_is_no_result() {
        assert_eq!(
            decode_structured_output::<Sample>(Some("{value:".to_string())),
            Ok(None)
        );
        assert_eq!(
            decode_structured_output::<Sample>(Some("Sorry, I cannot help".to_string())),
            Ok(None)
        );
    }

    #[test]
    fn test_fenced_json_is_decoded() {
        let decoded =
            decode_structured_output::<Sample>(Some("```json\n{\"value\": 2}\n```".to_string()));
        assert_eq!(decoded, Ok(Some(Sample { value: 2.0 })));

        let decoded = decode_structured_output::<Sample>(Some("```{\"value\": 3}```".to_string()));
        assert_eq!(decoded, Ok(Some(Sample { value: 3.0 })));
    }
}
