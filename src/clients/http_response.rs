//! Response handling for the SData client library.
//!
//! Successful bodies are handed to the caller as parsed JSON. Failed
//! responses are normalized into [`SdataError`]: when the body is an SData
//! diagnosis list (a JSON array whose first element carries a non-empty
//! `message`) the message is surfaced, otherwise the status text is.

use serde_json::Value;

use crate::clients::errors::SdataError;

/// Parses a successful response body.
///
/// - Empty body: [`Value::Null`]
/// - JSON body: the parsed value
/// - Anything else: the raw text as [`Value::String`]
#[must_use]
pub fn parse_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

/// Extracts the message of the first diagnosis of an SData error body.
///
/// Strings are used as-is. Other values are rendered as JSON text, except
/// `null`, `false`, `0` and `""`, which count as no message.
#[must_use]
pub fn diagnosis_message(body: &Value) -> Option<String> {
    match body.as_array()?.first()?.get("message")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|v| v.abs() < f64::EPSILON) => None,
        other => Some(other.to_string()),
    }
}

/// Normalizes a non-2xx response into an [`SdataError`].
///
/// `reason` is the reason phrase of the status line, when the server sent
/// one other than the canonical phrase.
#[must_use]
pub fn error_from_response(status: u16, reason: Option<&str>, body: &str) -> SdataError {
    let parsed = parse_body(body);
    if let Some(message) = diagnosis_message(&parsed) {
        return SdataError::Application { status, message };
    }
    SdataError::transport(status, reason, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body_empty_is_null() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("  \n"), Value::Null);
    }

    #[test]
    fn test_parse_body_json() {
        assert_eq!(
            parse_body(r#"{"$key":"QDEMOA000001"}"#),
            json!({"$key": "QDEMOA000001"})
        );
    }

    #[test]
    fn test_parse_body_non_json_is_kept_as_text() {
        assert_eq!(parse_body("OK"), Value::String("OK".to_string()));
    }

    #[test]
    fn test_structured_error_yields_application_error() {
        let error = error_from_response(
            400,
            None,
            r#"[{"severity":"Error","sdataCode":"ApplicationDiagnosis","message":"bad thing"}]"#,
        );
        assert!(matches!(
            &error,
            SdataError::Application { status: 400, message } if message == "bad thing"
        ));
        assert_eq!(error.to_string(), "bad thing");
    }

    #[test]
    fn test_unstructured_error_yields_status_text() {
        let error = error_from_response(500, None, r#"{"error":"boom"}"#);
        assert_eq!(error.to_string(), "Internal Server Error");

        let error = error_from_response(401, None, "");
        assert_eq!(error.to_string(), "Unauthorized");
    }

    #[test]
    fn test_unstructured_error_uses_server_reason_phrase() {
        let error = error_from_response(401, Some("Session Expired"), "<html></html>");
        assert!(matches!(
            &error,
            SdataError::Transport { status: 401, status_text, .. } if status_text == "Session Expired"
        ));
    }

    #[test]
    fn test_structured_error_wins_over_reason_phrase() {
        let error = error_from_response(400, Some("Bad Input"), r#"[{"message":"bad thing"}]"#);
        assert_eq!(error.to_string(), "bad thing");
    }

    #[test]
    fn test_diagnosis_requires_message_on_first_element() {
        assert_eq!(diagnosis_message(&json!([])), None);
        assert_eq!(diagnosis_message(&json!([{"message": ""}])), None);
        assert_eq!(diagnosis_message(&json!([{"severity": "Error"}])), None);
        assert_eq!(diagnosis_message(&json!({"message": "x"})), None);
        assert_eq!(
            diagnosis_message(&json!([{"message": "first"}, {"message": "second"}])),
            Some("first".to_string())
        );
    }

    #[test]
    fn test_diagnosis_renders_non_string_messages() {
        assert_eq!(diagnosis_message(&json!([{"message": 3}])), Some("3".to_string()));
        assert_eq!(
            diagnosis_message(&json!([{"message": true}])),
            Some("true".to_string())
        );
        assert_eq!(
            diagnosis_message(&json!([{"message": {"code": 7}}])),
            Some(r#"{"code":7}"#.to_string())
        );
        assert_eq!(diagnosis_message(&json!([{"message": 0}])), None);
        assert_eq!(diagnosis_message(&json!([{"message": false}])), None);
        assert_eq!(diagnosis_message(&json!([{"message": null}])), None);

        let error = error_from_response(500, None, r#"[{"message":3}]"#);
        assert!(matches!(error, SdataError::Application { status: 500, .. }));
        assert_eq!(error.to_string(), "3");
    }
}
