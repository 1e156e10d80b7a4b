use serde::{de::IgnoredAny, Deserialize, Serialize};

use crate::{InvocationEvent, InvocationResponse, StubError};

/// Outcome reported by the identity verification provider.
///
/// There is no provider yet, so every call reports the same mock result.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct VerificationResult {
    pub verified: bool,
    pub provider: String,
    pub score: f64,
}

impl VerificationResult {
    pub fn mock() -> Self {
        VerificationResult {
            verified: true,
            provider: "mock".into(),
            score: 0.95,
        }
    }
}

/// Verify the identity described by the event body.
///
/// The body must be valid JSON when present, but its contents do not yet
/// influence the result.
pub fn verify_id(event: &InvocationEvent) -> Result<InvocationResponse, StubError> {
    if let Some(body) = event.body() {
        serde_json::from_str::<IgnoredAny>(body).map_err(StubError::malformed_body)?;
    }

    debug!("Returning mock verification result");

    InvocationResponse::ok(&VerificationResult::mock()).map_err(StubError::internal)
}

#[cfg(test)]
pub mod tests {
    use anyhow::Result;

    use crate::{handlers::verify_id, InvocationEvent, StubError};

    const MOCK_BODY: &str = r#"{"verified":true,"provider":"mock","score":0.95}"#;

    #[test]
    fn it_verifies_an_empty_object() -> Result<()> {
        let response = verify_id(&InvocationEvent::from("{}"))?;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, MOCK_BODY);

        Ok(())
    }

    #[test]
    fn it_verifies_an_event_without_a_body() -> Result<()> {
        let without_body = verify_id(&InvocationEvent::default())?;
        let empty_object = verify_id(&InvocationEvent::from("{}"))?;

        assert_eq!(without_body, empty_object);

        Ok(())
    }

    #[test]
    fn it_ignores_the_request_contents() -> Result<()> {
        let response = verify_id(&InvocationEvent::from(r#"{"userId":"abc"}"#))?;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, MOCK_BODY);

        Ok(())
    }

    #[test]
    fn it_accepts_any_json_value() -> Result<()> {
        for body in ["42", "[1, 2]", "\"text\"", "null", "true"] {
            let response = verify_id(&InvocationEvent::from(body))?;
            assert_eq!(response.body, MOCK_BODY);
        }

        Ok(())
    }

    #[test]
    fn it_accepts_json_that_does_not_fit_native_types() -> Result<()> {
        let deeply_nested = format!("{}{}", "[".repeat(200), "]".repeat(200));

        for body in ["1e400", r#""\ud800""#, deeply_nested.as_str()] {
            let response = verify_id(&InvocationEvent::from(body))?;
            assert_eq!(response.status_code, 200);
            assert_eq!(response.body, MOCK_BODY);
        }

        Ok(())
    }

    #[test]
    fn it_rejects_a_malformed_body() {
        for body in ["not json", "{", "{\"userId\":}"] {
            let result = verify_id(&InvocationEvent::from(body));
            assert!(matches!(result, Err(StubError::MalformedBody(_))));
        }
    }

    #[test]
    fn it_returns_the_same_response_on_repeat_calls() -> Result<()> {
        let event = InvocationEvent::from(r#"{"userId":"abc"}"#);

        assert_eq!(verify_id(&event)?, verify_id(&event)?);

        Ok(())
    }
}
