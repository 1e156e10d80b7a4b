use serde::{Deserialize, Serialize};

/// The single input object delivered to a handler per call.
///
/// Only `body` is read. Everything else an API Gateway proxy event carries
/// (`headers`, `requestContext`, ...) is accepted and dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InvocationEvent {
    #[serde(default)]
    pub body: Option<String>,
}

impl InvocationEvent {
    pub fn new(body: Option<String>) -> Self {
        Self { body }
    }

    /// The body text, if there is any. An empty string counts as no body.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref().filter(|body| !body.is_empty())
    }
}

impl From<String> for InvocationEvent {
    fn from(value: String) -> Self {
        InvocationEvent::new(Some(value))
    }
}

impl From<&str> for InvocationEvent {
    fn from(value: &str) -> Self {
        InvocationEvent::new(Some(value.to_owned()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    /// A 200 response carrying `payload` serialized as JSON text.
    pub fn ok<T: Serialize>(payload: &T) -> Result<Self, serde_json::Error> {
        Ok(InvocationResponse {
            status_code: 200,
            body: serde_json::to_string(payload)?,
        })
    }
}
