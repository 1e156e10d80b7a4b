use serde::{Deserialize, Serialize};

use crate::{InvocationEvent, InvocationResponse, StubError};

/// Fields read off an uploaded ID image.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct OcrExtraction {
    pub name: String,
    pub id_number: String,
    pub dob: String,
    pub confidence: f64,
}

impl OcrExtraction {
    pub fn mock() -> Self {
        OcrExtraction {
            name: "Priya Sharma".into(),
            id_number: "DL-XYZ-1234".into(),
            dob: "1992-06-10".into(),
            confidence: 0.93,
        }
    }
}

/// Extract identity fields from the ID image referenced by the event.
///
/// The body is passed through untouched; no OCR provider is called.
pub fn extract_id(event: &InvocationEvent) -> Result<InvocationResponse, StubError> {
    debug!(
        "Returning mock OCR extraction (body present: {})",
        event.body().is_some()
    );

    InvocationResponse::ok(&OcrExtraction::mock()).map_err(StubError::internal)
}
