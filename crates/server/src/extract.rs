//! Buffers a multipart request fully into memory before anything else runs.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;

use crate::errors::JsonApiError;

/// One fully buffered multipart form: at most one binary field under a known
/// name, plus every text field with repeated names accumulated in order.
#[derive(Debug, Default)]
pub struct FormPayload {
    file: Option<Bytes>,
    fields: HashMap<String, Vec<String>>,
}

impl FormPayload {
    /// First value of a text field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.first()).map(String::as_str)
    }

    /// Every value of a repeated text field, in arrival order.
    pub fn field_values(&self, name: &str) -> Vec<String> {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    pub fn file_bytes(&self) -> Option<&[u8]> {
        self.file.as_deref()
    }
}

/// Reads the whole form, keeping the first non-empty occurrence of
/// `file_field` as the binary payload. An empty file part counts as absent;
/// whether a missing file is fatal is the caller's decision (creation flows
/// require it, the banner update tolerates it).
pub async fn read_form(mut multipart: Multipart, file_field: &str) -> Result<FormPayload, JsonApiError> {
    let mut payload = FormPayload::default();
    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let Some(name) = field.name().map(str::to_string) else { continue };
        if name == file_field {
            let data = field.bytes().await.map_err(bad_multipart)?;
            if payload.file.is_none() && !data.is_empty() {
                payload.file = Some(data);
            }
        } else {
            let text = field.text().await.map_err(bad_multipart)?;
            payload.fields.entry(name).or_default().push(text);
        }
    }
    Ok(payload)
}

fn bad_multipart(e: MultipartError) -> JsonApiError {
    JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid multipart payload", Some(e.to_string()))
}
