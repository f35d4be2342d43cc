//! Intermediate multipart form representation.
//!
//! Request bodies describe themselves as a list of [`FormPart`]s and are only
//! converted into a `reqwest` form at send time. The intermediate list keeps
//! field inclusion/omission observable in tests without touching the network.

use crate::errors::StabilityError;
use reqwest::multipart::{Form, Part};

/// A single field of a multipart/form-data body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FormPart {
    /// Plain text field.
    Text { name: &'static str, value: String },
    /// File field carried with a filename and MIME type.
    File {
        name: &'static str,
        filename: &'static str,
        mime: &'static str,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    /// The form field name this part is sent under.
    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// Builds the `reqwest` form for a request body.
///
/// The `multipart/form-data; boundary=<generated>` content type, with a fresh
/// random boundary per request, is supplied by `reqwest` when the form is
/// attached to a request.
pub(crate) fn into_form(parts: Vec<FormPart>) -> Result<Form, StabilityError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                filename,
                mime,
                bytes,
            } => {
                let file = Part::bytes(bytes).file_name(filename).mime_str(mime)?;
                form.part(name, file)
            }
        };
    }
    Ok(form)
}
