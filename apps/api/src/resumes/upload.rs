//! Multipart upload parsing and file type checks for resume uploads.

use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Name given to uploads that arrive without a `name` field.
pub const DEFAULT_RESUME_NAME: &str = "Untitled Resume";

const FILE_FIELD: &str = "resume";
const NAME_FIELD: &str = "name";

#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, Default)]
pub struct UploadForm {
    pub name: Option<String>,
    pub file: Option<UploadedFile>,
}

/// Reads the `resume` file field and optional `name` text field.
/// Unknown fields are skipped. Files larger than `max_bytes` are rejected.
pub async fn read_upload_form(
    multipart: &mut Multipart,
    max_bytes: usize,
) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            FILE_FIELD => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;

                if data.len() > max_bytes {
                    return Err(AppError::PayloadTooLarge(format!(
                        "Resume file is {} bytes; the limit is {max_bytes} bytes",
                        data.len()
                    )));
                }

                form.file = Some(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
            }
            NAME_FIELD => {
                let name = field.text().await?;
                let name = name.trim();
                if !name.is_empty() {
                    form.name = Some(name.to_string());
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Resolves the stored MIME type of an upload. Only PDF and DOCX are accepted.
///
/// The declared content type wins; when it is missing or generic
/// (`application/octet-stream`) the file extension decides.
pub fn resolve_file_type(
    file_name: &str,
    content_type: Option<&str>,
) -> Result<&'static str, AppError> {
    let declared = content_type
        .map(|ct| ct.split(';').next().unwrap_or_default().trim().to_lowercase())
        .filter(|ct| !ct.is_empty() && ct != "application/octet-stream");

    let resolved = match declared.as_deref() {
        Some(PDF_MIME) => Some(PDF_MIME),
        Some(DOCX_MIME) => Some(DOCX_MIME),
        Some(_) => None,
        None => {
            let lower = file_name.to_lowercase();
            if lower.ends_with(".pdf") {
                Some(PDF_MIME)
            } else if lower.ends_with(".docx") {
                Some(DOCX_MIME)
            } else {
                None
            }
        }
    };

    resolved.ok_or_else(|| {
        AppError::UnsupportedMediaType(format!(
            "Only PDF and DOCX files are allowed (got '{}', type '{}')",
            file_name,
            content_type.unwrap_or("unknown")
        ))
    })
}
