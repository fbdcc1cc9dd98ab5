//! Translate route - multipart upload in, JSON translation out.

use axum::{Json, extract::State};
use axum_extra::extract::{Multipart, multipart::MultipartRejection};
use doc_translator_core::{Lang, TranslationResponse, UploadedDocument};
use std::sync::Arc;
use tracing::debug;

use crate::helpers::{OptionExt, ResultExt, RouteResult};
use crate::state::AppState;

/// Fields collected from the upload form
#[derive(Default)]
struct TranslateForm {
    file: Option<UploadedDocument>,
    source_language: Option<String>,
}

async fn read_form(mut multipart: Multipart) -> RouteResult<TranslateForm> {
    let mut form = TranslateForm::default();

    while let Some(field) = multipart.next_field().await.or_malformed()? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let declared_type = field.content_type().unwrap_or("").to_string();
                let file_name = field.file_name().map(str::to_string);
                let data = field.bytes().await.or_malformed()?;

                debug!("Received file field: {} bytes, type {:?}", data.len(), declared_type);

                let mut document = UploadedDocument::new(data, declared_type);
                if let Some(file_name) = file_name {
                    document = document.with_file_name(file_name);
                }
                form.file = Some(document);
            }
            "sourceLanguage" => {
                form.source_language = Some(field.text().await.or_malformed()?);
            }
            _ => debug!("Ignoring unexpected form field {:?}", name),
        }
    }

    Ok(form)
}

/// Translate an uploaded document to English.
///
/// The credential is checked before the request body is read.
pub async fn translate_document(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> RouteResult<Json<TranslationResponse>> {
    let pipeline = state.pipeline()?;

    let form = read_form(multipart.or_malformed()?).await?;
    let document = form.file.or_missing("file")?;
    let source_language = form
        .source_language
        .filter(|lang| !lang.is_empty())
        .or_missing("sourceLanguage")?;

    let response = pipeline
        .translate(document, Lang::new(source_language))
        .await?;

    Ok(Json(response))
}
