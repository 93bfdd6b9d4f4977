use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Response,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, upload::UploadDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::upload::ReceivedFile,
        service::upload::UploadService,
        state::AppState,
        util::response::json_success,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Accept one file plus its declared purpose and persist it under a random
/// unique filename. Editors and admins only.
#[utoipa::path(
    post,
    path = "/api/uploads",
    tag = UPLOAD_TAG,
    responses(
        (status = 200, description = "File stored", body = UploadDto),
        (status = 400, description = "Missing file or unrecognized purpose", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User lacks the editor capability", body = ErrorDto),
        (status = 413, description = "File exceeds the configured size ceiling", body = ErrorDto),
        (status = 415, description = "File type not allowed for the purpose", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_upload(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Editor])
        .await?;

    let mut file: Option<ReceivedFile> = None;
    let mut purpose: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        let field_name = field.name().map(|name| name.to_string());
        match field_name.as_deref() {
            Some("file") => {
                let name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read file: {}", e)))?;

                file = Some(ReceivedFile {
                    name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("purpose") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read purpose: {}", e)))?;

                purpose = Some(value);
            }
            _ => {}
        }
    }

    let service = UploadService::new(&state.upload);
    let stored = service.store(purpose, file).await?;

    Ok(json_success(StatusCode::OK, stored.into_dto()))
}
