use rand::Rng;

use crate::server::{
    config::UploadConfig,
    error::AppError,
    model::upload::{infer_extension, ReceivedFile, StoredUpload, UploadPurpose},
};

/// Length of the random stem of stored filenames.
const FILE_STEM_LENGTH: usize = 24;

pub struct UploadService<'a> {
    config: &'a UploadConfig,
}

impl<'a> UploadService<'a> {
    pub fn new(config: &'a UploadConfig) -> Self {
        Self { config }
    }

    /// Validates and persists one uploaded file.
    ///
    /// Rejection order matches the checks a client can fix cheapest first:
    /// missing file / unknown purpose (400), size ceiling (413), MIME
    /// allow-list (415). Nothing is written unless every check passes.
    pub async fn store(
        &self,
        purpose: Option<String>,
        file: Option<ReceivedFile>,
    ) -> Result<StoredUpload, AppError> {
        let file = file.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;
        let purpose = purpose
            .as_deref()
            .and_then(UploadPurpose::parse)
            .ok_or_else(|| AppError::BadRequest("Invalid upload purpose".to_string()))?;

        validate_file(purpose, &file, self.config.max_bytes)?;

        let extension = infer_extension(&file.name, &file.content_type);
        let filename = format!("{}{}", generate_file_stem(), extension);

        tokio::fs::create_dir_all(&self.config.dir).await?;
        tokio::fs::write(self.config.dir.join(&filename), &file.bytes).await?;

        Ok(StoredUpload {
            url: format!("/uploads/{}", filename),
            original_name: file.name,
            mime_type: file.content_type,
            size: file.bytes.len() as u64,
        })
    }
}

/// Size and MIME checks, separated from the filesystem write.
fn validate_file(
    purpose: UploadPurpose,
    file: &ReceivedFile,
    max_bytes: u64,
) -> Result<(), AppError> {
    if file.bytes.len() as u64 > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "File exceeds the {} byte limit",
            max_bytes
        )));
    }

    if !purpose.allows(&file.content_type) {
        return Err(AppError::UnsupportedMediaType(format!(
            "File type '{}' is not allowed for purpose {}",
            file.content_type,
            purpose.as_str()
        )));
    }

    Ok(())
}

/// Random lowercase alphanumeric stem for stored filenames.
fn generate_file_stem() -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::rng();

    (0..FILE_STEM_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
