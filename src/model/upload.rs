use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for a stored upload: where it can be fetched, plus the metadata
/// of the file as it was received.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadDto {
    pub url: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: u64,
}
