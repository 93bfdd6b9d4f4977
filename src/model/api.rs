use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single field-level validation failure.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ValidationIssueDto {
    /// Path of the offending field, e.g. `baseStats.hp` or `media.2.url`.
    pub path: String,
    /// The violated rule, human- and machine-readable.
    pub message: String,
}

/// Error payload nested inside the error envelope.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorBodyDto {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<ValidationIssueDto>>,
}

/// Error envelope returned by every failing endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Always `false` for errors.
    pub success: bool,
    pub error: ErrorBodyDto,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorBodyDto {
                message: message.into(),
                issues: None,
            },
        }
    }

    pub fn with_issues(message: impl Into<String>, issues: Vec<ValidationIssueDto>) -> Self {
        Self {
            success: false,
            error: ErrorBodyDto {
                message: message.into(),
                issues: Some(issues),
            },
        }
    }
}
