//! Structured request validation errors.
//!
//! Validation runs as an explicit pass when converting request DTOs into
//! typed parameter models (`*Params::from_dto`). Every failing field is
//! collected, so the client receives the complete issue list in one 422
//! response rather than a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, ValidationIssueDto};

/// One failing field: its path and the violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

#[derive(Error, Debug)]
#[error("Validation failed")]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let issues = self
            .issues
            .into_iter()
            .map(|issue| ValidationIssueDto {
                path: issue.path,
                message: issue.message,
            })
            .collect();

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDto::with_issues("Validation failed", issues)),
        )
            .into_response()
    }
}

/// Accumulator used by the validation passes.
///
/// Push one entry per violated rule, then call `into_result` to either
/// continue or fail with the collected list.
#[derive(Debug, Default)]
pub struct IssueList {
    issues: Vec<ValidationIssue>,
}

impl IssueList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
        });
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                issues: self.issues,
            })
        }
    }
}
