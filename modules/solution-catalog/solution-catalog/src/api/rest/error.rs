//! REST error mapping for the Solution Catalog module.
//!
//! Errors are returned as RFC 9457 Problem Details.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

use crate::domain::error::DomainError;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
fn serialize_status_code<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(status.as_u16())
}

fn deserialize_status_code<'de, D>(deserializer: D) -> Result<StatusCode, D::Error>
where
    D: Deserializer<'de>,
{
    let code = u16::deserialize(deserializer)?;
    StatusCode::from_u16(code).map_err(serde::de::Error::custom)
}

/// RFC 9457 Problem Details for HTTP APIs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(title = "Problem", description = "RFC 9457 Problem Details for HTTP APIs")]
#[must_use]
pub struct Problem {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// The HTTP status code for this occurrence of the problem.
    #[serde(
        serialize_with = "serialize_status_code",
        deserialize_with = "deserialize_status_code"
    )]
    #[schema(value_type = u16)]
    pub status: StatusCode,
    /// A human-readable explanation specific to this occurrence of the problem.
    pub detail: String,
    /// A URI reference that identifies the specific occurrence of the problem.
    pub instance: String,
    /// Machine-readable error code.
    pub code: String,
    /// Trace id useful for correlating logs.
    pub trace_id: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: "about:blank".to_owned(),
            title: title.into(),
            status,
            detail: detail.into(),
            instance: String::new(),
            code: String::new(),
            trace_id: None,
        }
    }

    pub fn with_type(mut self, type_url: impl Into<String>) -> Self {
        self.type_url = type_url.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = self.status;
        let mut resp = axum::Json(self).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        let trace_id = tracing::Span::current()
            .id()
            .map(|id| id.into_u64().to_string());

        let (status, code, title, detail) = match &e {
            DomainError::ModuleNotFound(_) => (
                StatusCode::NOT_FOUND,
                "SOLUTION_CATALOG_MODULE_NOT_FOUND",
                "Module not found",
                e.to_string(),
            ),
            DomainError::SolutionNotFound(_) => (
                StatusCode::NOT_FOUND,
                "SOLUTION_CATALOG_SOLUTION_NOT_FOUND",
                "Solution not found",
                e.to_string(),
            ),
            DomainError::EnvironmentNotFound { .. } => (
                StatusCode::NOT_FOUND,
                "SOLUTION_CATALOG_ENVIRONMENT_NOT_FOUND",
                "Environment not found",
                e.to_string(),
            ),
            DomainError::NotDevelopmentEnvironment { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "SOLUTION_CATALOG_INVALID_OPERATION",
                "Invalid operation",
                e.to_string(),
            ),
            DomainError::ModuleAlreadyInstalled { .. } => (
                StatusCode::CONFLICT,
                "SOLUTION_CATALOG_CONFLICT",
                "Module already installed",
                e.to_string(),
            ),
            DomainError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "SOLUTION_CATALOG_VALIDATION",
                "Validation failed",
                msg.clone(),
            ),
            DomainError::Internal(err) => {
                tracing::error!(error = ?err, "Internal error in solution_catalog");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SOLUTION_CATALOG_INTERNAL",
                    "Internal Server Error",
                    "An internal error occurred".to_owned(),
                )
            }
        };

        let mut problem = Problem::new(status, title, detail)
            .with_type(format!("https://errors.hyperspot.com/{code}"))
            .with_code(code);

        if let Some(id) = trace_id {
            problem = problem.with_trace_id(id);
        }

        problem
    }
}
