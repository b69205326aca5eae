use crate::dtos::common::{ActionResponse, ErrorResponse};
use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::FormRejection;
use database::error::ServiceError;
use log::{error, warn};
use models::datetime::UnknownFormatStyle;
use thiserror::Error;

/// Errors a handler can turn into an HTTP response
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Not found")]
    RouteNotFound,

    /// The request could not be decoded into the handler's arguments
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    fn rejected<R>(rejection: R) -> Self
    where
        R: IntoResponse + std::fmt::Display,
    {
        let message = rejection.to_string();
        Self::Rejected {
            status: rejection.into_response().status(),
            message,
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::rejected(rejection)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::rejected(rejection)
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        Self::rejected(rejection)
    }
}

impl From<UnknownFormatStyle> for ApiError {
    fn from(err: UnknownFormatStyle) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Service(ServiceError::Validation(_)) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Service(ServiceError::NotFound { .. }) | Self::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Service(ServiceError::MissingReference { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Service(ServiceError::DanglingReference { .. } | ServiceError::Store(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Rejected { status, .. } => *status,
        }
    }

    /// Text safe to show a client; store failures are never echoed
    pub fn message(&self) -> String {
        match self {
            Self::Service(ServiceError::Store(_)) => "Internal server error".to_string(),
            Self::Service(ServiceError::Validation(_)) => "Invalid submission".to_string(),
            other => other.to_string(),
        }
    }

    /// Per-field problems of a rejected submission
    pub fn field_errors(&self) -> Vec<String> {
        match self {
            Self::Service(ServiceError::Validation(err)) => {
                err.errors.iter().map(ToString::to_string).collect()
            }
            Self::Rejected { message, .. } => vec![message.clone()],
            _ => Vec::new(),
        }
    }

    fn log(&self) {
        if self.status().is_server_error() {
            error!("Request failed: {self}");
        } else {
            warn!("Request rejected: {self}");
        }
    }

    /// Reports a failed submission through the flash channel instead of the
    /// plain error body
    pub fn into_action(
        self,
        message: impl Into<String>,
        redirect: impl Into<String>,
    ) -> (StatusCode, Json<ActionResponse>) {
        self.log();
        let response = ActionResponse::failed(message, redirect).with_errors(self.field_errors());
        (self.status(), Json(response))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let body = ErrorResponse {
            success: false,
            message: self.message(),
            errors: self.field_errors(),
        };
        (self.status(), Json(body)).into_response()
    }
}
