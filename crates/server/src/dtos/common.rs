use models::datetime::{FormatStyle, UnknownFormatStyle};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Outcome of a form submission or delete, carrying the flash message and
/// the page to go to next
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    pub redirect: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<String>,
}

impl ActionResponse {
    pub fn succeeded(message: impl Into<String>, redirect: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            redirect: redirect.into(),
            id: None,
            errors: Vec::new(),
        }
    }

    pub fn failed(message: impl Into<String>, redirect: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::succeeded(message, redirect)
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }
}

/// Body of every error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StyleParams {
    /// `full` or `medium` (default)
    pub style: Option<String>,
}

impl StyleParams {
    pub fn format_style(&self) -> Result<FormatStyle, UnknownFormatStyle> {
        match self.style.as_deref() {
            Some(style) => style.parse(),
            None => Ok(FormatStyle::default()),
        }
    }
}
