use crate::{
    AppState,
    dtos::{
        common::{ActionResponse, ErrorResponse, StyleParams},
        show::ShowResponse,
    },
    error::ApiError,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use axum_extra::extract::{Form, FormRejection, WithRejection};
use chrono::Utc;
use database::{error::ServiceError, services::show::ShowService};
use models::forms::ShowForm;

/// List every show with its venue and artist
#[utoipa::path(
    get,
    path = "/shows",
    params(StyleParams),
    responses(
        (status = 200, description = "All shows by start time", body = Vec<ShowResponse>),
        (status = 400, description = "Unknown format style", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Shows"
)]
pub async fn list_shows(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<StyleParams>, ApiError>,
) -> Result<Json<Vec<ShowResponse>>, ApiError> {
    let style = params.format_style()?;
    let shows = ShowService::list(&state.db, style).await?;

    Ok(Json(shows.into_iter().map(Into::into).collect()))
}

/// Show form with the start time set to now
#[utoipa::path(
    get,
    path = "/shows/create",
    responses(
        (status = 200, description = "Pre-filled show form", body = ShowForm)
    ),
    tag = "Shows"
)]
pub async fn create_show_form() -> Json<ShowForm> {
    Json(ShowForm::with_defaults(Utc::now().naive_utc()))
}

/// Book an artist at a venue
#[utoipa::path(
    post,
    path = "/shows/create",
    request_body(content = ShowForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Show listed", body = ActionResponse),
        (status = 400, description = "Invalid submission", body = ActionResponse),
        (status = 422, description = "Venue or artist does not exist, or the form body could not be decoded", body = ActionResponse),
        (status = 500, description = "Internal server error", body = ActionResponse)
    ),
    tag = "Shows"
)]
pub async fn create_show(
    State(state): State<AppState>,
    form: Result<Form<ShowForm>, FormRejection>,
) -> (StatusCode, Json<ActionResponse>) {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            return ApiError::from(rejection)
                .into_action("An error occurred. Show could not be listed.", "/");
        }
    };

    let result = match form.validate() {
        Ok(new_show) => ShowService::create(&state.db, new_show).await,
        Err(err) => Err(ServiceError::from(err)),
    };

    match result {
        Ok(show) => (
            StatusCode::CREATED,
            Json(ActionResponse::succeeded("Show was successfully listed!", "/").with_id(show.id)),
        ),
        Err(err) => {
            ApiError::from(err).into_action("An error occurred. Show could not be listed.", "/")
        }
    }
}
