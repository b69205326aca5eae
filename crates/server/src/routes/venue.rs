use crate::{
    AppState,
    dtos::{
        common::{ActionResponse, ErrorResponse, SearchForm, StyleParams},
        venue::{VenueDetailResponse, VenueGroupResponse},
    },
    error::ApiError,
};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection},
    http::StatusCode,
};
use axum_extra::extract::{Form, FormRejection, WithRejection};
use chrono::Utc;
use database::{error::ServiceError, services::venue::VenueService};
use models::{
    forms::{NewVenue, VenueForm},
    search::SearchResults,
};

/// List venues grouped by city and state
#[utoipa::path(
    get,
    path = "/venues",
    responses(
        (status = 200, description = "Venues grouped by location", body = Vec<VenueGroupResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Venues"
)]
pub async fn list_venues(
    State(state): State<AppState>,
) -> Result<Json<Vec<VenueGroupResponse>>, ApiError> {
    let now = Utc::now().naive_utc();
    let groups = VenueService::list_grouped(&state.db, now).await?;

    Ok(Json(groups.into_iter().map(Into::into).collect()))
}

/// Search venues by partial, case-insensitive name
#[utoipa::path(
    post,
    path = "/venues/search",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Matching venues", body = SearchResults),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Venues"
)]
pub async fn search_venues(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<SearchForm>, ApiError>,
) -> Result<Json<SearchResults>, ApiError> {
    let now = Utc::now().naive_utc();
    let results = VenueService::search(&state.db, &form.search_term, now).await?;

    Ok(Json(results))
}

/// Get a venue with its past and upcoming shows
#[utoipa::path(
    get,
    path = "/venues/{id}",
    params(
        ("id" = i32, Path, description = "Venue ID"),
        StyleParams
    ),
    responses(
        (status = 200, description = "Venue found", body = VenueDetailResponse),
        (status = 400, description = "Unknown format style", body = ErrorResponse),
        (status = 404, description = "Venue not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Venues"
)]
pub async fn get_venue(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Query(params), _): WithRejection<Query<StyleParams>, ApiError>,
) -> Result<Json<VenueDetailResponse>, ApiError> {
    let style = params.format_style()?;
    let now = Utc::now().naive_utc();
    let detail = VenueService::get_detail(&state.db, id, now, style).await?;

    Ok(Json(detail.into()))
}

/// Empty venue form
#[utoipa::path(
    get,
    path = "/venues/create",
    responses(
        (status = 200, description = "Blank venue form", body = VenueForm)
    ),
    tag = "Venues"
)]
pub async fn create_venue_form() -> Json<VenueForm> {
    Json(VenueForm::default())
}

/// Create a venue from a form submission
#[utoipa::path(
    post,
    path = "/venues/create",
    request_body(content = VenueForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Venue listed", body = ActionResponse),
        (status = 400, description = "Invalid submission", body = ActionResponse),
        (status = 422, description = "Form body could not be decoded", body = ActionResponse),
        (status = 500, description = "Internal server error", body = ActionResponse)
    ),
    tag = "Venues"
)]
pub async fn create_venue(
    State(state): State<AppState>,
    form: Result<Form<VenueForm>, FormRejection>,
) -> (StatusCode, Json<ActionResponse>) {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            return ApiError::from(rejection)
                .into_action("An error occurred. Venue could not be listed.", "/");
        }
    };
    let name = form.name.clone().unwrap_or_default();

    let result = match form.validate() {
        Ok(new_venue) => VenueService::create(&state.db, new_venue).await,
        Err(err) => Err(ServiceError::from(err)),
    };

    match result {
        Ok(venue) => {
            let message = format!("Venue {} was successfully listed!", venue.name);
            (
                StatusCode::CREATED,
                Json(ActionResponse::succeeded(message, "/").with_id(venue.id)),
            )
        }
        Err(err) => ApiError::from(err).into_action(
            format!("An error occurred. Venue {name} could not be listed."),
            "/",
        ),
    }
}

/// Venue form populated from the stored record
#[utoipa::path(
    get,
    path = "/venues/{id}/edit",
    params(
        ("id" = i32, Path, description = "Venue ID")
    ),
    responses(
        (status = 200, description = "Populated venue form", body = VenueForm),
        (status = 404, description = "Venue not found", body = ErrorResponse)
    ),
    tag = "Venues"
)]
pub async fn edit_venue_form(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<VenueForm>, ApiError> {
    let venue = VenueService::get(&state.db, id).await?;

    Ok(Json(VenueForm::from(NewVenue::from(venue))))
}

/// Replace every field of a venue
#[utoipa::path(
    post,
    path = "/venues/{id}/edit",
    params(
        ("id" = i32, Path, description = "Venue ID")
    ),
    request_body(content = VenueForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Venue updated", body = ActionResponse),
        (status = 400, description = "Invalid submission", body = ActionResponse),
        (status = 422, description = "Form body could not be decoded", body = ActionResponse),
        (status = 404, description = "Venue not found", body = ActionResponse),
        (status = 500, description = "Internal server error", body = ActionResponse)
    ),
    tag = "Venues"
)]
pub async fn edit_venue(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    form: Result<Form<VenueForm>, FormRejection>,
) -> (StatusCode, Json<ActionResponse>) {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            return ApiError::from(rejection)
                .into_action("An error occurred. Venue could not be updated.", "/venues");
        }
    };
    let redirect = format!("/venues/{id}");
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            return ApiError::from(rejection)
                .into_action("An error occurred. Venue could not be updated.", redirect);
        }
    };
    let name = form.name.clone().unwrap_or_default();

    let result = match form.validate() {
        Ok(new_venue) => VenueService::update(&state.db, id, new_venue).await,
        Err(err) => Err(ServiceError::from(err)),
    };

    match result {
        Ok(venue) => {
            let message = format!("Venue {} was successfully updated!", venue.name);
            (
                StatusCode::OK,
                Json(ActionResponse::succeeded(message, redirect).with_id(venue.id)),
            )
        }
        Err(err) => ApiError::from(err).into_action(
            format!("An error occurred. Venue {name} could not be updated."),
            redirect,
        ),
    }
}

/// Delete a venue and all of its shows
#[utoipa::path(
    delete,
    path = "/venues/{id}",
    params(
        ("id" = i32, Path, description = "Venue ID")
    ),
    responses(
        (status = 200, description = "Venue deleted", body = ActionResponse),
        (status = 400, description = "Invalid venue id", body = ActionResponse),
        (status = 404, description = "Venue not found", body = ActionResponse),
        (status = 500, description = "Internal server error", body = ActionResponse)
    ),
    tag = "Venues"
)]
pub async fn delete_venue(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> (StatusCode, Json<ActionResponse>) {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            return ApiError::from(rejection)
                .into_action("The venue delete was unsuccessful. Try again.", "/venues");
        }
    };

    match VenueService::delete(&state.db, id).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ActionResponse::succeeded("The venue was successfully deleted.", "/venues").with_id(id)),
        ),
        Err(err) => ApiError::from(err)
            .into_action("The venue delete was unsuccessful. Try again.", "/venues"),
    }
}
