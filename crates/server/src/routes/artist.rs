use crate::{
    AppState,
    dtos::{
        artist::{ArtistDetailResponse, ArtistSummaryResponse},
        common::{ActionResponse, ErrorResponse, SearchForm, StyleParams},
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
use database::{error::ServiceError, services::artist::ArtistService};
use models::{
    forms::{ArtistForm, NewArtist},
    search::SearchResults,
};

/// List every artist's id and name
#[utoipa::path(
    get,
    path = "/artists",
    responses(
        (status = 200, description = "All artists", body = Vec<ArtistSummaryResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Artists"
)]
pub async fn list_artists(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArtistSummaryResponse>>, ApiError> {
    let artists = ArtistService::list(&state.db).await?;

    Ok(Json(artists.into_iter().map(Into::into).collect()))
}

/// Search artists by partial, case-insensitive name
#[utoipa::path(
    post,
    path = "/artists/search",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Matching artists", body = SearchResults),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Artists"
)]
pub async fn search_artists(
    State(state): State<AppState>,
    WithRejection(Form(form), _): WithRejection<Form<SearchForm>, ApiError>,
) -> Result<Json<SearchResults>, ApiError> {
    let now = Utc::now().naive_utc();
    let results = ArtistService::search(&state.db, &form.search_term, now).await?;

    Ok(Json(results))
}

/// Get an artist with their past and upcoming shows
#[utoipa::path(
    get,
    path = "/artists/{id}",
    params(
        ("id" = i32, Path, description = "Artist ID"),
        StyleParams
    ),
    responses(
        (status = 200, description = "Artist found", body = ArtistDetailResponse),
        (status = 400, description = "Unknown format style", body = ErrorResponse),
        (status = 404, description = "Artist not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Artists"
)]
pub async fn get_artist(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>,
    WithRejection(Query(params), _): WithRejection<Query<StyleParams>, ApiError>,
) -> Result<Json<ArtistDetailResponse>, ApiError> {
    let style = params.format_style()?;
    let now = Utc::now().naive_utc();
    let detail = ArtistService::get_detail(&state.db, id, now, style).await?;

    Ok(Json(detail.into()))
}

/// Empty artist form
#[utoipa::path(
    get,
    path = "/artists/create",
    responses(
        (status = 200, description = "Blank artist form", body = ArtistForm)
    ),
    tag = "Artists"
)]
pub async fn create_artist_form() -> Json<ArtistForm> {
    Json(ArtistForm::default())
}

/// Create an artist from a form submission
#[utoipa::path(
    post,
    path = "/artists/create",
    request_body(content = ArtistForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Artist listed", body = ActionResponse),
        (status = 400, description = "Invalid submission", body = ActionResponse),
        (status = 422, description = "Form body could not be decoded", body = ActionResponse),
        (status = 500, description = "Internal server error", body = ActionResponse)
    ),
    tag = "Artists"
)]
pub async fn create_artist(
    State(state): State<AppState>,
    form: Result<Form<ArtistForm>, FormRejection>,
) -> (StatusCode, Json<ActionResponse>) {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            return ApiError::from(rejection)
                .into_action("An error occurred. Artist could not be listed.", "/");
        }
    };
    let name = form.name.clone().unwrap_or_default();

    let result = match form.validate() {
        Ok(new_artist) => ArtistService::create(&state.db, new_artist).await,
        Err(err) => Err(ServiceError::from(err)),
    };

    match result {
        Ok(artist) => {
            let message = format!("Artist {} was successfully listed!", artist.display_name());
            (
                StatusCode::CREATED,
                Json(ActionResponse::succeeded(message, "/").with_id(artist.id)),
            )
        }
        Err(err) => ApiError::from(err).into_action(
            format!("An error occurred. Artist {name} could not be listed."),
            "/",
        ),
    }
}

/// Artist form populated from the stored record
#[utoipa::path(
    get,
    path = "/artists/{id}/edit",
    params(
        ("id" = i32, Path, description = "Artist ID")
    ),
    responses(
        (status = 200, description = "Populated artist form", body = ArtistForm),
        (status = 404, description = "Artist not found", body = ErrorResponse)
    ),
    tag = "Artists"
)]
pub async fn edit_artist_form(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ApiError>,
) -> Result<Json<ArtistForm>, ApiError> {
    let artist = ArtistService::get(&state.db, id).await?;

    Ok(Json(ArtistForm::from(NewArtist::from(artist))))
}

/// Replace every field of an artist
#[utoipa::path(
    post,
    path = "/artists/{id}/edit",
    params(
        ("id" = i32, Path, description = "Artist ID")
    ),
    request_body(content = ArtistForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Artist updated", body = ActionResponse),
        (status = 400, description = "Invalid submission", body = ActionResponse),
        (status = 422, description = "Form body could not be decoded", body = ActionResponse),
        (status = 404, description = "Artist not found", body = ActionResponse),
        (status = 500, description = "Internal server error", body = ActionResponse)
    ),
    tag = "Artists"
)]
pub async fn edit_artist(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    form: Result<Form<ArtistForm>, FormRejection>,
) -> (StatusCode, Json<ActionResponse>) {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            return ApiError::from(rejection)
                .into_action("An error occurred. Artist could not be updated.", "/artists");
        }
    };
    let redirect = format!("/artists/{id}");
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            return ApiError::from(rejection)
                .into_action("An error occurred. Artist could not be updated.", redirect);
        }
    };
    let name = form.name.clone().unwrap_or_default();

    let result = match form.validate() {
        Ok(new_artist) => ArtistService::update(&state.db, id, new_artist).await,
        Err(err) => Err(ServiceError::from(err)),
    };

    match result {
        Ok(artist) => {
            let message = format!("Artist {} was successfully updated!", artist.display_name());
            (
                StatusCode::OK,
                Json(ActionResponse::succeeded(message, redirect).with_id(artist.id)),
            )
        }
        Err(err) => ApiError::from(err).into_action(
            format!("An error occurred. Artist {name} could not be updated."),
            redirect,
        ),
    }
}

/// Delete an artist and all of their shows
#[utoipa::path(
    delete,
    path = "/artists/{id}",
    params(
        ("id" = i32, Path, description = "Artist ID")
    ),
    responses(
        (status = 200, description = "Artist deleted", body = ActionResponse),
        (status = 400, description = "Invalid artist id", body = ActionResponse),
        (status = 404, description = "Artist not found", body = ActionResponse),
        (status = 500, description = "Internal server error", body = ActionResponse)
    ),
    tag = "Artists"
)]
pub async fn delete_artist(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> (StatusCode, Json<ActionResponse>) {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            return ApiError::from(rejection)
                .into_action("The artist delete was unsuccessful. Try again.", "/artists");
        }
    };

    match ArtistService::delete(&state.db, id).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ActionResponse::succeeded("The artist was successfully deleted.", "/artists").with_id(id)),
        ),
        Err(err) => ApiError::from(err)
            .into_action("The artist delete was unsuccessful. Try again.", "/artists"),
    }
}
