pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod utils;

use axum::{
    Router,
    routing::{get, post},
};
use doc::ApiDoc;
use routes::{artist, health, root, show, venue};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/venues", get(venue::list_venues))
        .route("/venues/search", post(venue::search_venues))
        .route(
            "/venues/create",
            get(venue::create_venue_form).post(venue::create_venue),
        )
        .route(
            "/venues/{id}",
            get(venue::get_venue).delete(venue::delete_venue),
        )
        .route(
            "/venues/{id}/edit",
            get(venue::edit_venue_form).post(venue::edit_venue),
        )
        .route("/artists", get(artist::list_artists))
        .route("/artists/search", post(artist::search_artists))
        .route(
            "/artists/create",
            get(artist::create_artist_form).post(artist::create_artist),
        )
        .route(
            "/artists/{id}",
            get(artist::get_artist).delete(artist::delete_artist),
        )
        .route(
            "/artists/{id}/edit",
            get(artist::edit_artist_form).post(artist::edit_artist),
        )
        .route("/shows", get(show::list_shows))
        .route(
            "/shows/create",
            get(show::create_show_form).post(show::create_show),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(root::not_found)
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
