use crate::{
    dtos::{
        artist::{ArtistDetailResponse, ArtistShowResponse, ArtistSummaryResponse},
        common::{ActionResponse, ErrorResponse, SearchForm},
        show::ShowResponse,
        venue::{VenueDetailResponse, VenueGroupResponse, VenueShowResponse},
    },
    routes::{artist, health, root, show, venue},
};
use models::{
    forms::{ArtistForm, ShowForm, VenueForm},
    search::{ListingEntry, SearchResults},
};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        venue::list_venues,
        venue::search_venues,
        venue::get_venue,
        venue::create_venue_form,
        venue::create_venue,
        venue::edit_venue_form,
        venue::edit_venue,
        venue::delete_venue,
        artist::list_artists,
        artist::search_artists,
        artist::get_artist,
        artist::create_artist_form,
        artist::create_artist,
        artist::edit_artist_form,
        artist::edit_artist,
        artist::delete_artist,
        show::list_shows,
        show::create_show_form,
        show::create_show
    ),
    components(schemas(
        ActionResponse,
        ErrorResponse,
        SearchForm,
        ListingEntry,
        SearchResults,
        VenueForm,
        ArtistForm,
        ShowForm,
        VenueGroupResponse,
        VenueShowResponse,
        VenueDetailResponse,
        ArtistSummaryResponse,
        ArtistShowResponse,
        ArtistDetailResponse,
        ShowResponse
    )),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Venues", description = "Venue listing, search and management"),
        (name = "Artists", description = "Artist listing, search and management"),
        (name = "Shows", description = "Show listing and booking"),
    ),
    info(
        title = "Fyyur API",
        version = "1.0.0",
        description = "Live music venue and artist booking API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
