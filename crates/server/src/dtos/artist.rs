use database::services::{
    artist::{ArtistDetail, ArtistSummary},
    schedule::VenueAppearance,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtistSummaryResponse {
    pub id: i32,
    pub name: String,
}

impl From<ArtistSummary> for ArtistSummaryResponse {
    fn from(artist: ArtistSummary) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
        }
    }
}

/// A show on an artist page
#[derive(Debug, Serialize, ToSchema)]
pub struct ArtistShowResponse {
    pub show_id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: String,
}

impl From<VenueAppearance> for ArtistShowResponse {
    fn from(show: VenueAppearance) -> Self {
        Self {
            show_id: show.show_id,
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            venue_image_link: show.venue_image_link,
            start_time: show.start_time,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtistDetailResponse {
    pub id: i32,
    pub name: Option<String>,
    pub genres: Vec<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShowResponse>,
    pub upcoming_shows: Vec<ArtistShowResponse>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl From<ArtistDetail> for ArtistDetailResponse {
    fn from(detail: ArtistDetail) -> Self {
        let ArtistDetail { artist, shows } = detail;
        let past_shows_count = shows.past_count();
        let upcoming_shows_count = shows.upcoming_count();

        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres.into_vec(),
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website: artist.website,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            image_link: artist.image_link,
            past_shows: shows.past.into_iter().map(Into::into).collect(),
            upcoming_shows: shows.upcoming.into_iter().map(Into::into).collect(),
            past_shows_count,
            upcoming_shows_count,
        }
    }
}
