use database::services::{schedule::ArtistAppearance, venue::VenueDetail};
use models::{location::CityGroup, search::ListingEntry};
use serde::Serialize;
use utoipa::ToSchema;

/// Venues sharing a city and state
#[derive(Debug, Serialize, ToSchema)]
pub struct VenueGroupResponse {
    pub city: String,
    pub state: String,
    pub venues: Vec<ListingEntry>,
}

impl From<CityGroup<ListingEntry>> for VenueGroupResponse {
    fn from(group: CityGroup<ListingEntry>) -> Self {
        Self {
            city: group.city,
            state: group.state,
            venues: group.venues,
        }
    }
}

/// A show on a venue page
#[derive(Debug, Serialize, ToSchema)]
pub struct VenueShowResponse {
    pub show_id: i32,
    pub artist_id: i32,
    pub artist_name: Option<String>,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<ArtistAppearance> for VenueShowResponse {
    fn from(show: ArtistAppearance) -> Self {
        Self {
            show_id: show.show_id,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: show.start_time,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VenueDetailResponse {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub image_link: String,
    pub past_shows: Vec<VenueShowResponse>,
    pub upcoming_shows: Vec<VenueShowResponse>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl From<VenueDetail> for VenueDetailResponse {
    fn from(detail: VenueDetail) -> Self {
        let VenueDetail { venue, shows } = detail;
        let past_shows_count = shows.past_count();
        let upcoming_shows_count = shows.upcoming_count();

        Self {
            id: venue.id,
            name: venue.name,
            genres: venue.genres.into_vec(),
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            website: venue.website,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
            past_shows: shows.past.into_iter().map(Into::into).collect(),
            upcoming_shows: shows.upcoming.into_iter().map(Into::into).collect(),
            past_shows_count,
            upcoming_shows_count,
        }
    }
}
