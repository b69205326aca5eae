use database::services::show::ShowListing;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ShowResponse {
    pub show_id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: Option<String>,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowListing> for ShowResponse {
    fn from(show: ShowListing) -> Self {
        Self {
            show_id: show.show_id,
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: show.start_time,
        }
    }
}
