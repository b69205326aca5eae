use crate::{
    entities::{artist, show, venue},
    error::{Result, ServiceError},
};
use chrono::NaiveDateTime;
use models::{
    datetime::{FormatStyle, format_datetime},
    schedule::Partition,
};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// A show on a venue page, described by its artist
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistAppearance {
    pub show_id: i32,
    pub artist_id: i32,
    pub artist_name: Option<String>,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// A show on an artist page, described by its venue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueAppearance {
    pub show_id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: String,
}

/// Splits one venue's shows and attaches the performing artist to each
pub fn partition_venue_shows(
    shows: Vec<show::Model>,
    artists: &HashMap<i32, artist::Model>,
    now: NaiveDateTime,
    style: FormatStyle,
) -> Result<Partition<ArtistAppearance>> {
    Partition::split(shows, |show| show.start_time, now).try_map(|show| {
        let artist = artists
            .get(&show.artist_id)
            .ok_or(ServiceError::DanglingReference {
                show_id: show.id,
                entity: "artist",
                id: show.artist_id,
            })?;

        Ok(ArtistAppearance {
            show_id: show.id,
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: format_datetime(show.start_time, style),
        })
    })
}

/// Splits one artist's shows and attaches the hosting venue to each
pub fn partition_artist_shows(
    shows: Vec<show::Model>,
    venues: &HashMap<i32, venue::Model>,
    now: NaiveDateTime,
    style: FormatStyle,
) -> Result<Partition<VenueAppearance>> {
    Partition::split(shows, |show| show.start_time, now).try_map(|show| {
        let venue = venues
            .get(&show.venue_id)
            .ok_or(ServiceError::DanglingReference {
                show_id: show.id,
                entity: "venue",
                id: show.venue_id,
            })?;

        Ok(VenueAppearance {
            show_id: show.id,
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            venue_image_link: venue.image_link.clone(),
            start_time: format_datetime(show.start_time, style),
        })
    })
}

/// Fetches the artists with the given ids, keyed by id
pub(crate) async fn artists_by_id<C, I>(
    conn: &C,
    ids: I,
) -> std::result::Result<HashMap<i32, artist::Model>, DbErr>
where
    C: ConnectionTrait,
    I: IntoIterator<Item = i32>,
{
    let ids: BTreeSet<i32> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let artists = artist::Entity::find()
        .filter(artist::Column::Id.is_in(ids))
        .all(conn)
        .await?;

    Ok(artists.into_iter().map(|a| (a.id, a)).collect())
}

/// Fetches the venues with the given ids, keyed by id
pub(crate) async fn venues_by_id<C, I>(
    conn: &C,
    ids: I,
) -> std::result::Result<HashMap<i32, venue::Model>, DbErr>
where
    C: ConnectionTrait,
    I: IntoIterator<Item = i32>,
{
    let ids: BTreeSet<i32> = ids.into_iter().collect();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let venues = venue::Entity::find()
        .filter(venue::Column::Id.is_in(ids))
        .all(conn)
        .await?;

    Ok(venues.into_iter().map(|v| (v.id, v)).collect())
}
