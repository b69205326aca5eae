use crate::{
    entities::{artist, show},
    error::{Result, ServiceError},
    services::schedule::{VenueAppearance, partition_artist_shows, venues_by_id},
};
use chrono::NaiveDateTime;
use log::{info, warn};
use models::{
    datetime::FormatStyle,
    forms::NewArtist,
    schedule::{Partition, upcoming_counts},
    search::{SearchResults, matches_name},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use serde::Serialize;

/// An artist with its shows split into past and upcoming
#[derive(Debug, Clone)]
pub struct ArtistDetail {
    pub artist: artist::Model,
    pub shows: Partition<VenueAppearance>,
}

/// Row of the artist listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
}

pub struct ArtistService;

impl ArtistService {
    const ENTITY: &'static str = "artist";

    /// Every artist's id and name, ordered by id
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<ArtistSummary>> {
        let artists = Self::names(db).await?;

        Ok(artists
            .into_iter()
            .map(|(id, name)| ArtistSummary { id, name })
            .collect())
    }

    /// Case-insensitive partial match on artist names
    pub async fn search(
        db: &DatabaseConnection,
        query: &str,
        now: NaiveDateTime,
    ) -> Result<SearchResults> {
        let candidates = Self::names(db).await?;

        let matched: Vec<i32> = candidates
            .iter()
            .filter(|(_, name)| matches_name(name, query))
            .map(|(id, _)| *id)
            .collect();

        let counts = if matched.is_empty() {
            Default::default()
        } else {
            let shows = show::Entity::find()
                .select_only()
                .column(show::Column::ArtistId)
                .column(show::Column::StartTime)
                .filter(show::Column::ArtistId.is_in(matched))
                .into_tuple::<(i32, NaiveDateTime)>()
                .all(db)
                .await?;
            upcoming_counts(shows, now)
        };

        Ok(SearchResults::collect(candidates, query, |id| {
            counts.get(&id).copied().unwrap_or(0)
        }))
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<artist::Model> {
        Self::find(db, id).await
    }

    /// Fetches one artist together with its past and upcoming shows
    pub async fn get_detail(
        db: &DatabaseConnection,
        id: i32,
        now: NaiveDateTime,
        style: FormatStyle,
    ) -> Result<ArtistDetail> {
        let txn = db.begin().await?;

        let artist = Self::find(&txn, id).await?;
        let shows = show::Entity::find()
            .filter(show::Column::ArtistId.eq(id))
            .order_by_asc(show::Column::StartTime)
            .order_by_asc(show::Column::Id)
            .all(&txn)
            .await?;
        let venues = venues_by_id(&txn, shows.iter().map(|s| s.venue_id)).await?;

        txn.commit().await?;

        let shows = partition_artist_shows(shows, &venues, now, style)?;
        Ok(ArtistDetail { artist, shows })
    }

    pub async fn create(db: &DatabaseConnection, new_artist: NewArtist) -> Result<artist::Model> {
        let txn = db.begin().await?;
        let artist = artist::ActiveModel::from(new_artist).insert(&txn).await?;
        txn.commit().await?;

        info!("Created artist {} ({})", artist.id, artist.display_name());
        Ok(artist)
    }

    /// Replaces every mutable field of an existing artist
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        new_artist: NewArtist,
    ) -> Result<artist::Model> {
        let txn = db.begin().await?;
        Self::find(&txn, id).await?;

        let mut active = artist::ActiveModel::from(new_artist);
        active.id = Unchanged(id);
        let artist = active.update(&txn).await?;
        txn.commit().await?;

        info!("Updated artist {} ({})", artist.id, artist.display_name());
        Ok(artist)
    }

    /// Deletes an artist and every show they were booked for
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64> {
        let txn = db.begin().await?;
        let artist = Self::find(&txn, id).await?;

        let removed = show::Entity::delete_many()
            .filter(show::Column::ArtistId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;
        artist.delete(&txn).await?;
        txn.commit().await?;

        info!("Deleted artist {id} and {removed} show(s)");
        Ok(removed)
    }

    async fn find<C: ConnectionTrait>(conn: &C, id: i32) -> Result<artist::Model> {
        artist::Entity::find_by_id(id)
            .one(conn)
            .await?
            .ok_or_else(|| {
                warn!("Artist {id} not found");
                ServiceError::NotFound {
                    entity: Self::ENTITY,
                    id,
                }
            })
    }

    /// Unnamed artists are listed with a blank name
    async fn names(db: &DatabaseConnection) -> Result<Vec<(i32, String)>> {
        let rows = artist::Entity::find()
            .select_only()
            .column(artist::Column::Id)
            .column(artist::Column::Name)
            .order_by_asc(artist::Column::Id)
            .into_tuple::<(i32, Option<String>)>()
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| (id, name.unwrap_or_default()))
            .collect())
    }
}
