use crate::{
    entities::{artist, show, venue},
    error::{Result, ServiceError},
    services::schedule::{artists_by_id, venues_by_id},
};
use log::{error, info};
use models::{
    datetime::{FormatStyle, format_datetime},
    forms::NewShow,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ConnectionTrait, DatabaseConnection, EntityTrait,
    ModelTrait, QueryOrder, TransactionTrait,
};
use serde::Serialize;

/// A row of the show listing with both sides of the booking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowListing {
    pub show_id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: Option<String>,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

pub struct ShowService;

impl ShowService {
    const ENTITY: &'static str = "show";

    /// Every show ordered by start time
    pub async fn list(db: &DatabaseConnection, style: FormatStyle) -> Result<Vec<ShowListing>> {
        let txn = db.begin().await?;

        let shows = show::Entity::find()
            .order_by_asc(show::Column::StartTime)
            .order_by_asc(show::Column::Id)
            .all(&txn)
            .await?;
        let venues = venues_by_id(&txn, shows.iter().map(|s| s.venue_id)).await?;
        let artists = artists_by_id(&txn, shows.iter().map(|s| s.artist_id)).await?;

        txn.commit().await?;

        shows
            .into_iter()
            .map(|show| -> Result<ShowListing> {
                let venue = venues.get(&show.venue_id).ok_or_else(|| {
                    error!("Show {} references missing venue {}", show.id, show.venue_id);
                    ServiceError::DanglingReference {
                        show_id: show.id,
                        entity: "venue",
                        id: show.venue_id,
                    }
                })?;
                let artist = artists.get(&show.artist_id).ok_or_else(|| {
                    error!("Show {} references missing artist {}", show.id, show.artist_id);
                    ServiceError::DanglingReference {
                        show_id: show.id,
                        entity: "artist",
                        id: show.artist_id,
                    }
                })?;

                Ok(ShowListing {
                    show_id: show.id,
                    venue_id: venue.id,
                    venue_name: venue.name.clone(),
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: format_datetime(show.start_time, style),
                })
            })
            .collect()
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<show::Model> {
        Self::find(db, id).await
    }

    /// Books an artist at a venue; both must exist
    pub async fn create(db: &DatabaseConnection, new_show: NewShow) -> Result<show::Model> {
        let txn = db.begin().await?;
        Self::check_references(&txn, &new_show).await?;

        let show = show::ActiveModel::from(new_show).insert(&txn).await?;
        txn.commit().await?;

        info!(
            "Created show {} (artist {} at venue {}, {})",
            show.id, show.artist_id, show.venue_id, show.start_time
        );
        Ok(show)
    }

    /// Replaces the venue, artist and start time of an existing show
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        new_show: NewShow,
    ) -> Result<show::Model> {
        let txn = db.begin().await?;
        Self::find(&txn, id).await?;
        Self::check_references(&txn, &new_show).await?;

        let mut active = show::ActiveModel::from(new_show);
        active.id = Unchanged(id);
        let show = active.update(&txn).await?;
        txn.commit().await?;

        info!("Updated show {}", show.id);
        Ok(show)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<()> {
        let txn = db.begin().await?;
        let show = Self::find(&txn, id).await?;
        show.delete(&txn).await?;
        txn.commit().await?;

        info!("Deleted show {id}");
        Ok(())
    }

    async fn find<C: ConnectionTrait>(conn: &C, id: i32) -> Result<show::Model> {
        show::Entity::find_by_id(id)
            .one(conn)
            .await?
            .ok_or(ServiceError::NotFound {
                entity: Self::ENTITY,
                id,
            })
    }

    async fn check_references<C: ConnectionTrait>(conn: &C, new_show: &NewShow) -> Result<()> {
        if venue::Entity::find_by_id(new_show.venue_id)
            .one(conn)
            .await?
            .is_none()
        {
            return Err(ServiceError::MissingReference {
                entity: "venue",
                id: new_show.venue_id,
            });
        }

        if artist::Entity::find_by_id(new_show.artist_id)
            .one(conn)
            .await?
            .is_none()
        {
            return Err(ServiceError::MissingReference {
                entity: "artist",
                id: new_show.artist_id,
            });
        }

        Ok(())
    }
}
