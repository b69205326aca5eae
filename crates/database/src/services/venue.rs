use crate::{
    entities::{show, venue},
    error::{Result, ServiceError},
    services::schedule::{ArtistAppearance, artists_by_id, partition_venue_shows},
};
use chrono::NaiveDateTime;
use log::{info, warn};
use models::{
    datetime::FormatStyle,
    forms::NewVenue,
    location::{CityGroup, group_by_location},
    schedule::{Partition, upcoming_counts},
    search::{ListingEntry, SearchResults, matches_name},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

/// A venue with its shows split into past and upcoming
#[derive(Debug, Clone)]
pub struct VenueDetail {
    pub venue: venue::Model,
    pub shows: Partition<ArtistAppearance>,
}

pub struct VenueService;

impl VenueService {
    const ENTITY: &'static str = "venue";

    /// All venues grouped by city and state, each with its upcoming show count
    pub async fn list_grouped(
        db: &DatabaseConnection,
        now: NaiveDateTime,
    ) -> Result<Vec<CityGroup<ListingEntry>>> {
        let venues = venue::Entity::find()
            .order_by_asc(venue::Column::Id)
            .all(db)
            .await?;

        let counts = upcoming_counts(Self::show_times(db, None).await?, now);

        let groups = group_by_location(venues, |v| (v.city.clone(), v.state.clone()))
            .into_iter()
            .map(|group| {
                group.map(|v| ListingEntry {
                    num_upcoming_shows: counts.get(&v.id).copied().unwrap_or(0),
                    id: v.id,
                    name: v.name,
                })
            })
            .collect();

        Ok(groups)
    }

    /// Case-insensitive partial match on venue names
    pub async fn search(
        db: &DatabaseConnection,
        query: &str,
        now: NaiveDateTime,
    ) -> Result<SearchResults> {
        let candidates = venue::Entity::find()
            .select_only()
            .column(venue::Column::Id)
            .column(venue::Column::Name)
            .order_by_asc(venue::Column::Id)
            .into_tuple::<(i32, String)>()
            .all(db)
            .await?;

        let matched: Vec<i32> = candidates
            .iter()
            .filter(|(_, name)| matches_name(name, query))
            .map(|(id, _)| *id)
            .collect();

        let counts = if matched.is_empty() {
            Default::default()
        } else {
            upcoming_counts(Self::show_times(db, Some(matched)).await?, now)
        };

        Ok(SearchResults::collect(candidates, query, |id| {
            counts.get(&id).copied().unwrap_or(0)
        }))
    }

    /// Fetches one venue
    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<venue::Model> {
        Self::find(db, id).await
    }

    /// Fetches one venue together with its past and upcoming shows
    pub async fn get_detail(
        db: &DatabaseConnection,
        id: i32,
        now: NaiveDateTime,
        style: FormatStyle,
    ) -> Result<VenueDetail> {
        // One transaction so the venue, its shows and their artists are read together
        let txn = db.begin().await?;

        let venue = Self::find(&txn, id).await?;
        let shows = show::Entity::find()
            .filter(show::Column::VenueId.eq(id))
            .order_by_asc(show::Column::StartTime)
            .order_by_asc(show::Column::Id)
            .all(&txn)
            .await?;
        let artists = artists_by_id(&txn, shows.iter().map(|s| s.artist_id)).await?;

        txn.commit().await?;

        let shows = partition_venue_shows(shows, &artists, now, style)?;
        Ok(VenueDetail { venue, shows })
    }

    pub async fn create(db: &DatabaseConnection, new_venue: NewVenue) -> Result<venue::Model> {
        let txn = db.begin().await?;
        let venue = venue::ActiveModel::from(new_venue).insert(&txn).await?;
        txn.commit().await?;

        info!("Created venue {} ({})", venue.id, venue.name);
        Ok(venue)
    }

    /// Replaces every mutable field of an existing venue
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        new_venue: NewVenue,
    ) -> Result<venue::Model> {
        let txn = db.begin().await?;
        Self::find(&txn, id).await?;

        let mut active = venue::ActiveModel::from(new_venue);
        active.id = Unchanged(id);
        let venue = active.update(&txn).await?;
        txn.commit().await?;

        info!("Updated venue {} ({})", venue.id, venue.name);
        Ok(venue)
    }

    /// Deletes a venue and every show booked there, returning the number of
    /// shows removed
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64> {
        let txn = db.begin().await?;
        let venue = Self::find(&txn, id).await?;

        let removed = show::Entity::delete_many()
            .filter(show::Column::VenueId.eq(id))
            .exec(&txn)
            .await?
            .rows_affected;
        let name = venue.name.clone();
        venue.delete(&txn).await?;
        txn.commit().await?;

        info!("Deleted venue {id} ({name}) and {removed} show(s)");
        Ok(removed)
    }

    async fn find<C: ConnectionTrait>(conn: &C, id: i32) -> Result<venue::Model> {
        venue::Entity::find_by_id(id)
            .one(conn)
            .await?
            .ok_or_else(|| {
                warn!("Venue {id} not found");
                ServiceError::NotFound {
                    entity: Self::ENTITY,
                    id,
                }
            })
    }

    /// `(venue_id, start_time)` for all shows, or only for the given venues
    async fn show_times(
        db: &DatabaseConnection,
        venue_ids: Option<Vec<i32>>,
    ) -> Result<Vec<(i32, NaiveDateTime)>> {
        let mut query = show::Entity::find()
            .select_only()
            .column(show::Column::VenueId)
            .column(show::Column::StartTime);

        if let Some(venue_ids) = venue_ids {
            query = query.filter(show::Column::VenueId.is_in(venue_ids));
        }

        Ok(query
            .into_tuple::<(i32, NaiveDateTime)>()
            .all(db)
            .await?)
    }
}
