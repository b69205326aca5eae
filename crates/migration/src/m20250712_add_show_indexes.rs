use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Index name and column pairs on the shows table
const SHOW_INDEXES: [(&str, Shows); 3] = [
    ("idx_shows_venue_id", Shows::VenueId),
    ("idx_shows_artist_id", Shows::ArtistId),
    ("idx_shows_start_time", Shows::StartTime),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Show lookups are always by venue or artist, then split on start time
        for (name, column) in SHOW_INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Shows::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        // Index on venues (city, state) for the grouped listing
        manager
            .create_index(
                Index::create()
                    .name("idx_venues_city_state")
                    .table(Venues::Table)
                    .col(Venues::City)
                    .col(Venues::State)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_venues_city_state")
                    .table(Venues::Table)
                    .to_owned(),
            )
            .await?;

        for (name, _) in SHOW_INDEXES {
            manager
                .drop_index(Index::drop().name(name).table(Shows::Table).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden, Clone, Copy)]
enum Shows {
    Table,
    VenueId,
    ArtistId,
    StartTime,
}

#[derive(Iden)]
enum Venues {
    Table,
    City,
    State,
}
