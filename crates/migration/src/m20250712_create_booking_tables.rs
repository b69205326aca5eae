use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create venues table, every display column is required
        manager
            .create_table(
                Table::create()
                    .table(Venues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Venues::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Venues::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Venues::Genres).text().not_null())
                    .col(ColumnDef::new(Venues::Address).string_len(120).not_null())
                    .col(ColumnDef::new(Venues::City).string_len(120).not_null())
                    .col(ColumnDef::new(Venues::State).string_len(120).not_null())
                    .col(ColumnDef::new(Venues::Phone).string_len(120).not_null())
                    .col(ColumnDef::new(Venues::Website).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Venues::FacebookLink)
                            .string_len(120)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Venues::SeekingTalent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Venues::SeekingDescription)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Venues::ImageLink).string_len(500).not_null())
                    .to_owned(),
            )
            .await?;

        // Create artists table, display columns are nullable
        manager
            .create_table(
                Table::create()
                    .table(Artists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Artists::Name).string())
                    .col(
                        ColumnDef::new(Artists::Genres)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(ColumnDef::new(Artists::City).string_len(120))
                    .col(ColumnDef::new(Artists::State).string_len(120))
                    .col(ColumnDef::new(Artists::Phone).string_len(120))
                    .col(ColumnDef::new(Artists::Website).string_len(200))
                    .col(ColumnDef::new(Artists::FacebookLink).string_len(120))
                    .col(
                        ColumnDef::new(Artists::SeekingVenue)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Artists::SeekingDescription).string_len(300))
                    .col(ColumnDef::new(Artists::ImageLink).string_len(500))
                    .to_owned(),
            )
            .await?;

        // Create shows table, rows go away with their venue or artist
        manager
            .create_table(
                Table::create()
                    .table(Shows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Shows::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Shows::VenueId).integer().not_null())
                    .col(ColumnDef::new(Shows::ArtistId).integer().not_null())
                    .col(ColumnDef::new(Shows::StartTime).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-shows-venue_id")
                            .from(Shows::Table, Shows::VenueId)
                            .to(Venues::Table, Venues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-shows-artist_id")
                            .from(Shows::Table, Shows::ArtistId)
                            .to(Artists::Table, Artists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation to respect foreign key constraints
        manager
            .drop_table(Table::drop().table(Shows::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artists::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Venues::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Venues {
    Table,
    Id,
    Name,
    Genres,
    Address,
    City,
    State,
    Phone,
    Website,
    FacebookLink,
    SeekingTalent,
    SeekingDescription,
    ImageLink,
}

#[derive(Iden)]
enum Artists {
    Table,
    Id,
    Name,
    Genres,
    City,
    State,
    Phone,
    Website,
    FacebookLink,
    SeekingVenue,
    SeekingDescription,
    ImageLink,
}

#[derive(Iden)]
enum Shows {
    Table,
    Id,
    VenueId,
    ArtistId,
    StartTime,
}
