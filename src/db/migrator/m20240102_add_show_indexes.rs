use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_shows_venue_id")
                    .table(Shows::Table)
                    .col(Shows::VenueId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shows_artist_id")
                    .table(Shows::Table)
                    .col(Shows::ArtistId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Listing groups venues by location.
        manager
            .create_index(
                Index::create()
                    .name("idx_venues_city_state")
                    .table(Venues::Table)
                    .col(Venues::City)
                    .col(Venues::State)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_venues_city_state").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_shows_artist_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_shows_venue_id").to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Shows {
    Table,
    VenueId,
    ArtistId,
}

#[derive(DeriveIden)]
enum Venues {
    Table,
    City,
    State,
}
