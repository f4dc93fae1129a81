use anyhow::Result;
use chrono::{DateTime, Utc};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::entities::{artists, shows, venues};
use crate::models::{Artist, ArtistPatch, NewArtist, NewShow, NewVenue, Venue, VenuePatch};

pub mod migrator;
pub mod repositories;

pub use repositories::InsertOutcome;
pub use repositories::show::{ShowInsert, ShowListingRow};
pub use repositories::venue::VenueLocationRow;

/// Handle to the booking database.
///
/// Cloning is cheap; every clone shares one connection pool. Reads run on
/// the pool directly, writes open their own transaction.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:").trim_start_matches("//");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn venue_repo(&self) -> repositories::venue::VenueRepository {
        repositories::venue::VenueRepository::new(self.conn.clone())
    }

    fn artist_repo(&self) -> repositories::artist::ArtistRepository {
        repositories::artist::ArtistRepository::new(self.conn.clone())
    }

    fn show_repo(&self) -> repositories::show::ShowRepository {
        repositories::show::ShowRepository::new(self.conn.clone())
    }

    // Venues

    pub async fn get_venue(&self, id: i32) -> Result<Option<Venue>> {
        self.venue_repo().get(id).await
    }

    pub async fn list_venues(&self) -> Result<Vec<Venue>> {
        self.venue_repo().list_all().await
    }

    pub async fn list_venue_locations(&self) -> Result<Vec<VenueLocationRow>> {
        self.venue_repo().list_locations().await
    }

    pub async fn find_venue_by_identity(
        &self,
        name: &str,
        state: &str,
        address: Option<&str>,
    ) -> Result<Option<Venue>> {
        self.venue_repo()
            .find_by_identity(name, state, address)
            .await
    }

    pub async fn search_venues(&self, term: &str) -> Result<Vec<(i32, String)>> {
        self.venue_repo().search_by_name(term).await
    }

    pub async fn add_venue(&self, venue: &NewVenue) -> Result<InsertOutcome<Venue>> {
        self.venue_repo().add_if_absent(venue).await
    }

    pub async fn update_venue(&self, id: i32, patch: VenuePatch) -> Result<Option<Venue>> {
        self.venue_repo().update(id, patch).await
    }

    pub async fn remove_venue(&self, id: i32) -> Result<bool> {
        self.venue_repo().remove(id).await
    }

    // Artists

    pub async fn get_artist(&self, id: i32) -> Result<Option<Artist>> {
        self.artist_repo().get(id).await
    }

    pub async fn list_artists(&self) -> Result<Vec<Artist>> {
        self.artist_repo().list_all().await
    }

    pub async fn list_artist_names(&self) -> Result<Vec<(i32, String)>> {
        self.artist_repo().list_names().await
    }

    pub async fn find_artist_by_identity(
        &self,
        name: &str,
        city: &str,
        state: &str,
    ) -> Result<Option<Artist>> {
        self.artist_repo().find_by_identity(name, city, state).await
    }

    pub async fn search_artists(&self, term: &str) -> Result<Vec<(i32, String)>> {
        self.artist_repo().search_by_name(term).await
    }

    pub async fn add_artist(&self, artist: &NewArtist) -> Result<InsertOutcome<Artist>> {
        self.artist_repo().add_if_absent(artist).await
    }

    pub async fn update_artist(&self, id: i32, patch: ArtistPatch) -> Result<Option<Artist>> {
        self.artist_repo().update(id, patch).await
    }

    // Shows

    pub async fn get_shows_for_venue(
        &self,
        venue_id: i32,
    ) -> Result<Vec<(shows::Model, Option<artists::Model>)>> {
        self.show_repo().for_venue(venue_id).await
    }

    pub async fn get_shows_for_artist(
        &self,
        artist_id: i32,
    ) -> Result<Vec<(shows::Model, Option<venues::Model>)>> {
        self.show_repo().for_artist(artist_id).await
    }

    pub async fn get_show_times_for_venues(
        &self,
        venue_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<DateTime<Utc>>>> {
        self.show_repo().start_times_for_venues(venue_ids).await
    }

    pub async fn get_show_times_for_artists(
        &self,
        artist_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<DateTime<Utc>>>> {
        self.show_repo().start_times_for_artists(artist_ids).await
    }

    pub async fn list_shows(&self) -> Result<Vec<ShowListingRow>> {
        self.show_repo().list_all().await
    }

    pub async fn add_show(&self, show: &NewShow) -> Result<ShowInsert> {
        self.show_repo().add(show).await
    }
}
