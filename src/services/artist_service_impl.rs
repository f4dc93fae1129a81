//! `SeaORM` implementation of the `ArtistService` trait.

use chrono::Utc;

use crate::db::{InsertOutcome, Store};
use crate::domain::ArtistId;
use crate::models::{Artist, ArtistDetail, ArtistPatch, NewArtist};
use crate::services::aggregator;
use crate::services::validation::{require_text, storable_genres};
use crate::services::{ArtistService, BookingError};

const ENTITY: &str = "Artist";

pub struct SeaOrmArtistService {
    store: Store,
}

impl SeaOrmArtistService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    fn validate_new(artist: &NewArtist) -> Result<(), BookingError> {
        require_text("Artist name", &artist.name)?;
        require_text("City", &artist.city)?;
        require_text("State", &artist.state)?;
        storable_genres(&artist.genres)
    }

    fn validate_patch(patch: &ArtistPatch) -> Result<(), BookingError> {
        if let Some(name) = &patch.name {
            require_text("Artist name", name)?;
        }
        if let Some(city) = &patch.city {
            require_text("City", city)?;
        }
        if let Some(state) = &patch.state {
            require_text("State", state)?;
        }
        if let Some(genres) = &patch.genres {
            storable_genres(genres)?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ArtistService for SeaOrmArtistService {
    async fn get_artist(&self, id: ArtistId) -> Result<Artist, BookingError> {
        self.store
            .get_artist(id.value())
            .await
            .map_err(|e| BookingError::persistence(ENTITY, e))?
            .ok_or_else(|| BookingError::not_found(ENTITY, id.value()))
    }

    async fn get_artist_detail(&self, id: ArtistId) -> Result<ArtistDetail, BookingError> {
        let artist = self.get_artist(id).await?;

        let rows = self
            .store
            .get_shows_for_artist(id.value())
            .await
            .map_err(|e| BookingError::persistence("Show", e))?;

        let shows = aggregator::artist_shows(rows, Utc::now())?;

        Ok(ArtistDetail { artist, shows })
    }

    async fn create_artist(&self, artist: NewArtist) -> Result<Artist, BookingError> {
        Self::validate_new(&artist)?;

        let outcome = self
            .store
            .add_artist(&artist)
            .await
            .map_err(|e| BookingError::persistence(ENTITY, e))?;

        match outcome {
            InsertOutcome::Inserted(created) => {
                metrics::counter!("fyyur_records_created_total", "entity" => "artist")
                    .increment(1);
                Ok(created)
            }
            InsertOutcome::Duplicate => Err(BookingError::already_exists(ENTITY, artist.name)),
        }
    }

    async fn update_artist(
        &self,
        id: ArtistId,
        patch: ArtistPatch,
    ) -> Result<Artist, BookingError> {
        Self::validate_patch(&patch)?;

        self.store
            .update_artist(id.value(), patch)
            .await
            .map_err(|e| BookingError::persistence(ENTITY, e))?
            .ok_or_else(|| BookingError::not_found(ENTITY, id.value()))
    }
}
