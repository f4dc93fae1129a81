//! `SeaORM` implementation of the `VenueService` trait.

use chrono::Utc;

use crate::db::{InsertOutcome, Store};
use crate::domain::VenueId;
use crate::models::{NewVenue, Venue, VenueDetail, VenuePatch};
use crate::services::aggregator;
use crate::services::validation::{require_text, storable_genres};
use crate::services::{BookingError, VenueService};

const ENTITY: &str = "Venue";

pub struct SeaOrmVenueService {
    store: Store,
}

impl SeaOrmVenueService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    fn validate_new(venue: &NewVenue) -> Result<(), BookingError> {
        require_text("Venue name", &venue.name)?;
        require_text("City", &venue.city)?;
        require_text("State", &venue.state)?;
        storable_genres(&venue.genres)
    }

    fn validate_patch(patch: &VenuePatch) -> Result<(), BookingError> {
        if let Some(name) = &patch.name {
            require_text("Venue name", name)?;
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
impl VenueService for SeaOrmVenueService {
    async fn get_venue(&self, id: VenueId) -> Result<Venue, BookingError> {
        self.store
            .get_venue(id.value())
            .await
            .map_err(|e| BookingError::persistence(ENTITY, e))?
            .ok_or_else(|| BookingError::not_found(ENTITY, id.value()))
    }

    async fn get_venue_detail(&self, id: VenueId) -> Result<VenueDetail, BookingError> {
        let venue = self.get_venue(id).await?;

        let rows = self
            .store
            .get_shows_for_venue(id.value())
            .await
            .map_err(|e| BookingError::persistence("Show", e))?;

        let shows = aggregator::venue_shows(rows, Utc::now())?;

        Ok(VenueDetail { venue, shows })
    }

    async fn create_venue(&self, venue: NewVenue) -> Result<Venue, BookingError> {
        Self::validate_new(&venue)?;

        let outcome = self
            .store
            .add_venue(&venue)
            .await
            .map_err(|e| BookingError::persistence(ENTITY, e))?;

        match outcome {
            InsertOutcome::Inserted(created) => {
                metrics::counter!("fyyur_records_created_total", "entity" => "venue").increment(1);
                Ok(created)
            }
            InsertOutcome::Duplicate => Err(BookingError::already_exists(ENTITY, venue.name)),
        }
    }

    async fn update_venue(&self, id: VenueId, patch: VenuePatch) -> Result<Venue, BookingError> {
        Self::validate_patch(&patch)?;

        self.store
            .update_venue(id.value(), patch)
            .await
            .map_err(|e| BookingError::persistence(ENTITY, e))?
            .ok_or_else(|| BookingError::not_found(ENTITY, id.value()))
    }

    async fn delete_venue(&self, id: VenueId) -> Result<(), BookingError> {
        let removed = self
            .store
            .remove_venue(id.value())
            .await
            .map_err(|e| BookingError::persistence(ENTITY, e))?;

        if removed {
            Ok(())
        } else {
            Err(BookingError::not_found(ENTITY, id.value()))
        }
    }
}
