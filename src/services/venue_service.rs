//! Domain service for venues.

use crate::domain::VenueId;
use crate::models::{NewVenue, Venue, VenueDetail, VenuePatch};
use crate::services::BookingError;

/// Venue operations used by the request handlers and the CLI.
#[async_trait::async_trait]
pub trait VenueService: Send + Sync {
    /// Returns the stored venue, as used to prefill an edit form.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if no venue has this id.
    async fn get_venue(&self, id: VenueId) -> Result<Venue, BookingError>;

    /// Returns the venue with its shows split into past and upcoming.
    ///
    /// # Errors
    ///
    /// - [`BookingError::NotFound`] if no venue has this id
    /// - [`BookingError::ReferenceBroken`] if one of its shows points at a missing artist
    async fn get_venue_detail(&self, id: VenueId) -> Result<VenueDetail, BookingError>;

    /// Lists a new venue.
    ///
    /// # Errors
    ///
    /// - [`BookingError::Validation`] for blank required fields or bad genres
    /// - [`BookingError::AlreadyExists`] if a venue with the same name, state and address is listed
    /// - [`BookingError::Persistence`] if the insert fails; nothing is written
    async fn create_venue(&self, venue: NewVenue) -> Result<Venue, BookingError>;

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// - [`BookingError::NotFound`] if no venue has this id
    /// - [`BookingError::Persistence`] if the update fails; nothing is written
    async fn update_venue(&self, id: VenueId, patch: VenuePatch) -> Result<Venue, BookingError>;

    /// Deletes a venue together with its shows.
    ///
    /// # Errors
    ///
    /// - [`BookingError::NotFound`] if no venue has this id
    /// - [`BookingError::Persistence`] if the delete fails
    async fn delete_venue(&self, id: VenueId) -> Result<(), BookingError>;
}
