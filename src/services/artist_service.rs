//! Domain service for artists.

use crate::domain::ArtistId;
use crate::models::{Artist, ArtistDetail, ArtistPatch, NewArtist};
use crate::services::BookingError;

#[async_trait::async_trait]
pub trait ArtistService: Send + Sync {
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if no artist has this id.
    async fn get_artist(&self, id: ArtistId) -> Result<Artist, BookingError>;

    /// Returns the artist with their shows split into past and upcoming.
    ///
    /// # Errors
    ///
    /// - [`BookingError::NotFound`] if no artist has this id
    /// - [`BookingError::ReferenceBroken`] if one of their shows points at a missing venue
    async fn get_artist_detail(&self, id: ArtistId) -> Result<ArtistDetail, BookingError>;

    /// # Errors
    ///
    /// - [`BookingError::Validation`] for blank required fields or bad genres
    /// - [`BookingError::AlreadyExists`] if an artist with the same name, city and state is listed
    /// - [`BookingError::Persistence`] if the insert fails
    async fn create_artist(&self, artist: NewArtist) -> Result<Artist, BookingError>;

    /// # Errors
    ///
    /// - [`BookingError::NotFound`] if no artist has this id
    /// - [`BookingError::Persistence`] if the update fails
    async fn update_artist(&self, id: ArtistId, patch: ArtistPatch)
    -> Result<Artist, BookingError>;
}
