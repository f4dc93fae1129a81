//! Domain service for shows.

use crate::models::{NewShow, ShowListing};
use crate::services::BookingError;

#[async_trait::async_trait]
pub trait ShowService: Send + Sync {
    /// Lists every show with the display fields of both parties, earliest first.
    ///
    /// # Errors
    ///
    /// - [`BookingError::ReferenceBroken`] if a show points at a missing venue or artist
    /// - [`BookingError::Persistence`] on store failures
    async fn list_shows(&self) -> Result<Vec<ShowListing>, BookingError>;

    /// Books an artist at a venue.
    ///
    /// # Errors
    ///
    /// - [`BookingError::NotFound`] if the venue or the artist does not exist
    /// - [`BookingError::Persistence`] if the insert fails
    async fn create_show(&self, show: NewShow) -> Result<ShowListing, BookingError>;
}
