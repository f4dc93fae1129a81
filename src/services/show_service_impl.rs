//! `SeaORM` implementation of the `ShowService` trait.

use crate::db::{ShowInsert, ShowListingRow, Store};
use crate::domain::{ArtistId, VenueId};
use crate::models::{NewShow, ShowListing};
use crate::services::aggregator::broken_reference;
use crate::services::{BookingError, ShowService};

const ENTITY: &str = "Show";

pub struct SeaOrmShowService {
    store: Store,
}

impl SeaOrmShowService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    fn to_listing((show, artist, venue): ShowListingRow) -> Result<ShowListing, BookingError> {
        let artist = artist.ok_or_else(|| broken_reference(&show, "Artist", show.artist_id))?;
        let venue = venue.ok_or_else(|| broken_reference(&show, "Venue", show.venue_id))?;

        Ok(ShowListing {
            id: show.id,
            artist_id: ArtistId::new(artist.id),
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            venue_id: VenueId::new(venue.id),
            venue_name: venue.name,
            start_time: show.start_time,
        })
    }
}

#[async_trait::async_trait]
impl ShowService for SeaOrmShowService {
    async fn list_shows(&self) -> Result<Vec<ShowListing>, BookingError> {
        self.store
            .list_shows()
            .await
            .map_err(|e| BookingError::persistence(ENTITY, e))?
            .into_iter()
            .map(Self::to_listing)
            .collect()
    }

    async fn create_show(&self, show: NewShow) -> Result<ShowListing, BookingError> {
        let outcome = self
            .store
            .add_show(&show)
            .await
            .map_err(|e| BookingError::persistence(ENTITY, e))?;

        let created = match outcome {
            ShowInsert::Inserted(model) => model,
            ShowInsert::MissingVenue => {
                return Err(BookingError::not_found("Venue", show.venue_id.value()));
            }
            ShowInsert::MissingArtist => {
                return Err(BookingError::not_found("Artist", show.artist_id.value()));
            }
        };

        metrics::counter!("fyyur_records_created_total", "entity" => "show").increment(1);

        let venue = self
            .store
            .get_venue(created.venue_id)
            .await
            .map_err(|e| BookingError::persistence("Venue", e))?;
        let artist = self
            .store
            .get_artist(created.artist_id)
            .await
            .map_err(|e| BookingError::persistence("Artist", e))?;

        let venue = venue.ok_or_else(|| broken_reference(&created, "Venue", created.venue_id))?;
        let artist =
            artist.ok_or_else(|| broken_reference(&created, "Artist", created.artist_id))?;

        Ok(ShowListing {
            id: created.id,
            artist_id: artist.id,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            venue_id: venue.id,
            venue_name: venue.name,
            start_time: created.start_time,
        })
    }
}
