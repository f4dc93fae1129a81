//! Venue/artist listings and name search.

use chrono::Utc;
use std::collections::HashMap;

use crate::db::{Store, VenueLocationRow};
use crate::domain::{ArtistId, VenueId};
use crate::models::{ArtistSummary, SearchHit, SearchResults, VenueArea, VenueSummary};
use crate::services::BookingError;
use crate::services::aggregator::count_upcoming;

pub struct ListingService {
    store: Store,
}

impl ListingService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Venues grouped by distinct (city, state), in the order each location
    /// first appears in the store.
    pub async fn list_venues_grouped_by_location(&self) -> Result<Vec<VenueArea>, BookingError> {
        let rows = self
            .store
            .list_venue_locations()
            .await
            .map_err(|e| BookingError::persistence("Venue", e))?;

        Ok(group_by_location(rows))
    }

    pub async fn list_artists(&self) -> Result<Vec<ArtistSummary>, BookingError> {
        let rows = self
            .store
            .list_artist_names()
            .await
            .map_err(|e| BookingError::persistence("Artist", e))?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| ArtistSummary {
                id: ArtistId::new(id),
                name,
            })
            .collect())
    }

    /// Venues whose name contains `term`, ignoring case. An empty term matches all.
    pub async fn search_venues(&self, term: &str) -> Result<SearchResults<VenueId>, BookingError> {
        let matches = self
            .store
            .search_venues(term)
            .await
            .map_err(|e| BookingError::persistence("Venue", e))?;

        let ids: Vec<i32> = matches.iter().map(|(id, _)| *id).collect();
        let show_times = self
            .store
            .get_show_times_for_venues(&ids)
            .await
            .map_err(|e| BookingError::persistence("Show", e))?;

        Ok(build_results(matches, show_times, VenueId::new))
    }

    /// Artists whose name contains `term`, ignoring case. An empty term matches all.
    pub async fn search_artists(
        &self,
        term: &str,
    ) -> Result<SearchResults<ArtistId>, BookingError> {
        let matches = self
            .store
            .search_artists(term)
            .await
            .map_err(|e| BookingError::persistence("Artist", e))?;

        let ids: Vec<i32> = matches.iter().map(|(id, _)| *id).collect();
        let show_times = self
            .store
            .get_show_times_for_artists(&ids)
            .await
            .map_err(|e| BookingError::persistence("Show", e))?;

        Ok(build_results(matches, show_times, ArtistId::new))
    }
}

fn build_results<Id>(
    matches: Vec<(i32, String)>,
    mut show_times: HashMap<i32, Vec<chrono::DateTime<Utc>>>,
    make_id: fn(i32) -> Id,
) -> SearchResults<Id> {
    let now = Utc::now();

    let hits = matches
        .into_iter()
        .map(|(id, name)| SearchHit {
            id: make_id(id),
            name,
            upcoming_show_count: count_upcoming(show_times.remove(&id).unwrap_or_default(), now),
        })
        .collect();

    SearchResults::new(hits)
}

/// Groups `(id, name, city, state)` rows by location, preserving first
/// appearance order of locations and store order within each group.
#[must_use]
pub fn group_by_location(rows: Vec<VenueLocationRow>) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for (id, name, city, state) in rows {
        let venue = VenueSummary {
            id: VenueId::new(id),
            name,
        };

        match index.get(&(city.clone(), state.clone())) {
            Some(&position) => areas[position].venues.push(venue),
            None => {
                index.insert((city.clone(), state.clone()), areas.len());
                areas.push(VenueArea {
                    city,
                    state,
                    venues: vec![venue],
                });
            }
        }
    }

    areas
}
