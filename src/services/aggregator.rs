//! Past/upcoming classification of a venue's or artist's shows.
//!
//! The split itself is [`ShowTiming::classify`]; this module applies it to
//! joined show rows, attaches the counterpart's display fields and derives
//! the counts from the resulting sequences.

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::warn;

use crate::domain::{ArtistId, ShowTiming, VenueId};
use crate::entities::{artists, shows, venues};
use crate::models::{ArtistAppearance, VenueAppearance};
use crate::services::BookingError;

/// Shows partitioned around a single instant.
///
/// Counts are read from the sequence lengths and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowAggregate<T> {
    past: Vec<T>,
    upcoming: Vec<T>,
}

impl<T> Default for ShowAggregate<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}

impl<T> ShowAggregate<T> {
    /// Splits `items` around `now`, keeping their relative order.
    pub fn partition<I, F>(items: I, now: DateTime<Utc>, start_time: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> DateTime<Utc>,
    {
        let mut aggregate = Self::default();
        for item in items {
            match ShowTiming::classify(start_time(&item), now) {
                ShowTiming::Past => aggregate.past.push(item),
                ShowTiming::Upcoming => aggregate.upcoming.push(item),
            }
        }
        aggregate
    }

    #[must_use]
    pub fn past(&self) -> &[T] {
        &self.past
    }

    #[must_use]
    pub fn upcoming(&self) -> &[T] {
        &self.upcoming
    }

    #[must_use]
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    #[must_use]
    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

impl<T: Serialize> Serialize for ShowAggregate<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ShowAggregate", 4)?;
        state.serialize_field("past_shows", &self.past)?;
        state.serialize_field("upcoming_shows", &self.upcoming)?;
        state.serialize_field("past_shows_count", &self.past_count())?;
        state.serialize_field("upcoming_shows_count", &self.upcoming_count())?;
        state.end()
    }
}

/// Number of upcoming shows among `start_times`, using the same split as
/// [`ShowAggregate::partition`].
pub fn count_upcoming<I>(start_times: I, now: DateTime<Utc>) -> usize
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    start_times
        .into_iter()
        .filter(|start| ShowTiming::classify(*start, now).is_upcoming())
        .count()
}

/// Builds a venue's show aggregate from its shows joined with their artists.
///
/// Fails with [`BookingError::ReferenceBroken`] if any show's artist is gone.
pub fn venue_shows(
    rows: Vec<(shows::Model, Option<artists::Model>)>,
    now: DateTime<Utc>,
) -> Result<ShowAggregate<ArtistAppearance>, BookingError> {
    let appearances = rows
        .into_iter()
        .map(|(show, artist)| -> Result<ArtistAppearance, BookingError> {
            let artist = artist.ok_or_else(|| broken_reference(&show, "Artist", show.artist_id))?;
            Ok(ArtistAppearance {
                artist_id: ArtistId::new(artist.id),
                artist_name: artist.name,
                artist_image_link: artist.image_link,
                start_time: show.start_time,
            })
        })
        .collect::<Result<Vec<_>, BookingError>>()?;

    Ok(ShowAggregate::partition(appearances, now, |a| a.start_time))
}

/// Builds an artist's show aggregate from their shows joined with venues.
pub fn artist_shows(
    rows: Vec<(shows::Model, Option<venues::Model>)>,
    now: DateTime<Utc>,
) -> Result<ShowAggregate<VenueAppearance>, BookingError> {
    let appearances = rows
        .into_iter()
        .map(|(show, venue)| -> Result<VenueAppearance, BookingError> {
            let venue = venue.ok_or_else(|| broken_reference(&show, "Venue", show.venue_id))?;
            Ok(VenueAppearance {
                venue_id: VenueId::new(venue.id),
                venue_name: venue.name,
                venue_image_link: venue.image_link,
                start_time: show.start_time,
            })
        })
        .collect::<Result<Vec<_>, BookingError>>()?;

    Ok(ShowAggregate::partition(appearances, now, |a| a.start_time))
}

pub(crate) fn broken_reference(show: &shows::Model, entity: &'static str, id: i32) -> BookingError {
    warn!(show_id = show.id, entity, id, "Show references a missing record");
    BookingError::ReferenceBroken {
        show_id: show.id,
        entity,
        id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 19, 30, 0).unwrap()
    }

    fn show(id: i32, start_time: DateTime<Utc>, venue_id: i32, artist_id: i32) -> shows::Model {
        shows::Model {
            id,
            start_time,
            venue_id,
            artist_id,
        }
    }

    fn artist(id: i32, name: &str) -> artists::Model {
        artists::Model {
            id,
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            genres: "Rock n Roll".to_string(),
            facebook_link: None,
            image_link: Some(format!("https://images.example/{id}.jpg")),
            website: None,
            seeking_venue: false,
            seeking_description: None,
        }
    }

    fn venue(id: i32, name: &str) -> venues::Model {
        venues::Model {
            id,
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: Some("1015 Folsom Street".to_string()),
            phone: None,
            genres: String::new(),
            image_link: None,
            facebook_link: None,
            website: None,
            seeking_talent: true,
            seeking_description: None,
        }
    }

    #[test]
    fn partition_keeps_order_and_ties_go_upcoming() {
        let starts = [
            now() - Duration::days(30),
            now(),
            now() - Duration::minutes(1),
            now() + Duration::days(2),
        ];

        let aggregate = ShowAggregate::partition(starts, now(), |s| *s);

        assert_eq!(
            aggregate.past(),
            [now() - Duration::days(30), now() - Duration::minutes(1)]
        );
        assert_eq!(aggregate.upcoming(), [now(), now() + Duration::days(2)]);
        assert_eq!(aggregate.past_count(), aggregate.past().len());
        assert_eq!(aggregate.upcoming_count(), aggregate.upcoming().len());
    }

    #[test]
    fn count_upcoming_matches_partition() {
        let starts = vec![
            now() - Duration::hours(1),
            now(),
            now() + Duration::hours(1),
        ];
        let aggregate = ShowAggregate::partition(starts.clone(), now(), |s| *s);

        assert_eq!(count_upcoming(starts, now()), aggregate.upcoming_count());
        assert_eq!(count_upcoming(Vec::new(), now()), 0);
    }

    #[test]
    fn venue_shows_join_artist_fields() {
        let rows = vec![
            (show(1, now() - Duration::days(7), 1, 9), Some(artist(9, "Guns N Petals"))),
            (
                show(2, now() + Duration::days(7), 1, 10),
                Some(artist(10, "Matt Quevedo")),
            ),
        ];

        let aggregate = venue_shows(rows, now()).unwrap();

        assert_eq!(aggregate.past_count(), 1);
        assert_eq!(aggregate.upcoming_count(), 1);
        assert_eq!(aggregate.past()[0].artist_id, ArtistId::new(9));
        assert_eq!(aggregate.past()[0].artist_name, "Guns N Petals");
        assert_eq!(aggregate.upcoming()[0].artist_name, "Matt Quevedo");
    }

    #[test]
    fn artist_shows_join_venue_fields() {
        let rows = vec![(
            show(3, now() + Duration::days(1), 1, 9),
            Some(venue(1, "The Musical Hop")),
        )];

        let aggregate = artist_shows(rows, now()).unwrap();

        assert_eq!(aggregate.past_count(), 0);
        assert_eq!(aggregate.upcoming()[0].venue_id, VenueId::new(1));
        assert_eq!(aggregate.upcoming()[0].venue_name, "The Musical Hop");
    }

    #[test]
    fn missing_counterpart_fails_whole_call() {
        let rows = vec![
            (show(1, now(), 1, 9), Some(artist(9, "Guns N Petals"))),
            (show(2, now(), 1, 42), None),
        ];

        let err = venue_shows(rows, now()).unwrap_err();

        assert!(matches!(
            err,
            BookingError::ReferenceBroken {
                show_id: 2,
                entity: "Artist",
                id: 42
            }
        ));
    }

    #[test]
    fn serialized_counts_follow_sequences() {
        let aggregate = ShowAggregate::partition(
            vec![now() - Duration::days(1), now() + Duration::days(1), now()],
            now(),
            |s| *s,
        );

        let json = serde_json::to_value(&aggregate).unwrap();

        assert_eq!(json["past_shows_count"], 1);
        assert_eq!(json["upcoming_shows_count"], 2);
        assert_eq!(json["upcoming_shows"].as_array().unwrap().len(), 2);
    }
}
