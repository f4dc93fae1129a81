//! Domain primitives for the booking catalog.
//!
//! Identifier newtypes keep venue and artist ids from being mixed up, and
//! [`ShowTiming`] holds the single rule that decides whether a show is past
//! or upcoming.

pub mod genres;

pub use genres::Genres;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn value(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self::new(id)
            }
        }
    };
}

entity_id!(
    /// Identifier of a venue row.
    ///
    /// ```rust
    /// use fyyur::domain::VenueId;
    ///
    /// let id = VenueId::new(7);
    /// assert_eq!(id.value(), 7);
    /// assert_eq!(id.to_string(), "7");
    /// ```
    VenueId
);

entity_id!(
    /// Identifier of an artist row.
    ArtistId
);

/// Position of a show relative to the moment a query runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowTiming {
    Past,
    Upcoming,
}

impl ShowTiming {
    /// A show is past only when it started strictly before `now`; a show
    /// starting exactly at `now` is upcoming.
    #[must_use]
    pub fn classify(start_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if start_time < now {
            Self::Past
        } else {
            Self::Upcoming
        }
    }

    #[must_use]
    pub const fn is_upcoming(self) -> bool {
        matches!(self, Self::Upcoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn ids_round_trip_through_i32() {
        let id = ArtistId::from(9);
        assert_eq!(i32::from(id), 9);
        assert_eq!(serde_json::to_string(&id).unwrap(), "9");
    }

    #[test]
    fn classify_splits_on_now() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 20, 0, 0).unwrap();

        assert_eq!(
            ShowTiming::classify(now - Duration::seconds(1), now),
            ShowTiming::Past
        );
        assert_eq!(
            ShowTiming::classify(now + Duration::days(3), now),
            ShowTiming::Upcoming
        );
    }

    #[test]
    fn show_starting_now_is_upcoming() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 20, 0, 0).unwrap();
        assert!(ShowTiming::classify(now, now).is_upcoming());
    }
}
