pub mod artist;
pub mod search;
pub mod show;
pub mod venue;

pub use artist::{Artist, ArtistDetail, ArtistPatch, ArtistSummary, NewArtist};
pub use search::{SearchHit, SearchResults};
pub use show::{ArtistAppearance, NewShow, ShowListing, VenueAppearance};
pub use venue::{NewVenue, Venue, VenueArea, VenueDetail, VenuePatch, VenueSummary};

/// Deserializes a field that distinguishes "absent" from "explicitly null".
///
/// Combined with `#[serde(default)]`: a missing key yields `None`, `null`
/// yields `Some(None)` and a value yields `Some(Some(v))`.
pub(crate) mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_distinguishes_missing_from_null() {
        let patch: VenuePatch =
            serde_json::from_str(r#"{"name": "The Independent", "phone": null}"#).unwrap();

        assert_eq!(patch.name.as_deref(), Some("The Independent"));
        assert_eq!(patch.phone, Some(None));
        assert_eq!(patch.website, None);
        assert!(!patch.is_empty());
    }

    #[test]
    fn patch_rejects_unknown_fields() {
        let result: Result<ArtistPatch, _> = serde_json::from_str(r#"{"address": "1 Main St"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn new_venue_defaults_seeking_flag() {
        let venue: NewVenue =
            serde_json::from_str(r#"{"name": "The Dueling Pianos Bar", "city": "New York", "state": "NY"}"#)
                .unwrap();

        assert!(!venue.seeking_talent);
        assert!(venue.genres.is_empty());
    }
}
