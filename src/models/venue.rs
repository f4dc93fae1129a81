use serde::{Deserialize, Serialize};

use crate::domain::{Genres, VenueId};
use crate::models::show::ArtistAppearance;
use crate::services::aggregator::ShowAggregate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Genres,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Fields accepted when listing a new venue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Genres,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Partial update of a venue. `None` leaves the stored value untouched.
///
/// Nullable columns take `Some(None)` to clear them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VenuePatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(default, with = "crate::models::double_option")]
    pub address: Option<Option<String>>,
    #[serde(default, with = "crate::models::double_option")]
    pub phone: Option<Option<String>>,
    pub genres: Option<Genres>,
    #[serde(default, with = "crate::models::double_option")]
    pub image_link: Option<Option<String>>,
    #[serde(default, with = "crate::models::double_option")]
    pub facebook_link: Option<Option<String>>,
    #[serde(default, with = "crate::models::double_option")]
    pub website: Option<Option<String>>,
    pub seeking_talent: Option<bool>,
    #[serde(default, with = "crate::models::double_option")]
    pub seeking_description: Option<Option<String>>,
}

impl VenuePatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.genres.is_none()
            && self.image_link.is_none()
            && self.facebook_link.is_none()
            && self.website.is_none()
            && self.seeking_talent.is_none()
            && self.seeking_description.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueSummary {
    pub id: VenueId,
    pub name: String,
}

/// Venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(flatten)]
    pub shows: ShowAggregate<ArtistAppearance>,
}
