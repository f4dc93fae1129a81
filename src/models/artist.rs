use serde::{Deserialize, Serialize};

use crate::domain::{ArtistId, Genres};
use crate::models::show::VenueAppearance;
use crate::services::aggregator::ShowAggregate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Genres,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Genres,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Partial update of an artist, see [`crate::models::VenuePatch`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtistPatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(default, with = "crate::models::double_option")]
    pub phone: Option<Option<String>>,
    pub genres: Option<Genres>,
    #[serde(default, with = "crate::models::double_option")]
    pub facebook_link: Option<Option<String>>,
    #[serde(default, with = "crate::models::double_option")]
    pub image_link: Option<Option<String>>,
    #[serde(default, with = "crate::models::double_option")]
    pub website: Option<Option<String>>,
    pub seeking_venue: Option<bool>,
    #[serde(default, with = "crate::models::double_option")]
    pub seeking_description: Option<Option<String>>,
}

impl ArtistPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.phone.is_none()
            && self.genres.is_none()
            && self.facebook_link.is_none()
            && self.image_link.is_none()
            && self.website.is_none()
            && self.seeking_venue.is_none()
            && self.seeking_description.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    pub id: ArtistId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(flatten)]
    pub shows: ShowAggregate<VenueAppearance>,
}
