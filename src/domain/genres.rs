use serde::{Deserialize, Serialize};

/// Separator used when a genre list is stored in a single text column.
pub const GENRE_DELIMITER: char = ',';

/// Genre list of a venue or artist.
///
/// Stored as one comma-joined column. Splitting drops empty segments, so an
/// empty column reads back as an empty list rather than `[""]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genres(Vec<String>);

impl Genres {
    #[must_use]
    pub const fn new(genres: Vec<String>) -> Self {
        Self(genres)
    }

    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        Self(
            raw.split(GENRE_DELIMITER)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    #[must_use]
    pub fn to_stored(&self) -> String {
        self.0.join(&GENRE_DELIMITER.to_string())
    }

    /// First entry that could not survive a store round trip, if any.
    #[must_use]
    pub fn find_unstorable(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|g| g.is_empty() || g.contains(GENRE_DELIMITER))
            .map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Genres {
    fn from(genres: Vec<String>) -> Self {
        Self(genres)
    }
}
