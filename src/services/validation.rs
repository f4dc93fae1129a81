//! Field checks applied before anything reaches the store.

use crate::domain::Genres;
use crate::services::BookingError;

const MAX_NAME_LEN: usize = 120;

/// Rejects blank or overlong required text fields.
pub fn require_text(field: &str, value: &str) -> Result<(), BookingError> {
    if value.trim().is_empty() {
        return Err(BookingError::validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(BookingError::validation(format!(
            "{field} must be {MAX_NAME_LEN} characters or less"
        )));
    }
    Ok(())
}

/// Genres are stored comma-joined, so an entry may not be empty or contain a comma.
pub fn storable_genres(genres: &Genres) -> Result<(), BookingError> {
    match genres.find_unstorable() {
        Some(genre) => Err(BookingError::validation(format!(
            "Invalid genre '{genre}': genres cannot be empty or contain commas"
        ))),
        None => Ok(()),
    }
}
