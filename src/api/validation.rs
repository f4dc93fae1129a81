use super::ApiError;

/// Caps the term length. The term is passed through as given, so
/// surrounding whitespace is part of the match; an empty term matches
/// everything.
pub fn validate_search_term(term: &str) -> Result<&str, ApiError> {
    const MAX_LEN: usize = 120;

    if term.chars().count() > MAX_LEN {
        return Err(ApiError::validation(format!(
            "Search term must be {MAX_LEN} characters or less"
        )));
    }
    Ok(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_search_term() {
        assert_eq!(validate_search_term("Fill").ok(), Some("Fill"));
        assert_eq!(validate_search_term("The ").ok(), Some("The "));
        assert_eq!(validate_search_term("").ok(), Some(""));
        assert!(validate_search_term(&"é".repeat(120)).is_ok());
        assert!(validate_search_term(&"a".repeat(121)).is_err());
    }
}
