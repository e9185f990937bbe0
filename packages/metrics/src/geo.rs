//! Recognising postcodes in free-form search input.

/// Whether `input` is an Australian postcode: exactly four ASCII digits
/// once surrounding whitespace is trimmed.
#[must_use]
pub fn is_postcode(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_four_digits() {
        assert!(is_postcode("3000"));
        assert!(is_postcode("  3141 "));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_postcode("300"));
        assert!(!is_postcode("30000"));
        assert!(!is_postcode("30a0"));
        assert!(!is_postcode("Carlton"));
        assert!(!is_postcode(""));
        assert!(!is_postcode("３０００"));
    }
}
