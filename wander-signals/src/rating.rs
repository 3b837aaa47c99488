//! Third-party rating extraction.

use wander_core::constants::PREFERRED_RATING_PROVIDERS;
use wander_core::models::ThirdPartyRating;

/// Pick the TripAdvisor/Google rating if present, else the first one, and parse it.
///
/// A value that does not parse as a finite non-negative number is absent, not zero.
pub fn extract_rating(ratings: &[ThirdPartyRating]) -> Option<f64> {
    let chosen = ratings
        .iter()
        .find(|r| is_preferred(&r.provider))
        .or_else(|| ratings.first())?;

    chosen
        .value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

fn is_preferred(provider: &str) -> bool {
    let provider = provider.to_lowercase();
    PREFERRED_RATING_PROVIDERS
        .iter()
        .any(|p| provider.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(provider: &str, value: &str) -> ThirdPartyRating {
        ThirdPartyRating {
            provider: provider.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn prefers_known_providers() {
        let ratings = vec![rating("Booking", "9.1"), rating("TripAdvisor", "4.5")];
        assert_eq!(extract_rating(&ratings), Some(4.5));
        let ratings = vec![rating("Booking", "9.1"), rating("Google Reviews", "4.2")];
        assert_eq!(extract_rating(&ratings), Some(4.2));
    }

    #[test]
    fn falls_back_to_first() {
        let ratings = vec![rating("Booking", "4.1"), rating("Expedia", "4.9")];
        assert_eq!(extract_rating(&ratings), Some(4.1));
    }

    #[test]
    fn unparsable_is_absent() {
        assert_eq!(extract_rating(&[rating("tripadvisor", "excellent")]), None);
        assert_eq!(extract_rating(&[]), None);
    }
}
