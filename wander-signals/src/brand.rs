//! Brand classification: blacklist, then premium, then boutique.

use wander_core::config::BrandConfig;
use wander_core::models::{BrandInfo, HotelIdentity};

/// Classify a hotel's brand.
///
/// Blacklist is checked first (chain code, then name keyword) and short-circuits
/// with every other flag false. Premium and boutique follow the same two checks.
pub fn classify(identity: &HotelIdentity, brands: &BrandConfig) -> BrandInfo {
    let chain = normalized_chain(identity.chain_code.as_deref());
    let name = identity.name.to_lowercase();

    let matches = |chains: &[String], names: &[String]| {
        chain
            .as_deref()
            .is_some_and(|code| chains.iter().any(|c| c.trim().eq_ignore_ascii_case(code)))
            || names
                .iter()
                .map(|n| n.trim().to_lowercase())
                .any(|n| !n.is_empty() && name.contains(&n))
    };

    if matches(&brands.blacklist_chains, &brands.blacklist_names) {
        return BrandInfo::blacklisted(chain);
    }
    if matches(&brands.premium_chains, &brands.premium_names) {
        return BrandInfo::premium(chain);
    }
    if matches(&brands.boutique_chains, &brands.boutique_names) {
        return BrandInfo::boutique(chain);
    }
    BrandInfo::independent(chain)
}

fn normalized_chain(code: Option<&str>) -> Option<String> {
    code.map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_ascii_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(name: &str, chain: Option<&str>) -> HotelIdentity {
        HotelIdentity {
            hotel_id: "H1".to_string(),
            name: name.to_string(),
            chain_code: chain.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn blacklist_beats_premium() {
        // Premium name, blacklisted chain.
        let info = classify(&identity("Four Seasons Annex", Some("s8")), &BrandConfig::default());
        assert!(info.blacklisted);
        assert!(!info.premium);
        assert!(!info.boutique);
        assert_eq!(info.chain_code.as_deref(), Some("S8"));
    }

    #[test]
    fn premium_by_name_without_chain() {
        let info = classify(&identity("Rosewood Lisbon", None), &BrandConfig::default());
        assert!(info.premium);
        assert!(!info.boutique);
    }

    #[test]
    fn boutique_by_chain() {
        let info = classify(&identity("Casa Alma", Some("DS")), &BrandConfig::default());
        assert!(info.boutique);
        assert!(!info.premium);
    }

    #[test]
    fn unknown_is_independent() {
        let info = classify(&identity("Hotel Sole", Some("  ")), &BrandConfig::default());
        assert!(info.is_independent());
        assert_eq!(info.chain_code, None);
    }
}
