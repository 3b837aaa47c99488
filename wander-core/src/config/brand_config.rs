use serde::{Deserialize, Serialize};

use super::defaults::strings;

/// Brand classification lists. Chain codes match exactly (case-insensitive);
/// name keywords match as lowercase substrings of the hotel name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub premium_chains: Vec<String>,
    pub premium_names: Vec<String>,
    pub boutique_chains: Vec<String>,
    pub boutique_names: Vec<String>,
    pub blacklist_chains: Vec<String>,
    pub blacklist_names: Vec<String>,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            premium_chains: strings(&["FS", "RZ", "MO", "WA", "SR", "PH", "RW", "BE", "AN"]),
            premium_names: strings(&[
                "four seasons", "ritz-carlton", "mandarin oriental", "waldorf astoria",
                "st. regis", "park hyatt", "rosewood", "belmond", "aman resort", "six senses",
                "one&only", "peninsula",
            ]),
            boutique_chains: strings(&["DS", "SL", "RC", "MC", "EB"]),
            boutique_names: strings(&[
                "boutique", "design hotels", "small luxury hotels", "relais & chateaux",
                "relais & châteaux", "edition", "autograph collection",
            ]),
            blacklist_chains: strings(&["S8", "M6", "EO", "RD", "TL", "IB"]),
            blacklist_names: strings(&[
                "motel 6", "super 8", "econo lodge", "red roof", "travelodge", "ibis budget",
                "hostel", "capsule",
            ]),
        }
    }
}
