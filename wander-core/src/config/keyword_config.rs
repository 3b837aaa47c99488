//! Keyword dictionaries, one list per [`KeywordClass`].
//!
//! Lists are English-only; non-English descriptions will under-score.

use serde::{Deserialize, Serialize};

use super::defaults::strings;
use crate::traits::KeywordClass;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub beach: Vec<String>,
    pub island: Vec<String>,
    pub infinity_pool: Vec<String>,
    pub rooftop_pool: Vec<String>,
    pub private_pool: Vec<String>,
    pub premium_water: Vec<String>,
    pub design: Vec<String>,
    pub heritage: Vec<String>,
    pub wellness: Vec<String>,
    pub nature: Vec<String>,
    pub mountain: Vec<String>,
    pub city_view: Vec<String>,
    pub views: Vec<String>,
    pub villa: Vec<String>,
    pub adults_only: Vec<String>,
    pub golf: Vec<String>,
    pub all_inclusive: Vec<String>,
    pub luxury: Vec<String>,
    pub romance: Vec<String>,
    pub vineyard: Vec<String>,
    pub culture: Vec<String>,
    pub luxury_name: Vec<String>,
    pub top_city: Vec<String>,
}

impl KeywordConfig {
    /// Terms registered for a class.
    pub fn terms(&self, class: KeywordClass) -> &[String] {
        match class {
            KeywordClass::Beach => &self.beach,
            KeywordClass::Island => &self.island,
            KeywordClass::InfinityPool => &self.infinity_pool,
            KeywordClass::RooftopPool => &self.rooftop_pool,
            KeywordClass::PrivatePool => &self.private_pool,
            KeywordClass::PremiumWater => &self.premium_water,
            KeywordClass::Design => &self.design,
            KeywordClass::Heritage => &self.heritage,
            KeywordClass::Wellness => &self.wellness,
            KeywordClass::Nature => &self.nature,
            KeywordClass::Mountain => &self.mountain,
            KeywordClass::CityView => &self.city_view,
            KeywordClass::Views => &self.views,
            KeywordClass::Villa => &self.villa,
            KeywordClass::AdultsOnly => &self.adults_only,
            KeywordClass::Golf => &self.golf,
            KeywordClass::AllInclusive => &self.all_inclusive,
            KeywordClass::Luxury => &self.luxury,
            KeywordClass::Romance => &self.romance,
            KeywordClass::Vineyard => &self.vineyard,
            KeywordClass::Culture => &self.culture,
            KeywordClass::LuxuryName => &self.luxury_name,
            KeywordClass::TopCity => &self.top_city,
        }
    }
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            beach: strings(&[
                "beach", "beachfront", "beachside", "oceanfront", "ocean", "seafront",
                "seaside", "waterfront", "coastal", "on the sand",
            ]),
            island: strings(&["island", "atoll", "archipelago", "private island"]),
            infinity_pool: strings(&["infinity pool", "infinity-edge", "infinity edge"]),
            rooftop_pool: strings(&["rooftop pool", "rooftop", "roof terrace", "sky bar"]),
            private_pool: strings(&["private pool", "plunge pool", "pool villa"]),
            premium_water: strings(&[
                "private beach", "lagoon", "overwater", "over-water", "cenote", "hot spring",
                "hot springs", "plunge pool", "swim-up",
            ]),
            design: strings(&[
                "design hotel", "designer", "architect", "architecture", "architectural",
                "minimalist", "art deco", "contemporary design", "bauhaus", "mid-century",
            ]),
            heritage: strings(&[
                "historic", "heritage", "palazzo", "castle", "chateau", "château", "manor",
                "monastery", "century-old", "restored",
            ]),
            wellness: strings(&[
                "spa", "wellness", "hammam", "thermal baths", "sauna", "massage", "yoga",
                "onsen", "wellness retreat",
            ]),
            nature: strings(&[
                "forest", "jungle", "rainforest", "national park", "wildlife", "safari",
                "eco-lodge", "nature reserve", "treehouse", "glamping",
            ]),
            mountain: strings(&[
                "mountain", "mountains", "alpine", "lake", "lakeside", "cliff", "cliffside",
                "valley", "canyon", "caldera", "fjord", "volcano",
            ]),
            city_view: strings(&[
                "skyline", "city view", "city views", "cityscape", "overlooking the city",
            ]),
            views: strings(&[
                "panoramic", "ocean view", "ocean views", "sea view", "sea views",
                "breathtaking view", "breathtaking views", "stunning views", "sunset views",
            ]),
            villa: strings(&["villa", "villas", "suite", "suites", "bungalow", "bungalows"]),
            adults_only: strings(&["adults only", "adults-only", "adult only"]),
            golf: strings(&["golf", "golf course", "championship course"]),
            all_inclusive: strings(&["all inclusive", "all-inclusive"]),
            luxury: strings(&[
                "luxury", "luxurious", "five-star", "5-star", "five star", "butler",
                "michelin", "opulent",
            ]),
            romance: strings(&[
                "romantic", "romance", "honeymoon", "honeymooners", "couples", "candlelit",
            ]),
            vineyard: strings(&[
                "vineyard", "vineyards", "winery", "wine region", "wine country", "wine estate",
            ]),
            culture: strings(&[
                "unesco", "cultural", "old town", "medieval", "ancient", "historic center",
                "historic centre", "world heritage",
            ]),
            luxury_name: strings(&["luxury", "grand", "palace", "royal", "imperial", "premium"]),
            top_city: strings(&[
                "paris", "rome", "florence", "venice", "barcelona", "lisbon", "santorini",
                "amalfi", "kyoto", "tokyo", "bali", "maldives", "cape town", "marrakech",
                "new york", "reykjavik", "queenstown", "tulum", "istanbul", "dubrovnik",
            ]),
        }
    }
}
