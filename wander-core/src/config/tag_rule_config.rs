//! Ordered tag rules.
//!
//! Each rule yields at most one tag: the first of its variants that matches.
//! Rules run in list order, and a card keeps only the first tags emitted.

use serde::{Deserialize, Serialize};

use super::defaults::strings;
use crate::models::TagCategory;
use crate::traits::KeywordClass;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRule {
    pub name: String,
    pub variants: Vec<TagVariant>,
}

/// One way a rule can fire. Matches if the description carries any of
/// `keyword_classes`, the content lists any of `amenities`, or the name
/// carries any of `name_classes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagVariant {
    pub id: String,
    pub label: String,
    pub category: TagCategory,
    #[serde(default)]
    pub keyword_classes: Vec<KeywordClass>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub name_classes: Vec<KeywordClass>,
}

impl TagVariant {
    fn new(id: &str, label: &str, category: TagCategory) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            category,
            keyword_classes: Vec::new(),
            amenities: Vec::new(),
            name_classes: Vec::new(),
        }
    }

    fn keywords(mut self, classes: &[KeywordClass]) -> Self {
        self.keyword_classes = classes.to_vec();
        self
    }

    fn amenities(mut self, codes: &[&str]) -> Self {
        self.amenities = strings(codes);
        self
    }

    fn name(mut self, classes: &[KeywordClass]) -> Self {
        self.name_classes = classes.to_vec();
        self
    }
}

fn rule(name: &str, variants: Vec<TagVariant>) -> TagRule {
    TagRule {
        name: name.to_string(),
        variants,
    }
}

/// Default priority order: beach/island, pool tier, design/heritage, wellness,
/// nature, city view, villas/suites, adults-only, golf, all-inclusive.
pub fn default_tag_rules() -> Vec<TagRule> {
    use KeywordClass as K;
    use TagCategory as C;

    vec![
        rule(
            "beach-island",
            vec![
                TagVariant::new("island", "Island Escape", C::Location).keywords(&[K::Island]),
                TagVariant::new("beachfront", "Beachfront", C::Location)
                    .keywords(&[K::Beach])
                    .amenities(&["BEACH"]),
            ],
        ),
        rule(
            "pool-tier",
            vec![
                TagVariant::new("infinity-pool", "Infinity Pool", C::Amenity)
                    .keywords(&[K::InfinityPool]),
                TagVariant::new("rooftop-pool", "Rooftop Pool", C::Amenity)
                    .keywords(&[K::RooftopPool]),
                TagVariant::new("private-pool", "Private Pool", C::Amenity)
                    .keywords(&[K::PrivatePool]),
            ],
        ),
        rule(
            "design-heritage",
            vec![
                TagVariant::new("design-hotel", "Design Hotel", C::Style).keywords(&[K::Design]),
                TagVariant::new("historic", "Historic Charm", C::Style).keywords(&[K::Heritage]),
            ],
        ),
        rule(
            "wellness",
            vec![TagVariant::new("spa-wellness", "Spa & Wellness", C::Amenity)
                .keywords(&[K::Wellness])
                .amenities(&["SPA", "SAUNA", "MASSAGE", "JACUZZI"])],
        ),
        rule(
            "nature",
            vec![TagVariant::new("nature-retreat", "Nature Retreat", C::Location)
                .keywords(&[K::Nature, K::Mountain])
                .amenities(&["ANIMAL_WATCHING"])],
        ),
        rule(
            "city-view",
            vec![TagVariant::new("city-views", "City Views", C::Location)
                .keywords(&[K::CityView])],
        ),
        rule(
            "villas-suites",
            vec![TagVariant::new("villas-suites", "Villas & Suites", C::Accommodation)
                .keywords(&[K::Villa])
                .name(&[K::Villa])],
        ),
        rule(
            "adults-only",
            vec![TagVariant::new("adults-only", "Adults Only", C::Service)
                .keywords(&[K::AdultsOnly])
                .amenities(&["NO_KID_ALLOWED"])
                .name(&[K::AdultsOnly])],
        ),
        rule(
            "golf",
            vec![TagVariant::new("golf", "Golf", C::Amenity)
                .keywords(&[K::Golf])
                .amenities(&["GOLF"])],
        ),
        rule(
            "all-inclusive",
            vec![TagVariant::new("all-inclusive", "All-Inclusive", C::Service)
                .keywords(&[K::AllInclusive])
                .name(&[K::AllInclusive])],
        ),
    ]
}
