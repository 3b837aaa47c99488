//! Rule-based tag extraction.

use wander_core::config::{TagRule, TagVariant};
use wander_core::constants::MAX_TAGS_PER_CARD;
use wander_core::models::{HotelContent, Tag, TagList};
use wander_core::traits::TextSignals;

/// Run tag rules in order, keeping the first [`MAX_TAGS_PER_CARD`] tags emitted.
///
/// This is a deliberate truncation by rule priority, not a relevance ranking.
pub fn extract_tags(
    rules: &[TagRule],
    content: &HotelContent,
    description: &TextSignals,
    name: &TextSignals,
) -> TagList {
    let mut tags = TagList::new();
    for rule in rules {
        if tags.len() >= MAX_TAGS_PER_CARD {
            break;
        }
        let fired = rule
            .variants
            .iter()
            .find(|v| variant_matches(v, content, description, name));
        if let Some(variant) = fired {
            if tags.iter().any(|t| t.id == variant.id) {
                continue;
            }
            tags.push(Tag::new(&variant.id, &variant.label, variant.category));
        }
    }
    tags
}

fn variant_matches(
    variant: &TagVariant,
    content: &HotelContent,
    description: &TextSignals,
    name: &TextSignals,
) -> bool {
    description.has_any(&variant.keyword_classes)
        || content.has_amenity_in(&variant.amenities)
        || name.has_any(&variant.name_classes)
}
