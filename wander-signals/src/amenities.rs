use wander_core::config::AmenityConfig;
use wander_core::models::HotelContent;
use wander_core::traits::{KeywordClass, TextSignals};

/// True if any amenity code is in the wow set, or the description carries a
/// views, design, luxury, or romance keyword.
pub fn has_wow_amenities(
    content: &HotelContent,
    amenities: &AmenityConfig,
    description: &TextSignals,
) -> bool {
    content.has_amenity_in(&amenities.wow) || description.has_any(KeywordClass::wow_classes())
}
