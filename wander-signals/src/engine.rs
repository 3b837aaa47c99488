use std::sync::Arc;

use wander_core::config::WanderConfig;
use wander_core::models::{HotelContent, HotelIdentity, HotelSignals, RawHotel};
use wander_core::traits::SignalClassifier;

use crate::classifier::KeywordClassifier;
use crate::{amenities, brand, photos, rating, tags};

/// Extractor turning a raw hotel into [`HotelSignals`].
///
/// Holds the rule tables and a classifier built once from them; cheap to share
/// across threads.
pub struct SignalExtractor {
    config: Arc<WanderConfig>,
    classifier: Box<dyn SignalClassifier>,
}

impl SignalExtractor {
    /// Create an extractor using the default keyword classifier.
    pub fn new(config: Arc<WanderConfig>) -> Self {
        let classifier = KeywordClassifier::new(&config.keywords);
        Self::with_classifier(config, Box::new(classifier))
    }

    /// Create an extractor with a custom text classifier.
    pub fn with_classifier(config: Arc<WanderConfig>, classifier: Box<dyn SignalClassifier>) -> Self {
        Self { config, classifier }
    }

    pub fn classifier(&self) -> &dyn SignalClassifier {
        self.classifier.as_ref()
    }

    pub fn extract_hotel(&self, hotel: &RawHotel) -> HotelSignals {
        self.extract(&hotel.hotel, &hotel.content)
    }

    /// Derive every signal for one hotel.
    pub fn extract(&self, identity: &HotelIdentity, content: &HotelContent) -> HotelSignals {
        let description = content
            .description
            .as_ref()
            .map(|d| self.classifier.classify(&d.text))
            .unwrap_or_default();

        let display_name = if identity.name.trim().is_empty() {
            &content.name
        } else {
            &identity.name
        };
        let name = self.classifier.classify_name(display_name);
        let city = identity
            .city_name
            .as_deref()
            .map(|c| self.classifier.classify(c))
            .unwrap_or_default();

        let tags = tags::extract_tags(&self.config.tag_rules, content, &description, &name);
        let brand = brand::classify(identity, &self.config.brands);
        let has_photo_gate = photos::has_photo_gate(&content.media, self.config.gates.min_photos);
        let has_wow_amenities =
            amenities::has_wow_amenities(content, &self.config.amenities, &description);
        let extracted_rating = rating::extract_rating(&content.ratings);
        let hero_photo = photos::select_hero(&content.media).map(|m| m.uri.clone());

        tracing::trace!(
            hotel_id = %identity.hotel_id,
            tags = tags.len(),
            photo_gate = has_photo_gate,
            wow = has_wow_amenities,
            "signals extracted"
        );

        HotelSignals {
            tags,
            brand,
            has_photo_gate,
            has_wow_amenities,
            extracted_rating,
            hero_photo,
            description,
            name,
            city,
        }
    }
}
