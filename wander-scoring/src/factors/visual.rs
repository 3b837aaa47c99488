use rustc_hash::FxHashSet;
use wander_core::constants::{HIGH_RES_MIN_HEIGHT, HIGH_RES_MIN_WIDTH, VISUAL_PHOTO_SATURATION};
use wander_core::models::MediaItem;

const CATEGORY_MIX_BONUS: f64 = 0.2;
const HIGH_RES_BONUS: f64 = 0.1;
const VARIETY_BONUS: f64 = 0.1;
const VARIETY_MIN_CATEGORIES: usize = 4;

/// Visual appeal from photo metadata.
///
/// Formula: `min(count, 6) / 6`, +0.2 with both an exterior and a room/suite
/// shot, +0.1 for any photo of at least 1200x800, +0.1 for four or more
/// distinct categories.
/// Range: 0.0 – 1.0 (clipped).
pub fn calculate(media: &[MediaItem]) -> f64 {
    if media.is_empty() {
        return 0.0;
    }

    let mut score =
        media.len().min(VISUAL_PHOTO_SATURATION) as f64 / VISUAL_PHOTO_SATURATION as f64;

    if media.iter().any(MediaItem::is_exterior) && media.iter().any(MediaItem::is_room) {
        score += CATEGORY_MIX_BONUS;
    }
    if media
        .iter()
        .any(|m| m.is_at_least(HIGH_RES_MIN_WIDTH, HIGH_RES_MIN_HEIGHT))
    {
        score += HIGH_RES_BONUS;
    }

    let categories: FxHashSet<&str> = media
        .iter()
        .filter_map(|m| m.category.as_ref().map(|c| c.as_str()))
        .collect();
    if categories.len() >= VARIETY_MIN_CATEGORIES {
        score += VARIETY_BONUS;
    }

    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wander_core::models::MediaCategory;

    fn photo(category: Option<&str>, size: Option<(u32, u32)>) -> MediaItem {
        MediaItem {
            uri: "u".to_string(),
            category: category.map(MediaCategory::from),
            width: size.map(|s| s.0),
            height: size.map(|s| s.1),
        }
    }

    #[test]
    fn count_saturates_at_six() {
        let three = vec![photo(None, None); 3];
        assert!((calculate(&three) - 0.5).abs() < 1e-9);
        let ten = vec![photo(None, None); 10];
        assert!((calculate(&ten) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bonuses_stack() {
        let media = vec![
            photo(Some("EXTERIOR"), Some((1600, 900))),
            photo(Some("ROOM"), None),
            photo(Some("POOL"), None),
        ];
        // 0.5 + 0.2 + 0.1, three categories: no variety bonus.
        assert!((calculate(&media) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn empty_media_is_zero() {
        assert_eq!(calculate(&[]), 0.0);
    }
}
