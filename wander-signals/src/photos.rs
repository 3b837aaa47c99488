//! Photo sufficiency and hero selection.

use wander_core::constants::{HERO_MIN_HEIGHT, HERO_MIN_WIDTH};
use wander_core::models::MediaItem;

/// Passes iff there are at least `min_photos` items and one of them is an
/// exterior, room, or suite shot.
pub fn has_photo_gate(media: &[MediaItem], min_photos: usize) -> bool {
    media.len() >= min_photos && media.iter().any(|m| m.is_exterior() || m.is_room())
}

/// Hero photo preference: first exterior, first room/suite, first photo of at
/// least 800x600, then the first photo in provider order.
pub fn select_hero(media: &[MediaItem]) -> Option<&MediaItem> {
    media
        .iter()
        .find(|m| m.is_exterior())
        .or_else(|| media.iter().find(|m| m.is_room()))
        .or_else(|| media.iter().find(|m| m.is_at_least(HERO_MIN_WIDTH, HERO_MIN_HEIGHT)))
        .or_else(|| media.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wander_core::models::MediaCategory;

    fn photo(uri: &str, category: Option<&str>, size: Option<(u32, u32)>) -> MediaItem {
        MediaItem {
            uri: uri.to_string(),
            category: category.map(MediaCategory::from),
            width: size.map(|s| s.0),
            height: size.map(|s| s.1),
        }
    }

    #[test]
    fn photo_gate_needs_count_and_category() {
        let lobby = |n: &str| photo(n, Some("LOBBY"), None);
        assert!(!has_photo_gate(&[lobby("a"), lobby("b"), lobby("c")], 3));
        assert!(!has_photo_gate(&[lobby("a"), photo("b", Some("ROOM"), None)], 3));
        assert!(has_photo_gate(
            &[lobby("a"), lobby("b"), photo("c", Some("SUITE"), None)],
            3
        ));
    }

    #[test]
    fn hero_prefers_exterior_then_room() {
        let media = vec![
            photo("big", None, Some((2000, 1500))),
            photo("room", Some("ROOM"), None),
            photo("ext", Some("EXTERIOR"), None),
        ];
        assert_eq!(select_hero(&media).unwrap().uri, "ext");
        assert_eq!(select_hero(&media[..2]).unwrap().uri, "room");
        assert_eq!(select_hero(&media[..1]).unwrap().uri, "big");
    }

    #[test]
    fn hero_falls_back_to_first_then_none() {
        let media = vec![photo("small", None, Some((320, 200))), photo("b", None, None)];
        assert_eq!(select_hero(&media).unwrap().uri, "small");
        assert!(select_hero(&[]).is_none());
    }
}
