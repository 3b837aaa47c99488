use serde::{Deserialize, Serialize};

use super::defaults::strings;

/// Provider amenity code sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmenityConfig {
    /// Codes that mark a hotel as exceptional (wow).
    pub wow: Vec<String>,
    /// Codes worth a flat amenity bonus.
    pub premium: Vec<String>,
    pub wellness: Vec<String>,
    /// Codes that count as premium water access.
    pub premium_water: Vec<String>,
}

impl Default for AmenityConfig {
    fn default() -> Self {
        Self {
            wow: strings(&["BEACH", "SPA", "CASINO", "GOLF", "ANIMAL_WATCHING", "JACUZZI"]),
            premium: strings(&[
                "SPA", "JACUZZI", "SAUNA", "MASSAGE", "VALET_PARKING", "ROOM_SERVICE", "GOLF",
                "BEACH",
            ]),
            wellness: strings(&["SPA", "SAUNA", "MASSAGE", "JACUZZI", "SOLARIUM"]),
            premium_water: strings(&["SWIMMING_POOL", "BEACH"]),
        }
    }
}
