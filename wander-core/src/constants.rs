/// Wander system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of tags carried by a curated card.
pub const MAX_TAGS_PER_CARD: usize = 3;

/// Longest allowed run of consecutive cards sharing a city or a brand.
pub const MAX_CONSECUTIVE_RUN: usize = 2;

/// Minimum declared width for a photo to qualify as a hero fallback.
pub const HERO_MIN_WIDTH: u32 = 800;

/// Minimum declared height for a photo to qualify as a hero fallback.
pub const HERO_MIN_HEIGHT: u32 = 600;

/// Width at which a photo counts as high resolution for visual scoring.
pub const HIGH_RES_MIN_WIDTH: u32 = 1200;

/// Height at which a photo counts as high resolution for visual scoring.
pub const HIGH_RES_MIN_HEIGHT: u32 = 800;

/// Photo count at which the visual base score saturates.
pub const VISUAL_PHOTO_SATURATION: usize = 6;

/// Rating providers preferred over any other third-party source.
pub const PREFERRED_RATING_PROVIDERS: &[&str] = &["tripadvisor", "google"];

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "WANDER_LOG";

/// Default project config file name.
pub const CONFIG_FILE_NAME: &str = "wander.toml";
