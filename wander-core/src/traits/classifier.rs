use std::fmt;

use serde::{Deserialize, Serialize};

/// Keyword dictionaries a classifier can recognise in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordClass {
    Beach,
    Island,
    InfinityPool,
    RooftopPool,
    PrivatePool,
    PremiumWater,
    Design,
    Heritage,
    Wellness,
    Nature,
    Mountain,
    CityView,
    Views,
    Villa,
    AdultsOnly,
    Golf,
    AllInclusive,
    Luxury,
    Romance,
    Vineyard,
    Culture,
    LuxuryName,
    TopCity,
}

impl KeywordClass {
    pub fn all() -> &'static [KeywordClass] {
        &[
            Self::Beach,
            Self::Island,
            Self::InfinityPool,
            Self::RooftopPool,
            Self::PrivatePool,
            Self::PremiumWater,
            Self::Design,
            Self::Heritage,
            Self::Wellness,
            Self::Nature,
            Self::Mountain,
            Self::CityView,
            Self::Views,
            Self::Villa,
            Self::AdultsOnly,
            Self::Golf,
            Self::AllInclusive,
            Self::Luxury,
            Self::Romance,
            Self::Vineyard,
            Self::Culture,
            Self::LuxuryName,
            Self::TopCity,
        ]
    }

    /// Classes whose presence in a description marks a "wow" property.
    pub fn wow_classes() -> &'static [KeywordClass] {
        &[Self::Views, Self::Design, Self::Luxury, Self::Romance]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beach => "beach",
            Self::Island => "island",
            Self::InfinityPool => "infinity_pool",
            Self::RooftopPool => "rooftop_pool",
            Self::PrivatePool => "private_pool",
            Self::PremiumWater => "premium_water",
            Self::Design => "design",
            Self::Heritage => "heritage",
            Self::Wellness => "wellness",
            Self::Nature => "nature",
            Self::Mountain => "mountain",
            Self::CityView => "city_view",
            Self::Views => "views",
            Self::Villa => "villa",
            Self::AdultsOnly => "adults_only",
            Self::Golf => "golf",
            Self::AllInclusive => "all_inclusive",
            Self::Luxury => "luxury",
            Self::Romance => "romance",
            Self::Vineyard => "vineyard",
            Self::Culture => "culture",
            Self::LuxuryName => "luxury_name",
            Self::TopCity => "top_city",
        }
    }

    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

impl fmt::Display for KeywordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of keyword classes detected in one piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextSignals {
    bits: u32,
}

impl TextSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class: KeywordClass) {
        self.bits |= class.bit();
    }

    pub fn has(&self, class: KeywordClass) -> bool {
        self.bits & class.bit() != 0
    }

    /// True if any of `classes` was detected.
    pub fn has_any(&self, classes: &[KeywordClass]) -> bool {
        classes.iter().any(|c| self.has(*c))
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn union(self, other: TextSignals) -> TextSignals {
        TextSignals {
            bits: self.bits | other.bits,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = KeywordClass> + '_ {
        KeywordClass::all().iter().copied().filter(|c| self.has(*c))
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl FromIterator<KeywordClass> for TextSignals {
    fn from_iter<I: IntoIterator<Item = KeywordClass>>(iter: I) -> Self {
        let mut signals = TextSignals::new();
        for class in iter {
            signals.insert(class);
        }
        signals
    }
}

/// Free-text classification strategy.
///
/// The default implementation matches English keyword dictionaries; a smarter
/// classifier can be swapped in without touching gate or scoring logic.
pub trait SignalClassifier: Send + Sync {
    /// Detect which keyword classes occur in `text`.
    fn classify(&self, text: &str) -> TextSignals;

    /// Detect keyword classes in a hotel name. Names are matched on plain
    /// substrings; the default defers to [`SignalClassifier::classify`].
    fn classify_name(&self, name: &str) -> TextSignals {
        self.classify(name)
    }
}
