use std::fmt;

use serde::{Deserialize, Serialize};

/// The four hard eligibility gates, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GateId {
    Photo,
    Brand,
    Quality,
    Price,
}

impl GateId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Brand => "brand",
            Self::Quality => "quality",
            Self::Price => "price",
        }
    }

    pub fn all() -> &'static [GateId] {
        &[Self::Photo, Self::Brand, Self::Quality, Self::Price]
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
