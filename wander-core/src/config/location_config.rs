use serde::{Deserialize, Serialize};

use super::defaults::strings;

/// Top-inspiration destinations matched by provider city code.
/// City names are matched through the `top_city` keyword class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub top_city_codes: Vec<String>,
}

impl LocationConfig {
    pub fn is_top_city_code(&self, code: &str) -> bool {
        let code = code.trim();
        self.top_city_codes
            .iter()
            .any(|c| c.eq_ignore_ascii_case(code))
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            top_city_codes: strings(&[
                "PAR", "ROM", "FLR", "VCE", "BCN", "LIS", "JTR", "NAP", "KIX", "TYO", "DPS",
                "MLE", "CPT", "RAK", "NYC", "REK", "ZQN", "TQO", "IST", "DBV",
            ]),
        }
    }
}
