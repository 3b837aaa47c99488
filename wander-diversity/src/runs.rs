//! Tracking of the trailing run of equal keys.

/// The key of the last emitted card and how many consecutive cards shared it,
/// for both city and brand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    city: Option<(String, usize)>,
    brand: Option<(String, usize)>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if emitting `city` next would make its run longer than `max_run`.
    pub fn city_blocked(&self, city: &str, max_run: usize) -> bool {
        blocked(&self.city, Some(city), max_run)
    }

    /// Brandless cards are never blocked.
    pub fn brand_blocked(&self, brand: Option<&str>, max_run: usize) -> bool {
        blocked(&self.brand, brand, max_run)
    }

    pub fn push(&mut self, city: &str, brand: Option<&str>) {
        advance(&mut self.city, Some(city));
        advance(&mut self.brand, brand);
    }

    pub fn city_run(&self) -> usize {
        self.city.as_ref().map_or(0, |(_, n)| *n)
    }

    pub fn brand_run(&self) -> usize {
        self.brand.as_ref().map_or(0, |(_, n)| *n)
    }

    pub fn last_city(&self) -> Option<(&str, usize)> {
        self.city.as_ref().map(|(k, n)| (k.as_str(), *n))
    }

    pub fn last_brand(&self) -> Option<(&str, usize)> {
        self.brand.as_ref().map(|(k, n)| (k.as_str(), *n))
    }
}

fn blocked(run: &Option<(String, usize)>, key: Option<&str>, max_run: usize) -> bool {
    match (run, key) {
        (Some((last, n)), Some(key)) => last == key && *n >= max_run,
        _ => false,
    }
}

fn advance(run: &mut Option<(String, usize)>, key: Option<&str>) {
    *run = match (run.take(), key) {
        (Some((last, n)), Some(key)) if last == key => Some((last, n + 1)),
        (_, Some(key)) => Some((key.to_string(), 1)),
        (_, None) => None,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_extend_and_reset() {
        let mut state = RunState::new();
        state.push("paris", Some("RZ"));
        state.push("paris", Some("RZ"));
        assert_eq!(state.city_run(), 2);
        assert!(state.city_blocked("paris", 2));
        assert!(!state.city_blocked("rome", 2));
        assert!(state.brand_blocked(Some("RZ"), 2));

        state.push("rome", None);
        assert_eq!(state.city_run(), 1);
        assert_eq!(state.brand_run(), 0);
        assert!(!state.brand_blocked(Some("RZ"), 2));
        assert!(!state.brand_blocked(None, 1));
        assert_eq!(state.last_city(), Some(("rome", 1)));
        assert_eq!(state.last_brand(), None);
    }
}
