use std::sync::Arc;

use proptest::prelude::*;
use test_fixtures::curatable_hotel;
use wander_core::config::WanderConfig;
use wander_core::models::GateId;
use wander_gates::{GateEvaluator, GateInput, HotelGate, PriceGate};
use wander_signals::SignalExtractor;

fn arb_currency() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("USD"), Just("EUR"), Just("GBP"), Just("JPY")]
}

// ── Wow override ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn wow_hotels_always_pass_price(amount in 0.0f64..100_000.0, currency in arb_currency()) {
        let config = Arc::new(WanderConfig::default());
        let hotel = curatable_hotel("p1")
            .amenity("GOLF")
            .clear_offers()
            .price(&format!("{amount:.2}"), currency)
            .build();
        let signals = SignalExtractor::new(config.clone()).extract_hotel(&hotel);
        prop_assert!(signals.has_wow_amenities);
        let result = PriceGate.evaluate(&GateInput::new(&hotel, &signals, &config));
        prop_assert!(result.passed);
    }
}

// ── Gate monotonicity ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn photo_failures_never_reach_later_gates(
        photos in 0usize..3,
        rating in prop::option::of(0.0f64..5.0),
    ) {
        let config = Arc::new(WanderConfig::default());
        let mut builder = curatable_hotel("p1").clear_photos().plain_photos(photos);
        builder = match rating {
            Some(r) => builder.rating(r),
            None => builder.no_rating(),
        };
        let hotel = builder.build();
        let signals = SignalExtractor::new(config.clone()).extract_hotel(&hotel);
        let verdict = GateEvaluator::new().evaluate(&GateInput::new(&hotel, &signals, &config));

        prop_assert_eq!(verdict.failed_gate(), Some(GateId::Photo));
        prop_assert!(verdict.passed.is_empty());
    }
}
