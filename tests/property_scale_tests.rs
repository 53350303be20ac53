use folio_chart::core::{Scale, ScaleMode, value_ticks};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;
        let scale = Scale::linear((domain_start, domain_end), (0.0, 2048.0));

        let recovered = scale.invert(scale.scale(value));
        prop_assert!((recovered - value).abs() <= 1e-7);
    }

    #[test]
    fn symlog_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;
        let scale = Scale::symlog((domain_start, domain_end), (1024.0, 0.0));

        let recovered = scale.invert(scale.scale(value));
        prop_assert!((recovered - value).abs() <= 1e-6 * value.abs().max(1.0));
    }

    #[test]
    fn value_ticks_are_ordered_with_unique_pixels(
        domain_start in -100_000.0f64..100_000.0,
        domain_span in 0.01f64..100_000.0,
        height in 20.0f64..2000.0,
        logarithmic in any::<bool>()
    ) {
        let mode = if logarithmic { ScaleMode::Logarithmic } else { ScaleMode::Linear };
        let scale = Scale::new(mode, (domain_start, domain_start + domain_span), (height, 0.0));
        let ticks = value_ticks(scale, 50.0);

        for pair in ticks.windows(2) {
            prop_assert!(pair[0] < pair[1]);
            prop_assert!(scale.scale(pair[0]).round() != scale.scale(pair[1]).round());
        }
    }
}
