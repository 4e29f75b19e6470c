use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use stockplot::core::{LabelAxis, OhlcRecord, OhlcSeries};

fn records_from_parts(parts: &[(f64, f64, f64, f64)]) -> Vec<OhlcRecord> {
    parts
        .iter()
        .map(|(base, spread, open_factor, close_factor)| {
            let low = *base;
            let high = base + spread;
            OhlcRecord::new(low + open_factor * spread, high, low, low + close_factor * spread)
        })
        .collect()
}

proptest! {
    #[test]
    fn local_range_stays_within_global_bounds(
        parts in prop::collection::vec(
            (-1_000.0f64..1_000.0, 0.01f64..100.0, 0.0f64..1.0, 0.0f64..1.0),
            1..40,
        ),
        start in -50.0f64..50.0,
        span in 0.0f64..50.0,
    ) {
        let records = records_from_parts(&parts);
        let series = OhlcSeries::from_records(&records, LabelAxis::None).expect("valid series");

        let global_low = records.iter().map(|r| r.low).fold(f64::INFINITY, f64::min);
        let global_high = records.iter().map(|r| r.high).fold(f64::NEG_INFINITY, f64::max);

        let (min, max) = series.local_range(start, start + span);
        prop_assert!(min <= max);
        prop_assert!(min >= global_low - 1e-9);
        prop_assert!(max <= global_high + 1e-9);
    }

    #[test]
    fn widening_the_window_never_shrinks_the_range(
        parts in prop::collection::vec(
            (-1_000.0f64..1_000.0, 0.01f64..100.0, 0.0f64..1.0, 0.0f64..1.0),
            1..40,
        ),
        start in -50.0f64..50.0,
        span in 0.0f64..50.0,
    ) {
        let records = records_from_parts(&parts);
        let series = OhlcSeries::from_records(&records, LabelAxis::None).expect("valid series");

        let (inner_min, inner_max) = series.local_range(start, start + span);
        let (outer_min, outer_max) = series.local_range(start - 1.0, start + span + 1.0);
        prop_assert!(outer_min <= inner_min + 1e-9);
        prop_assert!(outer_max >= inner_max - 1e-9);
    }

    #[test]
    fn month_ticks_walk_forward_from_the_first_ordinal(
        year in 2000i32..2030,
        month in 1u32..13,
        day_steps in prop::collection::vec(1u64..25, 1..60),
    ) {
        let start = NaiveDate::from_ymd_opt(year, month, 1).expect("valid date");
        let mut dates = Vec::with_capacity(day_steps.len());
        let mut current = start;
        for step in day_steps {
            dates.push(current);
            current = current.checked_add_days(Days::new(step)).expect("date in range");
        }
        let count = dates.len();
        let ticks = LabelAxis::from_dates(dates).month_boundary_ticks();

        prop_assert!(!ticks.is_empty());
        prop_assert_eq!(ticks[0].ordinal, 0);
        prop_assert!(ticks.len() <= count);
        for pair in ticks.windows(2) {
            prop_assert!(pair[0].ordinal < pair[1].ordinal);
            // Zero-padded YYYY-MM labels order lexically.
            prop_assert!(pair[0].label < pair[1].label);
        }
    }
}
