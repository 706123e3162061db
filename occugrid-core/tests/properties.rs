//! Property tests for the mapping invariants
//!
//! Uses proptest to check, over random valid configurations:
//! - cardinality and range of the output
//! - measurement-order independence
//! - log-odds / probability round trip
//! - the inverted prior convention

mod common;

use occugrid_core::{
    log_odds::{log_odds_to_probability, prior_term, probability_to_log_odds},
    GridMapper, MapperConfig,
};
use proptest::prelude::*;

fn probability() -> impl Strategy<Value = f64> {
    0.001f64..0.999
}

fn config_strategy() -> impl Strategy<Value = MapperConfig> {
    (
        probability(),
        probability(),
        probability(),
        prop::collection::vec(0.0f64..200.0, 0..12),
        -20.0f64..60.0,
        1.0f64..25.0,
        -10.0f64..200.0,
    )
        .prop_map(|(p_free, p_occ, p_init, measurements, limit, cell_size, map_length)| {
            MapperConfig {
                p_free_before: p_free,
                p_occ_after: p_occ,
                p_init,
                measurements,
                sensor_range_limit: limit,
                cell_size,
                map_length,
            }
        })
}

proptest! {
    #[test]
    fn output_matches_axis(config in config_strategy()) {
        let map_length = config.map_length;
        let mapper = GridMapper::new(config).unwrap();
        let axis = mapper.build_cell_axis();
        let map = mapper.run();

        prop_assert_eq!(map.len(), axis.len());
        prop_assert_eq!(map.advisory().is_some(), map.len() < 2);
        for (cell, position) in map.iter().zip(axis.iter()) {
            prop_assert_eq!(cell.position, position);
            prop_assert!((0.0..=1.0).contains(&cell.probability));
            prop_assert!(position <= map_length + 1e-9 * (1.0 + map_length.abs()));
        }
    }

    #[test]
    fn run_is_idempotent(config in config_strategy()) {
        let mapper = GridMapper::new(config).unwrap();
        prop_assert_eq!(mapper.run(), mapper.run());
    }

    #[test]
    fn fusion_is_order_independent(config in config_strategy(), seed in any::<u32>()) {
        let mut shuffled = config.measurements.clone();
        let mut rng = common::TestRng::new(seed);
        for i in (1..shuffled.len()).rev() {
            let j = (rng.next_u32() as usize) % (i + 1);
            shuffled.swap(i, j);
        }

        let base = GridMapper::new(config.clone()).unwrap().run_log_odds();
        let permuted = GridMapper::new(config.with_measurements(shuffled))
            .unwrap()
            .run_log_odds();

        prop_assert_eq!(base.len(), permuted.len());
        for (a, b) in base.iter().zip(&permuted) {
            prop_assert!((a - b).abs() <= 1e-9 * (1.0 + a.abs()), "{} vs {}", a, b);
        }
    }

    #[test]
    fn probability_round_trip(p in 1e-9f64..(1.0 - 1e-9)) {
        let back = log_odds_to_probability(probability_to_log_odds(p));
        prop_assert!((back - p).abs() < 1e-9);
    }

    #[test]
    fn prior_term_is_negated_log_odds(p in probability()) {
        prop_assert!((prior_term(p) + probability_to_log_odds(p)).abs() < 1e-12);
    }

    #[test]
    fn single_reading_closed_form(
        p_init in probability(),
        reading in 0.0f64..100.0,
        limit in 0.0f64..50.0,
    ) {
        let config = MapperConfig::default()
            .with_p_init(p_init)
            .with_measurements([reading])
            .with_sensor_range_limit(limit);
        let mapper = GridMapper::new(config).unwrap();
        let init = common::logit(p_init);

        for cell in &mapper.run() {
            let expected = if cell.position > reading + limit {
                init
            } else if cell.position < reading {
                2.0 * init + common::logit(0.1)
            } else {
                2.0 * init + common::logit(0.6)
            };
            prop_assert!((cell.log_odds - expected).abs() < 1e-9);
        }
    }
}
