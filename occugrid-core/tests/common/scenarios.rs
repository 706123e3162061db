//! Mapping scenarios with expectations derived by hand

use occugrid_core::MapperConfig;

use super::logit;

/// A configuration together with the expected final log-odds per cell
pub struct Scenario {
    pub name: &'static str,
    pub config: MapperConfig,
    pub expected_positions: Vec<f64>,
    pub expected_log_odds: Vec<f64>,
}

/// Single reading at 51 on a 0..=100 axis with 20-unit cells
pub fn reference() -> Scenario {
    let init = logit(0.8);
    let free = 2.0 * init + logit(0.1);
    let occupied = 2.0 * init + logit(0.6);

    Scenario {
        name: "reference",
        config: MapperConfig::default(),
        expected_positions: vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0],
        expected_log_odds: vec![free, free, free, occupied, occupied, init],
    }
}

/// Two readings; the second one extends the perceptual field
pub fn two_readings() -> Scenario {
    let init = logit(0.8);
    let step = init; // -prior adds init once more per update
    let free = logit(0.1);
    let occupied = logit(0.6);

    // Readings 30 and 55, limit 30: fields end at 60 and 85
    //   x:   0     20    40    60    80    100
    //  z=30 free  free  occ   occ   -     -
    //  z=55 free  free  free  occ   occ   -
    let expected_log_odds = vec![
        init + 2.0 * (step + free),
        init + 2.0 * (step + free),
        init + (step + occupied) + (step + free),
        init + 2.0 * (step + occupied),
        init + (step + occupied),
        init,
    ];

    Scenario {
        name: "two_readings",
        config: MapperConfig::default().with_measurements([30.0, 55.0]),
        expected_positions: vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0],
        expected_log_odds,
    }
}

/// Reading exactly on a cell center, field ending exactly on a cell center
pub fn on_grid_boundaries() -> Scenario {
    let init = logit(0.8);
    let free = 2.0 * init + logit(0.1);
    let occupied = 2.0 * init + logit(0.6);

    // z = 40 lands on a cell (occupied branch); 40 + 40 = 80 is in range
    Scenario {
        name: "on_grid_boundaries",
        config: MapperConfig::default()
            .with_measurements([40.0])
            .with_sensor_range_limit(40.0),
        expected_positions: vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0],
        expected_log_odds: vec![free, free, occupied, occupied, occupied, init],
    }
}

/// Every scenario above
pub fn all() -> Vec<Scenario> {
    vec![reference(), two_readings(), on_grid_boundaries()]
}
