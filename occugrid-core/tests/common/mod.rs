//! Common test utilities for integration tests
//!
//! This module provides:
//! - Tolerance assertions for log-odds and probability values
//! - Scenario fixtures with hand-computed expectations
//! - A deterministic measurement generator

#![allow(dead_code)]

use occugrid_core::MapperConfig;

pub mod scenarios;

/// Absolute tolerance for values computed with a handful of float operations
pub const TIGHT: f64 = 1e-12;

#[macro_export]
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let diff = ($actual - $expected).abs();
        if diff > $tolerance {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                $actual, $tolerance, $expected, diff
            );
        }
    };
}

#[macro_export]
macro_rules! assert_probability {
    ($value:expr) => {
        let value: f64 = $value;
        if !(0.0..=1.0).contains(&value) {
            panic!("Value {} is not a probability", value);
        }
    };
}

/// Log-odds of a probability, written out independently of the crate
pub fn logit(p: f64) -> f64 {
    (p / (1.0 - p)).ln()
}

/// Probability of a log-odds value, written out independently of the crate
pub fn sigmoid(l: f64) -> f64 {
    1.0 - 1.0 / (1.0 + l.exp())
}

/// Deterministic random number generator for tests
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        // Xorshift algorithm
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    pub fn next_f64(&mut self) -> f64 {
        (self.next_u32() >> 8) as f64 / 16777216.0
    }

    pub fn gen_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

/// Noisy readings of a wall at `wall` with uniform noise of `±noise`
pub fn noisy_readings(seed: u32, wall: f64, noise: f64, count: usize) -> Vec<f64> {
    let mut rng = TestRng::new(seed);
    (0..count)
        .map(|_| (wall + rng.gen_range(-noise, noise)).max(0.0))
        .collect()
}

/// Reference configuration with a different measurement set
pub fn with_readings(readings: &[f64]) -> MapperConfig {
    MapperConfig::default().with_measurements(readings.iter().copied())
}
