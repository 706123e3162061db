//! Fusing repeated noisy readings of the same wall
//!
//! Shows how the posterior sharpens as readings accumulate, and that the
//! order in which readings arrive does not change the result.
//!
//! ```bash
//! cargo run -p occugrid-core --example 02_multiple_readings
//! ```

use occugrid_core::{GridMapper, MapperConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let readings = [49.0, 52.5, 50.0, 51.0, 48.5, 53.0];

    for count in [1, 3, readings.len()] {
        let config = MapperConfig::default()
            .with_cell_size(10.0)
            .with_measurements(readings[..count].iter().copied());
        let map = GridMapper::new(config)?.run();

        let row: Vec<String> = map
            .probabilities()
            .map(|p| format!("{:.2}", p))
            .collect();
        println!("{} reading(s): [{}]", count, row.join(" "));
    }

    let mut reversed = readings;
    reversed.reverse();
    let forward = GridMapper::new(MapperConfig::default().with_measurements(readings))?.run();
    let backward = GridMapper::new(MapperConfig::default().with_measurements(reversed))?.run();

    let max_diff = forward
        .probabilities()
        .zip(backward.probabilities())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    println!("\nMax difference after reversing reading order: {:e}", max_diff);

    Ok(())
}
