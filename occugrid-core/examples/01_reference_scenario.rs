//! Reference scenario: one reading at 51 cm on a 100 cm axis
//!
//! Prints the posterior occupancy of each 20 cm cell.
//!
//! ```bash
//! cargo run -p occugrid-core --example 01_reference_scenario
//! ```

use occugrid_core::{GridMapper, MapperConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = MapperConfig::default();
    println!("Readings: {:?}", config.measurements);
    println!(
        "p_free_before={}  p_occ_after={}  p_init={}  range_limit={}",
        config.p_free_before, config.p_occ_after, config.p_init, config.sensor_range_limit
    );

    let mapper = GridMapper::new(config)?;
    let map = mapper.run();

    println!("\n{:>10} {:>10} {:>12}", "cell [cm]", "log-odds", "P(occupied)");
    for cell in &map {
        println!("{:>10.1} {:>10.4} {:>12.4}", cell.position, cell.log_odds, cell.probability);
    }

    Ok(())
}
