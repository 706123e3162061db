//! Configuration errors and degenerate maps
//!
//! Invalid parameters are refused before anything is computed; degenerate
//! axes still produce a (small) map plus an advisory.
//!
//! ```bash
//! cargo run -p occugrid-core --example 03_config_errors
//! ```

use occugrid_core::{GridMapper, MapperConfig};

fn main() {
    let attempts = [
        ("p_init = 1", MapperConfig::default().with_p_init(1.0)),
        ("p_free_before = 0", MapperConfig::default().with_p_free_before(0.0)),
        ("cell_size = 0", MapperConfig::default().with_cell_size(0.0)),
        ("negative reading", MapperConfig::default().with_measurement(-4.0)),
        ("map shorter than a cell", MapperConfig::default().with_map_length(5.0)),
        ("negative map length", MapperConfig::default().with_map_length(-1.0)),
        ("cell_size = 1e-9", MapperConfig::default().with_cell_size(1e-9)),
    ];

    for (label, config) in attempts {
        match GridMapper::new(config) {
            Ok(mapper) => {
                let map = mapper.run();
                match map.advisory() {
                    Some(advisory) => {
                        println!("{:<24} ok, {} cell(s): {}", label, map.len(), advisory)
                    }
                    None => println!("{:<24} ok, {} cell(s)", label, map.len()),
                }
            }
            Err(err) => println!(
                "{:<24} rejected ({}): {}",
                label,
                err.parameter().unwrap_or("-"),
                err
            ),
        }
    }
}
