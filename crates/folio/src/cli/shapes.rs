//! Background shapes command

use folio_core::animation::ShapeGenerator;
use folio_core::error::Result;
use serde_json::json;

use crate::cli::util::rng_from_seed;

/// Handle the shapes command
pub fn handle_shapes(seed: Option<u64>, count: Option<usize>) -> Result<()> {
    let generator = count
        .map(ShapeGenerator::with_count)
        .unwrap_or_default();
    let mut rng = rng_from_seed(seed);

    let shapes = generator.generate(&mut rng);
    println!("{:#}", json!(shapes));
    Ok(())
}
