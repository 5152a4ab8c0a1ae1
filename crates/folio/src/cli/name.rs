//! Name highlight command: prints the animation frame by frame.

use std::path::Path;
use std::time::Instant;

use folio_core::animation::{NAME_INTERVAL, NameHighlighter};
use folio_core::error::Result;

use crate::cli::util::{load_config, rng_from_seed};

/// Handle the name command
pub fn handle_name(config_path: Option<&Path>, frames: u32, seed: Option<u64>) -> Result<()> {
    let config = load_config(config_path)?;
    let mut rng = rng_from_seed(seed);
    let mut highlighter = NameHighlighter::new(config.name);

    // Frames are simulated on a virtual clock rather than slept through.
    let t0 = Instant::now();
    highlighter.start(t0);
    for frame in 1..=frames {
        let now = t0 + NAME_INTERVAL * frame;
        if highlighter.poll(now, &mut rng).is_none() {
            continue;
        }
        let line: String = highlighter
            .letters()
            .map(|(c, on)| {
                if on {
                    format!("[{}]", c)
                } else {
                    c.to_string()
                }
            })
            .collect();
        println!("{}", line);
    }
    highlighter.stop();

    Ok(())
}
