//! Headless kernel pass: cast one frame and print the per-column hits.
//!
//! ```bash
//! cargo run --bin cast_dump -- --width 16 --pos-x 4.5 --pos-y 2.5 --dir-x 0 --dir-y 1
//! ```

use anyhow::Context;
use clap::Parser;

use gridcast::{config::Config, engine::Raycaster};

fn main() -> anyhow::Result<()> {
    let cfg = Config::parse();
    cfg.init_logging();

    let map = cfg
        .load_map()
        .with_context(|| format!("cannot load map {:?}", cfg.map))?;
    let camera = cfg.camera();
    tracing::debug!(?camera, "casting");

    let mut raycaster = Raycaster::new(cfg.width, cfg.dispatch());
    let hits = raycaster.cast_frame(&camera, &map);

    println!("column\tdistance\tside\ttile");
    for (column, hit) in hits.iter().enumerate() {
        if hit.is_miss() {
            println!("{column}\tmiss\t-\t-");
        } else {
            println!(
                "{column}\t{:.6}\t{}\t{}",
                hit.distance, hit.side as u8, hit.tile
            );
        }
    }

    let misses = hits.iter().filter(|h| h.is_miss()).count();
    tracing::info!(columns = hits.len(), misses, "frame cast");
    Ok(())
}
