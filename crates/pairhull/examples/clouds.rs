//! Print hulls of a few sampled clouds for a quick sanity check.
//!
//! Usage:
//!   cargo run -p pairhull --example clouds -- 8
//!
//! Each line shows the hull size the sampler placed, the indices found, and
//! whether the chain closed.

use pairhull::prelude::*;

fn main() {
    let hull_count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(8);
    let cfg = CloudCfg {
        hull_count,
        interior_count: hull_count,
        ..CloudCfg::default()
    };
    for index in 0..5 {
        let cloud = match draw_cloud(cfg, ReplayToken { seed: 2025, index }) {
            Ok(c) => c,
            Err(err) => {
                eprintln!("usage: clouds [hull_count >= 3] ({err})");
                return;
            }
        };
        match hull_with_defaults(&cloud.points) {
            Ok(hull) => println!(
                "sample {index}: H={}, found={} [{hull}] {}",
                cloud.hull_count,
                hull.len(),
                hull.closure
            ),
            Err(err) => println!("sample {index}: {err}"),
        }
    }
}
