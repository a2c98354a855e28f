//! Print hull summaries for a few random point clouds.
//!
//! Usage:
//!   cargo run -p hullcalc --example random_hull -- [seed]

use hullcalc::prelude::*;
use hullcalc::Session;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let mut tok = ReplayToken::new(seed);
    for count in [3usize, 8, 30] {
        let cfg = CloudCfg {
            count,
            ..CloudCfg::default()
        };
        let mut session = Session::new();
        for p in draw_cloud(cfg, tok) {
            session.add(p.x, p.y);
        }
        match session.calculate() {
            Ok(report) => println!(
                "cloud of {count} (hull {}):\n{}\n",
                report.hull.len(),
                report.summary()
            ),
            Err(e) => eprintln!("cloud of {count}: {e}"),
        }
        tok = tok.next();
    }
}
