//! Print the step-event trace for a four-point scenario.
//!
//! Run: `cargo run -p closest-pair --example trace_scenario`

use closest_pair::prelude::*;

fn main() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(3.0, 4.0),
        Point::new(1.0, 1.0),
        Point::new(100.0, 100.0),
    ];
    let mut rec = Recorder::new();
    let sol = closest_pair_with(&points, EngineCfg::default(), &mut rec)
        .expect("four points always have a closest pair");
    for (k, e) in rec.events.iter().enumerate() {
        println!("{k:>3} {e:?}");
    }
    println!(
        "closest=({}, {})-({}, {}) distance={:.6} frames={} strip_comparisons={}",
        sol.pair.a.x,
        sol.pair.a.y,
        sol.pair.b.x,
        sol.pair.b.y,
        sol.distance,
        sol.stats.frames,
        sol.stats.strip_comparisons
    );
}
