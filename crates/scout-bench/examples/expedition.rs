//! Run one mission end to end and print what happened.
//!
//! `RUST_LOG=scout_mission=info cargo run -p scout-bench --example expedition [seed]`
//!
//! Without a seed the open-field profile is used.

use scout_bench::{islands_profile, open_field_profile, Expedition};
use scout_core::CellState;

fn main() {
    env_logger::init();

    let seed = std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok());
    let (terrain, config) = match seed {
        Some(seed) => islands_profile(seed),
        None => open_field_profile(),
    };
    println!("=== Scout Expedition ({}) ===\n", match seed {
        Some(s) => format!("islands, seed {s}"),
        None => "open field".to_string(),
    });

    let mut expedition = match Expedition::new(terrain, config, 1) {
        Ok(ex) => ex,
        Err(e) => {
            eprintln!("setup failed: {e}");
            std::process::exit(1);
        }
    };

    let result = expedition.run_until_converged(10_000);
    let mission = expedition.controller();
    match result {
        Ok(ticks) => println!("converged on {:?} after {ticks} ticks", mission.goal()),
        Err(e) => println!("stopped after {} ticks: {e}", expedition.ticks()),
    }

    let m = mission.metrics();
    println!("\nphase:             {}", mission.state());
    println!("cells known:       {}", mission.grid().known_count());
    println!("cells visited:     {}", mission.visited().len());
    let finishes: Vec<_> = mission.grid().cells_with(CellState::Finish).collect();
    println!("finish cells seen: {finishes:?}");
    println!("frontier left:     {}", mission.frontier().len());
    println!("decisions:         {}", m.decisions);
    println!("direct moves:      {}", m.direct_moves);
    println!("route steps:       {}", m.route_steps);
    println!("collision stays:   {}", m.collision_stays);
    println!("frontier searches: {}", m.frontier_searches);
    println!("goal searches:     {}", m.goal_searches);
    println!("nodes expanded:    {}", m.nodes_expanded);
    println!("\nfinal perception:\n{}", mission.grid());
}
