//! Collapse watch: step a terrain to its end and show every frame.
//!
//! Demonstrates:
//!   1. Building a terrain and reading its forecast
//!   2. Stepping the erosion rule one step at a time
//!   3. Refreshing and rendering the connectivity witness
//!
//! Run with:
//!   cargo run --example collapse_watch

use karst_io::{render_cells, render_witness};
use karst_test_utils::ridgeline;

fn main() {
    let mut terrain = ridgeline();

    let forecast = terrain.predict_collapse();
    println!("forecast: {forecast}\n");

    println!("step 0 ({} solid cells)", terrain.solid_count());
    println!("{}\n", render_witness(&terrain));

    while !terrain.is_collapsed() {
        let report = terrain.step();
        terrain.refresh_witness();
        println!("step {} (eroded {})", report.step, report.eroded);
        println!("{}\n", render_witness(&terrain));
    }

    println!("collapsed at step {}", terrain.step_count());
    println!("final cells:\n{}", render_cells(&terrain));
}
