// File: crates/overlay-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Number of horizontal gridlines on the value axis.
pub const TICK_COUNT: usize = 5;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
