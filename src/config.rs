//! Fixed configuration for the renderer and its window.
//!
//! Everything here is chosen at build time; nothing is configurable at
//! runtime.

use std::time::Duration;

/// Raster width in pixels.
pub const WIDTH: u32 = 1000;

/// Raster height in pixels.
pub const HEIGHT: u32 = 1000;

/// Iteration cap for the escape-time evaluator.
pub const MAX_ITERATIONS: u32 = 2000;

/// Number of worker threads in the render pool.
pub const NUM_THREADS: usize = 32;

/// Pause between presentation polls, to bound the CPU cost of the
/// present loop.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Title of the display window.
pub const WINDOW_TITLE: &str = "Mandelbrot";
