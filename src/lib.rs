#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tiled parallel Mandelbrot renderer
//!
//! The Mandelbrot set is rendered by iterating `z = z * z + c` for the
//! complex point `c` under each pixel and counting how many steps the
//! orbit takes to escape a magnitude of 2, capped at a maximum.  That
//! count picks the pixel's color; points whose orbits never escape are
//! drawn black.
//!
//! The raster is cut into square blocks and the blocks are dealt out to
//! a fixed pool of worker threads by round-robin striding, so every
//! thread knows its whole assignment up front and no queue or
//! rebalancing is needed.  All workers write into one shared surface
//! through a single coarse lock, and the same lock serializes
//! presentation so a frame is never observed half-written.

pub mod color;
pub mod config;
pub mod error;
pub mod escape;
pub mod events;
pub mod plane;
pub mod render;
pub mod surface;
pub mod tiles;

pub use color::{iteration_color, Rgb};
pub use error::InitError;
pub use events::EventSource;
pub use plane::PlaneMapper;
pub use render::{RenderContext, TiledRenderer};
pub use surface::{FrameBuffer, PixelSink};
pub use tiles::BlockGrid;
