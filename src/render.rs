// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The parallel render coordinator and the completion/present loop.
//!
//! A fixed pool of worker threads is spawned once, each with a static
//! interleaved assignment of blocks, and joined once.  Workers share
//! one [`RenderContext`] that serializes every pixel write behind a
//! single coarse lock; presentation runs under the same lock so it
//! never observes a torn frame.  The lock granularity is one pixel
//! write per acquisition, so contention grows with the thread count.
//!
//! A quit request stops the present loop from polling, but it never
//! cancels in-flight computation: leaving the render scope joins every
//! worker, so each one finishes its assignment and its critical
//! sections cleanly.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use itertools::iproduct;
use log::{debug, info};

use crate::color::{iteration_color, Rgb};
use crate::escape::escape;
use crate::events::EventSource;
use crate::plane::PlaneMapper;
use crate::surface::PixelSink;
use crate::tiles::BlockGrid;

/// Shared state for one render pass: the surface behind its lock and
/// the count of workers that have finished their whole assignment.
///
/// This replaces what a C rendition would keep in globals.  Workers
/// borrow it for the lifetime of the render scope, so no reference
/// counting is needed.
pub struct RenderContext<S> {
    surface: Mutex<S>,
    finished_workers: AtomicUsize,
}

impl<S: PixelSink> RenderContext<S> {
    /// Wraps a surface for shared use by the worker pool.
    pub fn new(surface: S) -> RenderContext<S> {
        RenderContext {
            surface: Mutex::new(surface),
            finished_workers: AtomicUsize::new(0),
        }
    }

    /// Writes one pixel under the shared lock.
    pub fn set_pixel(&self, x: u32, y: u32, color: Rgb) {
        self.surface.lock().unwrap().set_pixel(x, y, color);
    }

    /// Records that one worker has finished every assigned block.
    ///
    /// The surface lock is held across the increment: a reader that
    /// observes the final count has also observed every pixel write
    /// that preceded it.
    fn worker_finished(&self) {
        let _surface = self.surface.lock().unwrap();
        self.finished_workers.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of workers that have completed their assignments.
    pub fn finished_workers(&self) -> usize {
        self.finished_workers.load(Ordering::SeqCst)
    }

    /// Runs `f` against the surface while holding the shared lock.
    /// Used by the present step so presentation is serialized against
    /// concurrent pixel writes.
    pub fn with_surface<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        let surface = self.surface.lock().unwrap();
        f(&surface)
    }

    /// Reclaims the surface once rendering is over.
    pub fn into_surface(self) -> S {
        self.surface.into_inner().unwrap()
    }
}

/// Renders the view by striding square blocks across a fixed pool of
/// worker threads.
pub struct TiledRenderer {
    mapper: PlaneMapper,
    grid: BlockGrid,
    max_iterations: u32,
    threads: usize,
    poll_interval: Duration,
}

impl TiledRenderer {
    /// A renderer for the given raster, iteration cap and pool size.
    /// `poll_interval` is the pause between presentation polls.
    pub fn new(
        width: u32,
        height: u32,
        max_iterations: u32,
        threads: usize,
        poll_interval: Duration,
    ) -> TiledRenderer {
        TiledRenderer {
            mapper: PlaneMapper::new(width, height),
            grid: BlockGrid::new(width, threads),
            max_iterations,
            threads,
            poll_interval,
        }
    }

    /// Runs the full render: dispatches the worker pool, then drives
    /// the completion/present loop on the calling thread.
    ///
    /// Each tick of the loop drains quit events, presents the surface
    /// under the shared lock via `present`, and exits once a quit was
    /// requested or every worker has finished.  Returning from this
    /// method implies all workers have been joined, even when the exit
    /// was a quit request arriving mid-render.
    pub fn render<S, E, F>(&self, ctx: &RenderContext<S>, events: &mut E, mut present: F)
    where
        S: PixelSink + Send,
        E: EventSource,
        F: FnMut(&S),
    {
        info!(
            "dispatching {} workers over {} blocks of {}x{} pixels",
            self.threads,
            self.grid.total_blocks(),
            self.grid.block_size(),
            self.grid.block_size(),
        );
        crossbeam::scope(|spawner| {
            for thread_id in 0..self.threads {
                spawner.spawn(move |_| {
                    self.render_assignment(ctx, thread_id);
                });
            }

            loop {
                let quit_requested = events.poll_quit_requested();
                let all_finished = ctx.finished_workers() == self.threads;
                ctx.with_surface(|surface| present(surface));
                if quit_requested {
                    info!("quit requested; waiting for workers to finish");
                    break;
                }
                if all_finished {
                    info!("all {} workers finished", self.threads);
                    break;
                }
                thread::sleep(self.poll_interval);
            }
        })
        .unwrap();
    }

    /// One worker's share: every assigned block in index order, pixels
    /// row-major within each block.
    fn render_assignment<S: PixelSink>(&self, ctx: &RenderContext<S>, thread_id: usize) {
        let size = self.grid.block_size();
        let mut blocks = 0;
        for index in self.grid.assigned(thread_id, self.threads) {
            let (left, top) = self.grid.origin(index);
            for (y, x) in iproduct!(top..top + size, left..left + size) {
                let c = self.mapper.pixel_to_point(x, y);
                let n = escape(c, self.max_iterations);
                ctx.set_pixel(x, y, iteration_color(n, self.max_iterations));
            }
            blocks += 1;
        }
        ctx.worker_finished();
        debug!("worker {} finished {} blocks", thread_id, blocks);
    }

    /// Single-threaded render of the same block coverage, in plain
    /// block order.  The baseline for checking that the parallel
    /// output is identical regardless of thread count.
    pub fn render_reference<S: PixelSink>(&self, surface: &mut S) {
        let size = self.grid.block_size();
        for index in 0..self.grid.total_blocks() {
            let (left, top) = self.grid.origin(index);
            for (y, x) in iproduct!(top..top + size, left..left + size) {
                let c = self.mapper.pixel_to_point(x, y);
                let n = escape(c, self.max_iterations);
                surface.set_pixel(x, y, iteration_color(n, self.max_iterations));
            }
        }
    }
}
