//! Square-block partitioning of the raster.
//!
//! The raster is divided into a grid of equal square blocks sized from
//! the thread count, and each worker owns the interleaved stride of
//! block indices `{i, i+T, i+2T, ...}`.  The assignment is fixed before
//! any work starts; nothing is rebalanced.
//!
//! When the width does not divide evenly, trailing pixels beyond
//! `blocks_per_row * block_size` fall outside every block and are never
//! rendered.  The same happens along rows when the thread count is not
//! a perfect square.  That margin is a deliberate property of this
//! partition scheme and the tests pin it down.

/// Fixed decomposition of a raster into equal square blocks.
#[derive(Copy, Clone, Debug)]
pub struct BlockGrid {
    block_size: u32,
    blocks_per_row: u32,
}

impl BlockGrid {
    /// Splits a raster `width` pixels across into square blocks sized
    /// for `threads` workers: `block_size = floor(width / sqrt(threads))`.
    pub fn new(width: u32, threads: usize) -> BlockGrid {
        assert!(threads > 0, "at least one worker thread is required");
        let block_size = (f64::from(width) / (threads as f64).sqrt()) as u32;
        assert!(block_size > 0, "thread count too large for raster width");
        BlockGrid {
            block_size,
            blocks_per_row: width / block_size,
        }
    }

    /// Side length of one block, in pixels.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Number of block columns in the grid.
    pub fn blocks_per_row(&self) -> u32 {
        self.blocks_per_row
    }

    /// Total number of blocks in the grid.
    pub fn total_blocks(&self) -> usize {
        (self.blocks_per_row * self.blocks_per_row) as usize
    }

    /// Top-left pixel of the block at `index`.
    pub fn origin(&self, index: usize) -> (u32, u32) {
        let index = index as u32;
        (
            (index % self.blocks_per_row) * self.block_size,
            (index / self.blocks_per_row) * self.block_size,
        )
    }

    /// Block indices owned by `thread_id` out of a pool of `threads`:
    /// the stride `{thread_id, thread_id + threads, ...}` bounded by the
    /// grid.  Threads past the block count get an empty sequence.
    pub fn assigned(&self, thread_id: usize, threads: usize) -> impl Iterator<Item = usize> {
        (thread_id..self.total_blocks()).step_by(threads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dimensions_match_the_worked_example() {
        // 1000 wide, 32 threads: floor(1000 / sqrt(32)) = 176.
        let grid = BlockGrid::new(1000, 32);
        assert_eq!(grid.block_size(), 176);
        assert_eq!(grid.blocks_per_row(), 5);
        assert_eq!(grid.total_blocks(), 25);
    }

    #[test]
    fn block_origins_walk_the_grid_row_major() {
        let grid = BlockGrid::new(1000, 32);
        assert_eq!(grid.origin(0), (0, 0));
        assert_eq!(grid.origin(4), (704, 0));
        assert_eq!(grid.origin(7), (352, 176));
        assert_eq!(grid.origin(24), (704, 704));
    }

    #[test]
    fn assignments_partition_the_grid() {
        for &(width, threads) in &[(1000, 32), (1000, 4), (100, 7), (64, 1)] {
            let grid = BlockGrid::new(width, threads);
            let mut seen: Vec<usize> = (0..threads)
                .flat_map(|id| grid.assigned(id, threads))
                .collect();
            seen.sort_unstable();
            let expected: Vec<usize> = (0..grid.total_blocks()).collect();
            assert_eq!(seen, expected, "width {} threads {}", width, threads);
        }
    }

    #[test]
    fn excess_threads_get_empty_assignments() {
        // 25 blocks, 32 threads: one block each for the first 25.
        let grid = BlockGrid::new(1000, 32);
        assert_eq!(grid.assigned(0, 32).collect::<Vec<_>>(), vec![0]);
        assert_eq!(grid.assigned(24, 32).collect::<Vec<_>>(), vec![24]);
        assert_eq!(grid.assigned(25, 32).count(), 0);
        assert_eq!(grid.assigned(31, 32).count(), 0);
    }

    #[test]
    fn small_pools_take_multiple_blocks_per_thread() {
        let grid = BlockGrid::new(1000, 4);
        assert_eq!(grid.block_size(), 500);
        assert_eq!(grid.assigned(1, 2).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn uneven_widths_leave_a_trailing_margin() {
        let grid = BlockGrid::new(1000, 32);
        // 5 * 176 = 880: the last 120 columns belong to no block.
        assert!(grid.blocks_per_row() * grid.block_size() < 1000);
    }
}
