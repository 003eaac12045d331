//! 8x8 tile extraction and plane reconstruction
//!
//! Planes are split into row-major tiles of 8x8 samples. Tiles that hang
//! over the right or bottom edge are padded with zeros; the padded samples
//! are never copied back, so the padding rule stays consistent between the
//! two directions.

use imgref::{ImgRef, ImgRefMut};

use crate::consts::{DCTSIZE, DCTSIZE2};

/// Number of 8-sample tiles covering `len` samples
#[inline]
#[must_use]
pub fn tiles_over(len: usize) -> usize {
    (len + DCTSIZE - 1) / DCTSIZE
}

/// Number of 8x8 tiles covering a `width` x `height` plane
#[inline]
#[must_use]
pub fn tile_count(width: usize, height: usize) -> usize {
    tiles_over(width) * tiles_over(height)
}

/// Extract all 8x8 tiles of a plane into one contiguous buffer.
///
/// The result holds `tile_count(w, h) * 64` samples: tiles in row-major
/// tile order, each tile 8 rows of 8 samples. Out-of-bounds positions are
/// zero.
#[must_use]
pub fn extract_tiles(plane: ImgRef<'_, i32>) -> Vec<i32> {
    let (w, h) = (plane.width(), plane.height());
    let tiles_x = tiles_over(w);
    let mut tiles = vec![0i32; tile_count(w, h) * DCTSIZE2];

    for (py, row) in plane.rows().enumerate() {
        let tile_row = py / DCTSIZE;
        let y_in_tile = py % DCTSIZE;
        for tile_col in 0..tiles_x {
            let x0 = tile_col * DCTSIZE;
            let copy_w = DCTSIZE.min(w - x0);
            let dst = (tile_row * tiles_x + tile_col) * DCTSIZE2 + y_in_tile * DCTSIZE;
            tiles[dst..dst + copy_w].copy_from_slice(&row[x0..x0 + copy_w]);
        }
    }
    tiles
}

/// Copy tile samples back into a plane, the inverse of [`extract_tiles`].
///
/// Only in-bounds samples are written; whatever a transform left in the
/// padding area of an edge tile is discarded.
pub fn reconstruct_plane(tiles: &[i32], mut plane: ImgRefMut<'_, i32>) {
    let (w, h) = (plane.width(), plane.height());
    let tiles_x = tiles_over(w);
    debug_assert_eq!(tiles.len(), tile_count(w, h) * DCTSIZE2);

    for (py, row) in plane.rows_mut().enumerate() {
        let tile_row = py / DCTSIZE;
        let y_in_tile = py % DCTSIZE;
        for tile_col in 0..tiles_x {
            let x0 = tile_col * DCTSIZE;
            let copy_w = DCTSIZE.min(w - x0);
            let src = (tile_row * tiles_x + tile_col) * DCTSIZE2 + y_in_tile * DCTSIZE;
            row[x0..x0 + copy_w].copy_from_slice(&tiles[src..src + copy_w]);
        }
    }
}
