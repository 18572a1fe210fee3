use crate::core::data::colour::Colour;
use std::marker::PhantomData;

/// Shared write handle over a pixel buffer for one render pass.
///
/// Workers write concurrently through this handle without locks. That is
/// sound only under the pass's partition invariant: every pixel belongs to
/// exactly one tile, and every tile is processed by exactly one worker, so
/// no pixel is ever written by two threads and nothing reads the buffer
/// until the pass has joined all workers.
pub(crate) struct TilePainter<'a> {
    pixels: *mut Colour,
    width: u32,
    height: u32,
    _buffer: PhantomData<&'a mut [Colour]>,
}

// SAFETY: writes go through `set`, which each worker only calls for pixels
// of its own tiles; the tile partition makes all concurrent writes disjoint.
unsafe impl Send for TilePainter<'_> {}
unsafe impl Sync for TilePainter<'_> {}

impl<'a> TilePainter<'a> {
    pub(crate) fn new(pixels: &'a mut [Colour], width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);

        Self {
            pixels: pixels.as_mut_ptr(),
            width,
            height,
            _buffer: PhantomData,
        }
    }

    /// Writes one pixel. The caller must own the tile containing (x, y).
    pub(crate) fn set(&self, x: u32, y: u32, colour: Colour) {
        debug_assert!(x < self.width && y < self.height);

        let offset = (y * self.width + x) as usize;
        // SAFETY: offset is in bounds (x/y are clipped tile coordinates),
        // and the partition invariant guarantees no other thread writes it.
        unsafe {
            *self.pixels.add(offset) = colour;
        }
    }
}
