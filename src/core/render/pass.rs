use crate::core::colour::hue_gradient::HueGradient;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::escape::escape_time;
use crate::core::render::painter::TilePainter;
use crate::core::render::tile_grid::{Tile, TileGrid};
use log::debug;
use std::num::NonZeroU32;
use std::thread;
use std::time::Instant;

/// Renders one complete frame into the buffer.
///
/// Partitions the image into tiles, distributes them round-robin across one
/// worker thread per available execution unit, and blocks until every worker
/// has finished. On return every pixel of the buffer has been overwritten;
/// the result is identical to `render_serial` for the same inputs.
///
/// The caller must not start a second pass against the same buffer while
/// one is in flight; the exclusive borrow enforces this within one thread.
pub fn render(viewport: &Viewport, gradient: &HueGradient, buffer: &mut PixelBuffer) {
    render_with_workers(viewport, gradient, buffer, available_workers());
}

/// `render` with an explicit worker count.
pub fn render_with_workers(
    viewport: &Viewport,
    gradient: &HueGradient,
    buffer: &mut PixelBuffer,
    workers: NonZeroU32,
) {
    let width = buffer.width();
    let height = buffer.height();
    let grid = TileGrid::new(width, height);

    // No worker should start with an empty assignment.
    let workers = workers.get().min(grid.total_tiles());

    let start = Instant::now();
    let painter = TilePainter::new(buffer.pixels_mut(), width, height);

    thread::scope(|scope| {
        for worker in 0..workers {
            let painter = &painter;
            scope.spawn(move || {
                for tile in grid.assigned_tiles(worker, workers) {
                    render_tile(viewport, gradient, painter, tile, width, height);
                }
            });
        }
    });

    debug!(
        "render pass: {}x{} px, {} tiles, {} workers, {:.1?}",
        width,
        height,
        grid.total_tiles(),
        workers,
        start.elapsed()
    );
}

/// Single-threaded render of the same frame. The parallel path must be a
/// pure performance optimization over this.
pub fn render_serial(viewport: &Viewport, gradient: &HueGradient, buffer: &mut PixelBuffer) {
    let width = buffer.width();
    let height = buffer.height();
    let pixels = buffer.pixels_mut();

    for y in 0..height {
        for x in 0..width {
            pixels[(y * width + x) as usize] =
                colour_at(viewport, gradient, x, y, width, height);
        }
    }
}

fn render_tile(
    viewport: &Viewport,
    gradient: &HueGradient,
    painter: &TilePainter<'_>,
    tile: Tile,
    width: u32,
    height: u32,
) {
    for y in tile.top..tile.bottom {
        for x in tile.left..tile.right {
            painter.set(x, y, colour_at(viewport, gradient, x, y, width, height));
        }
    }
}

fn colour_at(
    viewport: &Viewport,
    gradient: &HueGradient,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Colour {
    let (re, im) = viewport.map_pixel(x, y, width, height);
    gradient.colour_for(escape_time(re, im, gradient.max_iterations()))
}

fn available_workers() -> NonZeroU32 {
    thread::available_parallelism()
        .ok()
        .and_then(|n| NonZeroU32::new(n.get() as u32))
        .unwrap_or(NonZeroU32::MIN)
}
