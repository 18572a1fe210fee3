mod core;
#[cfg(feature = "gui")]
mod input;

pub use crate::core::colour::hue_gradient::{HueGradient, HueGradientError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::escape::escape_time;
pub use crate::core::render::pass::{render, render_serial, render_with_workers};
pub use crate::core::render::tile_grid::{Tile, TileGrid, TILE_EDGE};

#[cfg(feature = "gui")]
pub use crate::input::gui::app::run_gui;
