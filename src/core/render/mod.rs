mod painter;
pub mod pass;
pub mod tile_grid;
