pub mod colour;
pub mod data;
pub mod escape;
pub mod render;
