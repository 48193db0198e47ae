pub mod render;
pub mod focus;
