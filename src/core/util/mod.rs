pub mod apply_zoom;
pub mod build_grid;
