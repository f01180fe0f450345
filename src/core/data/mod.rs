pub mod complex;
pub mod field;
pub mod render_config;
pub mod sample_grid;
pub mod viewport;
