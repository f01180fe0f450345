pub mod ascii;
pub mod summary;
