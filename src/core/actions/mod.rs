pub mod cancellation;
pub mod generate_field;
