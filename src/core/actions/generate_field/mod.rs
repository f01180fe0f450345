pub mod generate_field;
pub mod generate_field_parallel;
pub mod generate_field_serial;
pub mod ports;
