pub mod field_controller;
