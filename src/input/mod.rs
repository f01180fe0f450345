//! Input adapters: turn command-line input into render requests.

pub mod cli;
