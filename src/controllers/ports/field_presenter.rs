use std::io::{self, Write};

use crate::core::data::field::Field;
use crate::input::cli::args::RenderRequest;

/// Renderer collaborator: consumes a finished field and writes a
/// representation of it.
pub trait FieldPresenterPort {
    fn present(&self, request: &RenderRequest, field: &Field, out: &mut dyn Write) -> io::Result<()>;
}
