use std::io::{self, Write};

use log::info;

use crate::controllers::ports::field_presenter::FieldPresenterPort;
use crate::core::actions::generate_field::generate_field::{ExecutionMode, generate_field_with_mode};
use crate::core::data::field::Field;
use crate::core::errors::FieldError;
use crate::input::cli::args::RenderRequest;

pub struct FieldController {
    presenters: Vec<Box<dyn FieldPresenterPort>>,
    mode: ExecutionMode,
    rendered: Option<(RenderRequest, Field)>,
}

impl FieldController {
    pub fn new(mode: ExecutionMode) -> Self {
        Self {
            presenters: Vec::new(),
            mode,
            rendered: None,
        }
    }

    #[must_use]
    pub fn with_presenter(mut self, presenter: impl FieldPresenterPort + 'static) -> Self {
        self.presenters.push(Box::new(presenter));
        self
    }

    pub fn generate(&mut self, request: RenderRequest) -> Result<&Field, FieldError> {
        let config = &request.config;

        info!("Rendering preset '{}' ({:?})", request.name, self.mode);
        info!("Requested viewport: {}", request.viewport);
        info!(
            "Image size: {}x{}, max iterations: {}, escape radius: {}, zoom: {}, smoothing: {}",
            config.width,
            config.height,
            config.max_iter,
            config.escape_radius,
            config.zoom,
            config.smoothing
        );

        let field = generate_field_with_mode(config, request.viewport, self.mode)?;

        info!("Effective viewport: {}", field.viewport());

        Ok(&self.rendered.insert((request, field)).1)
    }

    pub fn write(&self, out: &mut dyn Write) -> io::Result<()> {
        if let Some((request, field)) = &self.rendered {
            for presenter in &self.presenters {
                presenter.present(request, field, out)?;
            }
        }

        Ok(())
    }
}
