use std::io::{self, Write};

use clap::Parser;
use env_logger::Builder;
use log::{error, info};

use escape_field::{AsciiPreviewPresenter, FieldController, RenderArgs, SummaryPresenter};

fn main() {
    let args = RenderArgs::parse();

    Builder::new().filter_level(args.log_level()).parse_default_env().init();

    info!("'{}' version {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(&args) {
        error!("field generation failed: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let presets = args.preset_table()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list_presets {
        for (index, preset) in presets.iter().enumerate() {
            writeln!(
                out,
                "{:>2}  {:<20} re [{}, {}] im [{}, {}]  {}x{}  max_iter {}",
                index,
                preset.name,
                preset.x_min,
                preset.x_max,
                preset.y_min,
                preset.y_max,
                preset.width,
                preset.height,
                preset.max_iter
            )?;
        }
        return Ok(());
    }

    let request = args.resolve(&presets)?;

    let mut controller = FieldController::new(args.execution_mode()).with_presenter(SummaryPresenter::new());
    if args.preview {
        controller = controller.with_presenter(AsciiPreviewPresenter::default());
    }

    controller.generate(request)?;
    controller.write(&mut out)?;
    out.flush()?;

    Ok(())
}
