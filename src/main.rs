use std::result::Result;

use xrandr_geometry::cli::{ProgramArgs, ProgramResources};
use xrandr_geometry::error::GeometryError;
use xrandr_geometry::report::read_report;

/// Read the xrandr report and print the geometry of the selected monitor.
fn main() -> Result<(), GeometryError> {
    env_logger::init();

    let args = ProgramArgs::get();
    log::info!("Using arguments:\n{}", args);

    let ProgramResources { input, config } = args.acquire_resources()?;
    let monitors = read_report(input, config.header())?;

    let geometry = if monitors.is_empty() {
        log::warn!(
            "No monitor input found, using fallback geometry {}.",
            config.fallback_geometry()
        );
        config.fallback_geometry().to_owned()
    } else {
        let selection = args.selection(&config);
        log::info!("Selecting the {} of {} monitors.", selection, monitors.count());
        monitors.select(selection)?
    };

    println!("{}", geometry);
    Ok(())
}
