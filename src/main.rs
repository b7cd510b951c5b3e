//! Slotmark entry point.

use std::env;
use std::path::Path;
use std::process;

use slotmark::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use slotmark::{AppConfig, SlotmarkApp};
use slotmark_ui::{ImageHandle, Settings, Size};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        // Usage errors exit silently.
        process::exit(1);
    }

    let config = AppConfig::load_from_default_path().unwrap_or_default();

    env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let path = Path::new(&args[1]);
    if !path.is_file() {
        log::error!("Image file not found: {}", path.display());
        process::exit(1);
    }

    let image = match image::open(path) {
        Ok(image) => image,
        Err(e) => {
            log::error!("Failed to decode image {}: {}", path.display(), e);
            process::exit(1);
        }
    };
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let handle = ImageHandle::from_rgba8(rgba.into_raw(), width, height);

    let image_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args[1].clone());

    log::info!("Loaded image {} ({}x{})", path.display(), width, height);

    let app = SlotmarkApp::new(
        handle,
        image_name,
        Size::new(DEFAULT_WINDOW_WIDTH as f32, DEFAULT_WINDOW_HEIGHT as f32),
        config.preferences.edge_tolerance,
    );

    let settings = Settings {
        window_title: None,
        window_size: (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        min_window_size: Some((MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        resizable: true,
    };

    if let Err(e) = slotmark_ui::run(app, settings) {
        eprintln!("Application error: {}", e);
        process::exit(1);
    }
}
