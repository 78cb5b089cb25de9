//! Filmstrip demo entry point.

use filmstrip::app::App;
use filmstrip::config::{AppConfig, LoadedConfig};
use logging::Logger;

fn main() {
    let LoadedConfig {
        config,
        source,
        rejected,
        warnings,
    } = AppConfig::load();

    let logger = match Logger::new(&config.log_path, config.log_level) {
        Ok(logger) => logger
            .with_console(cfg!(debug_assertions))
            .for_component("Filmstrip"),
        Err(e) => {
            eprintln!("Failed to initialize logger: {}", e);
            std::process::exit(1);
        }
    };

    match (&source, rejected) {
        (Some(path), false) => logger.info(&format!("[CONFIG] Loaded {}", path.display())),
        (Some(path), true) => logger.warn(&format!(
            "[CONFIG] Rejected {}, using defaults",
            path.display()
        )),
        (None, _) => logger.info("[CONFIG] No configuration file found, using defaults"),
    }
    logger.info(&format!("[APP] Log level: {}", logger.level()));
    for warning in &warnings {
        logger.warn(&format!("[CONFIG] {}", warning));
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([900.0, 560.0])
            .with_title("Filmstrip"),
        ..Default::default()
    };

    let app_logger = logger.clone();
    let result = eframe::run_native(
        "Filmstrip",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(egui::Theme::Dark);

            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals.window_fill = egui::Color32::from_rgb(15, 23, 42);
            style.visuals.panel_fill = egui::Color32::from_rgb(15, 23, 42);
            cc.egui_ctx.set_style(style);

            Ok(Box::new(App::new(config, app_logger)))
        }),
    );

    if let Err(e) = result {
        logger.error(&format!("[APP] UI terminated with error: {}", e));
        // process::exit skips destructors, so drain the writer first.
        logger.flush();
        std::process::exit(1);
    }
    logger.flush();
}
