mod app;
mod clock;
mod paths;
mod ui;

use crate::app::{load_cfg, save_cfg, Homedeck, HomedeckConfig};
use crate::paths::PATH_HOMEDECK;

fn main() -> eframe::Result {
    if std::env::args().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    println!("[homedeck] Data directory: {}", PATH_HOMEDECK.display());
    if let Err(e) = std::fs::create_dir_all(&*PATH_HOMEDECK) {
        eprintln!("[homedeck] Failed to create data directory: {}", e);
    }

    // Write a default settings.json on first launch so users have a file to edit
    if !PATH_HOMEDECK.join("settings.json").exists() {
        match save_cfg(&HomedeckConfig::default()) {
            Ok(()) => println!("[homedeck] Wrote default settings.json"),
            Err(e) => eprintln!("[homedeck] Failed to write default settings: {}", e),
        }
    }

    let fullscreen = std::env::args().any(|arg| arg == "--fullscreen") || load_cfg().fullscreen;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([960.0, 600.0])
            .with_fullscreen(fullscreen),
        ..Default::default()
    };

    println!("[homedeck] Starting eframe app...");

    eframe::run_native(
        "Homedeck",
        options,
        Box::new(|cc| {
            // Bar icons come from the phosphor glyph font
            let mut fonts = eframe::egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            // Apply custom theme
            crate::ui::theme::apply_theme(&cc.egui_ctx);

            Ok(Box::<Homedeck>::new(Homedeck::new()))
        }),
    )
}

static USAGE_TEXT: &str = r#"
Usage: homedeck [OPTIONS]

Options:
    --fullscreen          Start the home menu in fullscreen mode
    --help                Print this help text and exit
"#;
