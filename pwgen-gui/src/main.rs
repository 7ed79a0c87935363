mod config;
mod copied;
mod gui;
mod password;
mod state;
mod theme;
mod timer;

use eframe::egui;

use crate::gui::Gui;

pub fn main() -> eframe::Result {
    env_logger::init();

    let config = config::get_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Password Generator")
            .with_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Password Generator",
        options,
        Box::new(|cc| Ok(Box::new(Gui::new(cc, config)))),
    )
}
