use std::time::Duration;

use eframe::egui::{self, Ui};

use crate::timer::Timer;

pub struct Message {
    header: Option<String>,
    message: String,
    timer: Timer,
}

impl Message {
    pub fn new_default_duration(header: Option<String>, message: String) -> Message {
        Message {
            header,
            message,
            timer: Timer::default(),
        }
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        self.message.as_str()
    }

    pub fn display(&self, ui: &mut Ui) {
        ui.horizontal_wrapped(|ui| {
            if let Some(header) = &self.header {
                ui.colored_label(egui::Color32::RED, header.as_str());
            }
            ui.label(self.message.as_str());
        });
    }

    pub fn is_complete(&self) -> bool {
        self.timer.is_complete()
    }

    pub fn remaining_time(&self) -> Duration {
        self.timer.remaining_time()
    }
}
