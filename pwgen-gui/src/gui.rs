pub mod error;
pub mod message;

use crate::config::GuiConfig;
use crate::gui::error::GuiError;
use crate::password::{password_ui, strength_color};
use crate::state::State;
use crate::theme::Theme;

use std::time::Duration;

use eframe::egui::{self, Key, Modifiers};
use log::info;

use pwgen_lib::{generator::MIN_RECOMMENDED_LENGTH, zeroize::Zeroize, CharacterClass};

pub struct Gui {
    scale: f32,
    update_scale: bool,
    theme: Theme,
    state: State,
}

impl Gui {
    pub fn new(cc: &eframe::CreationContext<'_>, config: GuiConfig) -> Self {
        cc.egui_ctx.set_visuals(config.theme.visuals());

        Self {
            scale: config.scale,
            update_scale: true,
            theme: config.theme,
            state: State::new(config.generation),
        }
    }
}

impl eframe::App for Gui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.update_scale {
            ctx.set_pixels_per_point(self.scale);
        }

        self.handle_keybinds(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.display_header(ui);
            self.state.display_messages(ui);
            self.display_password(ui);
            self.display_classes(ui);
            self.display_length(ui);
        });

        // Wake up to clear the copied label and expired messages without input
        if let Some(remaining) = self.state.copied.remaining_time() {
            ctx.request_repaint_after(remaining);
        }
        if let Some(remaining) = self.state.messages.iter().map(|m| m.remaining_time()).min() {
            ctx.request_repaint_after(remaining.max(Duration::from_millis(50)));
        }
    }
}

impl Gui {
    fn generate(&mut self) {
        if let Err(error) = self.state.generate() {
            GuiError::display_error(&mut self.state, error);
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());
        info!("theme set to {:?}", self.theme);
    }

    fn display_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .button(self.theme.toggle_icon())
                .on_hover_text("Toggle light/dark mode")
                .clicked()
            {
                self.toggle_theme(ui.ctx());
            }

            ui.menu_button("Options", |ui| {
                if !ui
                    .add(egui::Slider::new(&mut self.scale, 1.0..=3.0).text("UI Scale"))
                    .dragged()
                {
                    self.update_scale = true;
                } else {
                    self.update_scale = false;
                };
            });
        });

        ui.heading("Password Generator");
        ui.separator();
    }

    fn display_password(&mut self, ui: &mut egui::Ui) {
        let strength = self.state.strength();

        password_ui(ui, self.state.password.as_str(), strength);
        ui.horizontal(|ui| {
            ui.label("Password Strength:");
            ui.colored_label(strength_color(strength), strength.label());
        });

        let label = if self.state.copied.is_active() {
            "Copied!"
        } else {
            "Copy"
        };
        if ui.button(label).clicked() {
            let text = self.state.copy();
            ui.output_mut(|o| {
                o.copied_text.zeroize();
                o.copied_text = text;
            });
        }

        ui.separator();
    }

    fn display_classes(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("character_classes")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                for (index, class) in CharacterClass::ALL.into_iter().enumerate() {
                    let mut enabled = self.state.classes.contains(class);
                    if ui.checkbox(&mut enabled, class.name()).changed() {
                        self.state.classes.set(class, enabled);
                    }
                    if index % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

        ui.separator();
    }

    fn display_length(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Length:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.state.length_buffer)
                    .desired_width(64.0)
                    .hint_text(format!("min {}", MIN_RECOMMENDED_LENGTH)),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                self.generate();
            }

            if ui.button("Generate").clicked() {
                self.generate();
            }
        });
    }

    fn handle_keybinds(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.modifiers.matches_exact(Modifiers::CTRL) && i.key_pressed(Key::G)) {
            self.generate();
            info!("Generate");
        }
    }
}
