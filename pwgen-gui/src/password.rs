use eframe::egui::{self, Color32};

use pwgen_lib::Strength;

static GREEN: Color32 = Color32::from_rgb(0, 128, 0);
static ORANGE: Color32 = Color32::from_rgb(255, 165, 0);
static RED: Color32 = Color32::from_rgb(255, 0, 0);

pub fn strength_color(strength: Strength) -> Color32 {
    match strength {
        Strength::Hard => GREEN,
        Strength::Medium => ORANGE,
        Strength::Easy | Strength::TooShort => RED,
    }
}

/// Read-only password field with a border colored by strength.
pub fn password_ui(ui: &mut egui::Ui, password: &str, strength: Strength) -> egui::Response {
    let stroke = egui::Stroke::new(2.0, strength_color(strength));

    ui.scope(|ui| {
        let visuals = ui.visuals_mut();
        visuals.widgets.inactive.bg_stroke = stroke;
        visuals.widgets.hovered.bg_stroke = stroke;
        visuals.widgets.active.bg_stroke = stroke;
        visuals.selection.stroke = stroke;

        // An immutable &str buffer keeps the field read-only
        let mut buffer = password;
        ui.add_sized(
            [ui.available_width(), 24.0],
            egui::TextEdit::singleline(&mut buffer).font(egui::TextStyle::Monospace),
        )
    })
    .inner
}

#[cfg(test)]
mod tests {
    use pwgen_lib::Strength;

    use super::{strength_color, GREEN, ORANGE, RED};

    #[test]
    fn test_strength_colors() {
        assert_eq!(strength_color(Strength::Hard), GREEN);
        assert_eq!(strength_color(Strength::Medium), ORANGE);
        assert_eq!(strength_color(Strength::Easy), RED);
        assert_eq!(strength_color(Strength::TooShort), RED);
    }
}
