use eframe::egui::Ui;
use log::info;

use pwgen_lib::{
    classify,
    generator::{generate, parse_length},
    zeroize::Zeroizing,
    ClassSet, GenerationConfig, Strength,
};

use crate::copied::CopyAcknowledgement;
use crate::gui::error::GuiError;
use crate::gui::message::Message;

/// Everything the form holds between events.
pub struct State {
    pub classes: ClassSet,
    pub length_buffer: String,
    pub password: Zeroizing<String>,
    pub copied: CopyAcknowledgement,
    pub messages: Vec<Message>,
}

impl State {
    pub fn new(config: GenerationConfig) -> State {
        let mut state = State {
            classes: config.classes,
            length_buffer: config.length.to_string(),
            password: Zeroizing::new(String::new()),
            copied: CopyAcknowledgement::default(),
            messages: Vec::new(),
        };
        state.apply(config);
        state
    }

    /// Regenerates from the current form values. On bad length input the
    /// previous password is kept.
    pub fn generate(&mut self) -> Result<(), GuiError> {
        let length = parse_length(self.length_buffer.as_str())?;
        self.apply(GenerationConfig::new(self.classes, length));
        Ok(())
    }

    fn apply(&mut self, config: GenerationConfig) {
        let generation = generate(config);
        if generation.was_corrected() {
            info!("no character class selected, enabling lowercase");
        }
        // Reflect the corrected config back into the checkboxes
        self.classes = generation.config().classes;
        self.password = generation.into_password();
    }

    pub fn strength(&self) -> Strength {
        classify(self.password.as_str())
    }

    /// Marks the password as copied and returns the text for the clipboard.
    pub fn copy(&mut self) -> String {
        self.copied.trigger();
        info!("password copied to clipboard");
        self.password.to_string()
    }

    pub fn add_error(&mut self, error: String) {
        self.messages
            .push(Message::new_default_duration(Some(String::from("Error")), error));
    }

    pub fn display_messages(&mut self, ui: &mut Ui) {
        self.messages.retain(|message| !message.is_complete());

        if self.messages.is_empty() {
            return;
        }

        for message in self.messages.iter() {
            message.display(ui);
        }

        ui.separator();
    }
}
