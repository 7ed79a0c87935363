use log::warn;
use pwgen_lib::generator::LengthError;

use crate::state::State;

#[derive(Debug, PartialEq, Eq)]
pub enum GuiError {
    InvalidLength(String),
}

impl GuiError {
    pub fn display_error(state: &mut State, error: GuiError) {
        warn!("{}", error.to_string());
        state.add_error(error.to_string());
    }
}

impl std::fmt::Display for GuiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::InvalidLength(msg) => f.write_fmt(std::format_args!("{}", msg)),
        };
    }
}

impl std::error::Error for GuiError {}

impl From<LengthError> for GuiError {
    fn from(value: LengthError) -> Self {
        Self::InvalidLength(value.to_string())
    }
}
