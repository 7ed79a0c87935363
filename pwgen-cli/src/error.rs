use pwgen_lib::generator::LengthError;

#[derive(Debug)]
pub enum CliError {
    Length(LengthError),
    Clipboard(String),
    Io(String),
    UnknownCommand(String),
    MissingArgument(&'static str),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::Length(error) => f.write_fmt(std::format_args!("{}", error)),
            Self::Clipboard(msg) => f.write_fmt(std::format_args!("Clipboard error: {}", msg)),
            Self::Io(msg) => f.write_fmt(std::format_args!("Io error: {}", msg)),
            Self::UnknownCommand(msg) => {
                f.write_fmt(std::format_args!("Unknown command \"{}\", try help", msg))
            }
            Self::MissingArgument(msg) => f.write_fmt(std::format_args!("Expected {}", msg)),
        };
    }
}

impl std::error::Error for CliError {}

impl From<LengthError> for CliError {
    fn from(value: LengthError) -> Self {
        Self::Length(value)
    }
}

impl From<arboard::Error> for CliError {
    fn from(value: arboard::Error) -> Self {
        Self::Clipboard(value.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}
