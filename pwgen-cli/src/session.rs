use std::io::{BufRead, Write};

use log::info;
use pwgen_lib::{
    classify,
    generator::{generate, parse_length},
    zeroize::Zeroizing,
    CharacterClass, GenerationConfig,
};

use crate::error::CliError;

#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Output(String),
    Quit,
}

/// Line oriented version of the generator form.
pub struct Session {
    config: GenerationConfig,
    password: Zeroizing<String>,
    clipboard: Option<arboard::Clipboard>,
}

impl Session {
    pub fn new(config: GenerationConfig) -> Session {
        let mut session = Session {
            config,
            password: Zeroizing::new(String::new()),
            clipboard: None,
        };
        session.generate();
        session
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        Self::help();
        println!("{}", self.show());

        let stdin = std::io::stdin();
        let mut input = String::new();
        'a: loop {
            print!("> ");
            std::io::stdout().flush()?;

            input.clear();
            if stdin.lock().read_line(&mut input)? == 0 {
                break 'a;
            }

            match self.execute(input.as_str()) {
                Ok(Step::Output(output)) => {
                    if !output.is_empty() {
                        println!("{}", output);
                    }
                }
                Ok(Step::Quit) => break 'a,
                Err(error) => println!("Failed: {}", error.to_string()),
            }
        }

        Ok(())
    }

    pub fn execute(&mut self, line: &str) -> Result<Step, CliError> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let output = match command {
            "" => String::new(),
            "help" => {
                Self::help();
                String::new()
            }
            "generate" | "g" => {
                self.generate();
                self.show()
            }
            "length" => {
                if rest.is_empty() {
                    return Err(CliError::MissingArgument("a length"));
                }
                self.config.length = parse_length(rest)?;
                format!("length set to {}", self.config.length)
            }
            "toggle" => {
                if rest.is_empty() {
                    return Err(CliError::MissingArgument("a character class"));
                }
                let class: CharacterClass = rest
                    .parse()
                    .map_err(|_| CliError::UnknownCommand(rest.to_string()))?;
                self.config.classes.toggle(class);
                self.settings()
            }
            "show" => format!("{}\n{}", self.show(), self.settings()),
            "strength" => {
                if rest.is_empty() {
                    classify(self.password.as_str()).to_string()
                } else {
                    classify(rest).to_string()
                }
            }
            "copy" => {
                self.copy()?;
                String::from("Copied!")
            }
            "exit" | "quit" | "q" => return Ok(Step::Quit),
            _ => return Err(CliError::UnknownCommand(command.to_string())),
        };

        Ok(Step::Output(output))
    }

    fn generate(&mut self) {
        let generation = generate(self.config);
        if generation.was_corrected() {
            println!("No character class selected, enabling lowercase");
        }
        self.config = generation.config();
        self.password = generation.into_password();
    }

    fn copy(&mut self) -> Result<(), CliError> {
        // Held for the whole session, some platforms drop the contents with the handle
        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new()?);
        }
        if let Some(clipboard) = &mut self.clipboard {
            clipboard.set_text(self.password.as_str())?;
        }
        info!("password copied to clipboard");
        Ok(())
    }

    #[cfg(test)]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    #[cfg(test)]
    pub fn config(&self) -> GenerationConfig {
        self.config
    }

    fn show(&self) -> String {
        format!(
            "{}  (strength: {})",
            self.password.as_str(),
            classify(self.password.as_str())
        )
    }

    fn settings(&self) -> String {
        let classes = CharacterClass::ALL
            .iter()
            .map(|class| {
                let mark = if self.config.classes.contains(*class) { "x" } else { " " };
                format!("[{}] {}", mark, class.name())
            })
            .collect::<Vec<_>>()
            .join("  ");
        format!("{}  length {}", classes, self.config.length)
    }

    fn help() {
        println!("Commands:");
        println!("  generate            generate a new password");
        println!("  length <n>          set the password length");
        println!("  toggle <class>      toggle upper, lower, digits or special");
        println!("  show                show the password and settings");
        println!("  strength [text]     classify the password or the given text");
        println!("  copy                copy the password to the clipboard");
        println!("  help                show this message");
        println!("  quit                leave the session");
    }
}
