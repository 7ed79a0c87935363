mod error;
mod session;

use clap::Parser;
use log::info;

use pwgen_lib::{
    classify,
    generator::{generate, DEFAULT_LENGTH},
    CharacterClass, ClassSet, GenerationConfig,
};

use crate::error::CliError;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(version, about = "Generate random passwords")]
struct Args {
    /// Password length
    #[arg(short, long, value_name = "number", default_value_t = DEFAULT_LENGTH, allow_hyphen_values = true)]
    length: i64,

    /// Leave out uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Leave out digits
    #[arg(long, default_value_t = false)]
    no_digits: bool,

    /// Leave out special characters
    #[arg(long, default_value_t = false)]
    no_special: bool,

    /// Number of passwords to generate
    #[arg(short = 'n', long, value_name = "number", default_value_t = 1)]
    count: usize,

    /// Copy the last password to the clipboard
    #[arg(short, long, default_value_t = false)]
    copy: bool,

    /// Classify a password instead of generating one
    #[arg(short, long, value_name = "password")]
    strength: Option<String>,

    /// Start an interactive session
    #[arg(short, long, default_value_t = false)]
    interactive: bool,
}

impl Args {
    fn config(&self) -> GenerationConfig {
        let mut classes = ClassSet::all();
        classes.set(CharacterClass::Uppercase, !self.no_uppercase);
        classes.set(CharacterClass::Lowercase, !self.no_lowercase);
        classes.set(CharacterClass::Digit, !self.no_digits);
        classes.set(CharacterClass::Special, !self.no_special);

        GenerationConfig::new(classes, self.length)
    }
}

fn run(args: Args) -> Result<(), CliError> {
    if let Some(password) = &args.strength {
        println!("{}", classify(password));
        return Ok(());
    }

    if args.interactive {
        return Session::new(args.config()).run();
    }

    let mut last = None;
    for _ in 0..args.count {
        let generation = generate(args.config());
        if generation.was_corrected() {
            eprintln!("No character class selected, using lowercase");
        }
        println!(
            "{}  (strength: {})",
            generation.password(),
            classify(generation.password())
        );
        last = Some(generation.into_password());
    }

    if args.copy {
        if let Some(password) = last {
            let mut clipboard = arboard::Clipboard::new()?;
            clipboard.set_text(password.as_str())?;
            info!("password copied to clipboard");
            println!("Copied!");
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(error) = run(args) {
        eprintln!("{}", error.to_string());
        std::process::exit(1);
    }
}
