use log::debug;
use rand::Rng;

use crate::charset::{matched_classes_in_bytes, CharacterClass, ClassSet};
use crate::zeroize::Zeroizing;

pub static DEFAULT_LENGTH: i64 = 8;
// Only surfaced as a hint, generation accepts any length
pub static MIN_RECOMMENDED_LENGTH: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub classes: ClassSet,
    pub length: i64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            classes: ClassSet::all(),
            length: DEFAULT_LENGTH,
        }
    }
}

impl GenerationConfig {
    pub fn new(classes: ClassSet, length: i64) -> GenerationConfig {
        GenerationConfig { classes, length }
    }

    /// Number of characters a generation produces, negative lengths count as zero.
    pub fn effective_length(&self) -> usize {
        usize::try_from(self.length).unwrap_or(0)
    }
}

pub struct Generation {
    password: Zeroizing<String>,
    config: GenerationConfig,
    corrected: bool,
}

impl Generation {
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn into_password(self) -> Zeroizing<String> {
        self.password
    }

    /// The config actually used, with Lowercase forced on if no class was enabled.
    pub fn config(&self) -> GenerationConfig {
        self.config
    }

    pub fn was_corrected(&self) -> bool {
        self.corrected
    }
}

impl std::fmt::Debug for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generation")
            .field("password", &"<redacted>")
            .field("config", &self.config)
            .field("corrected", &self.corrected)
            .finish()
    }
}

pub fn generate(config: GenerationConfig) -> Generation {
    generate_with_rng(config, &mut rand::thread_rng())
}

pub fn generate_with_rng<R: Rng + ?Sized>(mut config: GenerationConfig, rng: &mut R) -> Generation {
    let mut corrected = false;
    if config.classes.is_empty() {
        debug!("no character class enabled, forcing lowercase");
        config.classes.insert(CharacterClass::Lowercase);
        corrected = true;
    }

    let alphabet = config.classes.alphabet();
    let length = config.effective_length();

    let mut password: Zeroizing<Vec<u8>> = Zeroizing::new(
        (0..length)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect(),
    );

    // Each missing class is patched in once, a later patch may land on an earlier one
    if length > 0 {
        for class in config.classes.iter() {
            if matched_classes_in_bytes(&password).contains(class) {
                continue;
            }
            let position = rng.gen_range(0..length);
            let class_alphabet = class.alphabet();
            password[position] = class_alphabet[rng.gen_range(0..class_alphabet.len())];
        }
    }

    let password = password.iter().map(|b| *b as char).collect::<String>();

    Generation {
        password: Zeroizing::new(password),
        config,
        corrected,
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum LengthError {
    Empty,
    NotANumber(String),
}

impl std::fmt::Display for LengthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::Empty => f.write_str("No length provided"),
            Self::NotANumber(msg) => {
                f.write_fmt(std::format_args!("Invalid length \"{}\"", msg))
            }
        };
    }
}

impl std::error::Error for LengthError {}

/// Parses free-form length input. Out of range values are left to `generate`.
pub fn parse_length(input: &str) -> Result<i64, LengthError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(LengthError::Empty);
    }

    match input.parse::<i64>() {
        Ok(length) => Ok(length),
        Err(_) => Err(LengthError::NotANumber(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{generate, generate_with_rng, parse_length, GenerationConfig, LengthError};
    use crate::charset::{matched_classes, CharacterClass, ClassSet};

    fn subsets() -> Vec<ClassSet> {
        (1u8..16)
            .map(|mask| {
                CharacterClass::ALL
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, class)| class)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_single_class_always_present() {
        let mut rng = StdRng::seed_from_u64(7);
        for class in CharacterClass::ALL {
            let classes = ClassSet::empty().with(class);
            for length in 1..=12 {
                let generation = generate_with_rng(GenerationConfig::new(classes, length), &mut rng);
                assert_eq!(generation.password().len(), length as usize);
                assert_eq!(matched_classes(generation.password()), classes);
            }
        }
    }

    #[test]
    fn test_only_enabled_classes_used() {
        let mut rng = StdRng::seed_from_u64(11);
        for classes in subsets() {
            for length in 1..=12 {
                for _ in 0..20 {
                    let config = GenerationConfig::new(classes, length);
                    let generation = generate_with_rng(config, &mut rng);
                    let password = generation.password();

                    assert_eq!(password.chars().count(), length as usize);
                    assert!(!generation.was_corrected());
                    assert_eq!(generation.config(), config);

                    let matched = matched_classes(password);
                    assert!(!matched.is_empty());
                    for class in matched.iter() {
                        assert!(classes.contains(class));
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_enabled_class_present() {
        let mut rng = StdRng::seed_from_u64(3);
        for classes in subsets() {
            for _ in 0..50 {
                let generation = generate_with_rng(GenerationConfig::new(classes, 40), &mut rng);
                assert_eq!(matched_classes(generation.password()), classes);
            }
        }
    }

    #[test]
    fn test_missing_classes_are_patched_in_order() {
        // Always samples index zero, so every draw is the first character of its alphabet
        let mut rng = StepRng::new(0, 0);
        let generation = generate_with_rng(GenerationConfig::new(ClassSet::all(), 8), &mut rng);
        // Each patch lands on position zero and replaces the previous one
        assert_eq!(generation.password(), "!AAAAAAA");

        let classes = ClassSet::empty()
            .with(CharacterClass::Uppercase)
            .with(CharacterClass::Digit);
        let generation = generate_with_rng(GenerationConfig::new(classes, 4), &mut rng);
        assert_eq!(generation.password(), "0AAA");

        let classes = ClassSet::empty().with(CharacterClass::Uppercase);
        let generation = generate_with_rng(GenerationConfig::new(classes, 4), &mut rng);
        assert_eq!(generation.password(), "AAAA");
    }

    #[test]
    fn test_empty_classes_force_lowercase() {
        let config = GenerationConfig::new(ClassSet::empty(), 16);
        let generation = generate(config);

        assert!(generation.was_corrected());
        assert_eq!(
            generation.config().classes,
            ClassSet::empty().with(CharacterClass::Lowercase)
        );
        assert_eq!(generation.password().len(), 16);
        assert!(generation
            .password()
            .chars()
            .all(|c| CharacterClass::Lowercase.contains(c)));
    }

    #[test]
    fn test_zero_and_negative_length() {
        for length in [0, -1, -100, i64::MIN] {
            let generation = generate(GenerationConfig::new(ClassSet::all(), length));
            assert_eq!(generation.password(), "");

            let generation = generate(GenerationConfig::new(ClassSet::empty(), length));
            assert_eq!(generation.password(), "");
            assert!(generation.was_corrected());
        }
    }

    #[test]
    fn test_short_length_still_exact() {
        // Fewer positions than classes, later patches may overwrite earlier ones
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let generation = generate_with_rng(GenerationConfig::new(ClassSet::all(), 2), &mut rng);
            assert_eq!(generation.password().len(), 2);
            assert!(!matched_classes(generation.password()).is_empty());
        }
    }

    #[test]
    fn test_repeated_generation_varies() {
        let config = GenerationConfig::new(ClassSet::all(), 32);
        let first = generate(config);
        let mut differs = false;
        for _ in 0..10 {
            let next = generate(config);
            assert_eq!(next.password().len(), first.password().len());
            if next.password() != first.password() {
                differs = true;
            }
        }
        assert!(differs);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = GenerationConfig::default();
        let a = generate_with_rng(config, &mut StdRng::seed_from_u64(1));
        let b = generate_with_rng(config, &mut StdRng::seed_from_u64(1));
        assert_eq!(a.password(), b.password());
    }

    #[test]
    fn test_debug_hides_password() {
        let generation = generate(GenerationConfig::new(ClassSet::all(), 12));
        let debug = format!("{:?}", generation);
        assert!(!debug.contains(generation.password()));
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("8"), Ok(8));
        assert_eq!(parse_length("  24 "), Ok(24));
        assert_eq!(parse_length("-3"), Ok(-3));
        assert_eq!(parse_length(""), Err(LengthError::Empty));
        assert_eq!(parse_length("   "), Err(LengthError::Empty));
        assert_eq!(
            parse_length("eight"),
            Err(LengthError::NotANumber(String::from("eight")))
        );
        assert!(parse_length("4.5").is_err());
    }
}
