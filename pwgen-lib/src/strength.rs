use crate::charset::matched_classes;

/// Passwords shorter than this are `TooShort` regardless of content.
pub static MIN_STRENGTH_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    TooShort,
    Easy,
    Medium,
    Hard,
}

impl Strength {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TooShort => "Too short",
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Judges a password purely on its own content, not on how it was generated.
pub fn classify(password: &str) -> Strength {
    if password.chars().count() < MIN_STRENGTH_LENGTH {
        return Strength::TooShort;
    }

    match matched_classes(password).len() {
        4 => Strength::Hard,
        3 => Strength::Medium,
        _ => Strength::Easy,
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, Strength};

    #[test]
    fn test_too_short_wins() {
        assert_eq!(classify(""), Strength::TooShort);
        assert_eq!(classify("sho1A!x"), Strength::TooShort);
        assert_eq!(classify("aB3$"), Strength::TooShort);
    }

    #[test]
    fn test_match_counts() {
        assert_eq!(classify("ABCDEFGH"), Strength::Easy);
        assert_eq!(classify("abcdEFGH"), Strength::Easy);
        assert_eq!(classify("Abcdefg1"), Strength::Medium);
        assert_eq!(classify("Abcdef1!"), Strength::Hard);
        assert_eq!(classify("short1A!"), Strength::Hard);
    }

    #[test]
    fn test_unknown_symbols_do_not_count() {
        // Only the fixed special set counts as a symbol
        assert_eq!(classify("Abcdefg1-"), Strength::Medium);
        assert_eq!(classify("        "), Strength::Easy);
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(classify("Ab1!éééé"), Strength::Hard);
        assert_eq!(classify("Ab1!ééé"), Strength::TooShort);
    }

    #[test]
    fn test_deterministic() {
        for password in ["Abcdef1!", "abc", "ABCDEFGH", "Abcdefg1"] {
            assert_eq!(classify(password), classify(password));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Strength::TooShort.to_string(), "Too short");
        assert_eq!(Strength::Hard.to_string(), "Hard");
    }
}
