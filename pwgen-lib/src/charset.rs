static UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
static DIGITS: &[u8] = b"0123456789";
static SPECIAL: &[u8] = b"!@#$%^&*()";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// Every class, in the order alphabets are concatenated and patched.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn alphabet(&self) -> &'static [u8] {
        match self {
            Self::Uppercase => UPPERCASE,
            Self::Lowercase => LOWERCASE,
            Self::Digit => DIGITS,
            Self::Special => SPECIAL,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        u8::try_from(c).map_or(false, |b| self.contains_byte(b))
    }

    pub fn contains_byte(&self, b: u8) -> bool {
        self.alphabet().contains(&b)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Uppercase => "Uppercase",
            Self::Lowercase => "Lowercase",
            Self::Digit => "Numbers",
            Self::Special => "Special Characters",
        }
    }

    fn bit(&self) -> u8 {
        match self {
            Self::Uppercase => 1 << 0,
            Self::Lowercase => 1 << 1,
            Self::Digit => 1 << 2,
            Self::Special => 1 << 3,
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CharacterClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upper" | "uppercase" => Ok(Self::Uppercase),
            "lower" | "lowercase" => Ok(Self::Lowercase),
            "digit" | "digits" | "number" | "numbers" => Ok(Self::Digit),
            "special" | "symbol" | "symbols" => Ok(Self::Special),
            _ => Err(format!("unknown character class \"{}\"", s)),
        }
    }
}

/// Set of enabled character classes. Iterates in [`CharacterClass::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet {
    bits: u8,
}

impl ClassSet {
    pub fn empty() -> ClassSet {
        ClassSet { bits: 0 }
    }

    pub fn all() -> ClassSet {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.bits & class.bit() != 0
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.bits |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.bits &= !class.bit();
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.bits ^= class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn with(mut self, class: CharacterClass) -> ClassSet {
        self.insert(class);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }

    /// Concatenated alphabets of the enabled classes.
    pub fn alphabet(&self) -> Vec<u8> {
        self.iter()
            .flat_map(|class| class.alphabet().iter().copied())
            .collect()
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<T: IntoIterator<Item = CharacterClass>>(iter: T) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Which classes have at least one character present in `text`.
pub fn matched_classes(text: &str) -> ClassSet {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| text.chars().any(|c| class.contains(c)))
        .collect()
}

/// Same as [`matched_classes`] for a raw byte buffer.
pub fn matched_classes_in_bytes(bytes: &[u8]) -> ClassSet {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| bytes.iter().any(|b| class.contains_byte(*b)))
        .collect()
}
