pub mod charset;
pub mod generator;
pub mod strength;

pub use zeroize;

pub use charset::{CharacterClass, ClassSet};
pub use generator::{generate, Generation, GenerationConfig};
pub use strength::{classify, Strength};
