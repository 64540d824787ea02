pub mod gender;
pub mod normalizer;
pub mod pronoun;
pub mod token;

pub use gender::Gender;
pub use pronoun::{PronounGroup, PronounTable, PRONOUNS};
