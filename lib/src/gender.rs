use std::{
    convert::Infallible,
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Gender category, doubling as the column index into a `PronounGroup`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Gender {
    Male = 0,
    Female = 1,
    Neutral = 2,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Neutral];

    /// Resolves a gender name, ignoring case.
    ///
    /// Anything other than "male" or "female" resolves to `Neutral`,
    /// including empty strings and misspellings. Callers that need strict
    /// validation should check `is_exact_name` first.
    pub fn resolve(name: &str) -> Self {
        if name.eq_ignore_ascii_case("male") {
            Gender::Male
        } else if name.eq_ignore_ascii_case("female") {
            Gender::Female
        } else {
            Gender::Neutral
        }
    }

    /// Whether `name` is one of the canonical category names.
    pub fn is_exact_name(name: &str) -> bool {
        Self::ALL
            .iter()
            .any(|gender| name.eq_ignore_ascii_case(gender.name()))
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Neutral => "neutral",
        }
    }
}

impl FromStr for Gender {
    type Err = Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(Gender::resolve(name))
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
