use crate::gender::Gender;

/// One grammatical role rendered in each gender, indexed by `Gender`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PronounGroup([&'static str; 3]);

impl PronounGroup {
    pub const fn new(male: &'static str, female: &'static str, neutral: &'static str) -> Self {
        Self([male, female, neutral])
    }

    #[inline]
    pub fn get(&self, gender: Gender) -> &'static str {
        self.0[gender.index()]
    }
}

/// Surface forms repeat across groups ("his", "her", "children"), so every
/// lookup is first match in this order.
pub static PRONOUNS: [PronounGroup; 13] = [
    PronounGroup::new("himself", "herself", "themselves"),
    PronounGroup::new("him", "her", "them"),
    PronounGroup::new("his", "hers", "theirs"),
    PronounGroup::new("his", "her", "their"),
    PronounGroup::new("he", "she", "they"),
    PronounGroup::new("man", "woman", "person"),
    PronounGroup::new("men", "women", "people"),
    PronounGroup::new("boys", "girls", "children"),
    PronounGroup::new("boy", "girl", "child"),
    PronounGroup::new("sons", "daughters", "children"),
    PronounGroup::new("son", "daughter", "child"),
    PronounGroup::new("brother", "sister", "sibling"),
    PronounGroup::new("brothers", "sisters", "siblings"),
];

/// Read-only view over an ordered slice of groups.
#[derive(Clone, Copy, Debug)]
pub struct PronounTable<'t> {
    groups: &'t [PronounGroup],
}

impl PronounTable<'static> {
    pub fn standard() -> Self {
        Self::new(&PRONOUNS)
    }
}

impl Default for PronounTable<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'t> PronounTable<'t> {
    pub fn new(groups: &'t [PronounGroup]) -> Self {
        Self { groups }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[inline]
    pub fn groups(&self) -> &'t [PronounGroup] {
        self.groups
    }

    /// The `to` variant of the first group whose `from` variant is `token`.
    pub fn find_replacement(&self, token: &str, from: Gender, to: Gender) -> Option<&'static str> {
        self.groups
            .iter()
            .find(|group| group.get(from) == token)
            .map(|group| group.get(to))
    }

    /// Single pass over the table, testing the `a` variant of each group
    /// before its `b` variant. Returns the opposite variant of the first hit.
    pub fn find_swap(&self, token: &str, a: Gender, b: Gender) -> Option<&'static str> {
        for group in self.groups {
            if group.get(a) == token {
                return Some(group.get(b));
            } else if group.get(b) == token {
                return Some(group.get(a));
            }
        }

        None
    }

    /// Rewrites `token` from the `from` column to the `to` column of the
    /// first group that matches. Unmatched tokens come back unchanged.
    #[inline]
    pub fn replace<'a>(&self, token: &'a str, from: Gender, to: Gender) -> &'a str {
        self.find_replacement(token, from, to).unwrap_or(token)
    }

    /// Exchanges `token` between the `a` and `b` columns. Unmatched tokens
    /// come back unchanged.
    #[inline]
    pub fn swap<'a>(&self, token: &'a str, a: Gender, b: Gender) -> &'a str {
        self.find_swap(token, a, b).unwrap_or(token)
    }

    pub fn remap_column<S: AsRef<str>>(&self, tokens: &[S], from: Gender, to: Gender) -> Vec<String> {
        tokens
            .iter()
            .map(|token| self.replace(token.as_ref(), from, to).to_string())
            .collect()
    }
}

/// `PronounTable::replace` over the standard table.
#[inline]
pub fn replace(token: &str, from: Gender, to: Gender) -> &str {
    PronounTable::standard().replace(token, from, to)
}

/// `PronounTable::swap` over the standard table.
#[inline]
pub fn swap(token: &str, a: Gender, b: Gender) -> &str {
    PronounTable::standard().swap(token, a, b)
}

/// `PronounTable::remap_column` over the standard table.
pub fn remap_column<S: AsRef<str>>(tokens: &[S], from: Gender, to: Gender) -> Vec<String> {
    PronounTable::standard().remap_column(tokens, from, to)
}
