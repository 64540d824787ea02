use crate::{gender::Gender, normalizer::TextNormalizer, pronoun::PronounTable, token::Tokens};

/// Directional rewrite of every token from one gender to another.
#[derive(Clone, Debug)]
pub struct PronounReplacer {
    table: PronounTable<'static>,
    from: Gender,
    to: Gender,
    rewritten: usize,
}

impl PronounReplacer {
    pub fn new(from: Gender, to: Gender) -> Self {
        Self::with_table(PronounTable::standard(), from, to)
    }

    pub fn with_table(table: PronounTable<'static>, from: Gender, to: Gender) -> Self {
        Self {
            table,
            from,
            to,
            rewritten: 0,
        }
    }

    /// Tokens changed across all `normalize` calls so far.
    #[inline]
    pub fn rewritten(&self) -> usize {
        self.rewritten
    }
}

impl TextNormalizer for PronounReplacer {
    fn normalize(&mut self, tokens: &mut Tokens) {
        let (table, from, to) = (self.table, self.from, self.to);

        tokens.iter_mut().for_each(|token| {
            if let Some(replacement) = table.find_replacement(token.as_str(), from, to) {
                if token.set(replacement) {
                    self.rewritten += 1;
                }
            }
        });
    }
}

/// Bidirectional rewrite between two genders, for columns whose origin
/// gender is not tracked.
#[derive(Clone, Debug)]
pub struct PronounSwapper {
    table: PronounTable<'static>,
    a: Gender,
    b: Gender,
    rewritten: usize,
}

impl PronounSwapper {
    pub fn new(a: Gender, b: Gender) -> Self {
        Self::with_table(PronounTable::standard(), a, b)
    }

    pub fn with_table(table: PronounTable<'static>, a: Gender, b: Gender) -> Self {
        Self {
            table,
            a,
            b,
            rewritten: 0,
        }
    }

    #[inline]
    pub fn rewritten(&self) -> usize {
        self.rewritten
    }
}

impl TextNormalizer for PronounSwapper {
    fn normalize(&mut self, tokens: &mut Tokens) {
        let (table, a, b) = (self.table, self.a, self.b);

        tokens.iter_mut().for_each(|token| {
            if let Some(replacement) = table.find_swap(token.as_str(), a, b) {
                if token.set(replacement) {
                    self.rewritten += 1;
                }
            }
        });
    }
}
