use std::{
    ops::Deref,
    slice::{Iter, IterMut},
};

/// A single one-word feature. Equality is exact string equality.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct Token(String);

impl Token {
    pub fn inner(self) -> String {
        self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replaces the token text, skipping the allocation when nothing changes.
    pub fn set(&mut self, value: &str) -> bool {
        if self.0 == value {
            return false;
        }

        self.0.clear();
        self.0.push_str(value);
        true
    }
}

impl Deref for Token {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Token> for String {
    fn from(value: Token) -> Self {
        value.0
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token(String::from(value))
    }
}

impl From<&&str> for Token {
    fn from(value: &&str) -> Self {
        Token(String::from(*value))
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub type Tokens = TokenVec<Token>;

/// Ordered token column. Rewrites keep length and order.
#[derive(Clone, Debug, Default)]
pub struct TokenVec<T: Into<Token> + PartialEq>(Vec<T>);

impl<T: Into<Token> + PartialEq> TokenVec<T> {
    #[inline]
    pub fn push(&mut self, item: T) {
        self.0.push(item)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.0.iter_mut()
    }
}

impl<T: Into<Token> + PartialEq> From<Vec<T>> for TokenVec<T> {
    fn from(value: Vec<T>) -> Self {
        TokenVec(value)
    }
}

impl<T: Into<Token> + PartialEq> PartialEq for TokenVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Into<Token> + PartialEq> FromIterator<T> for TokenVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TokenVec(iter.into_iter().collect())
    }
}

impl<T: Into<Token> + PartialEq> IntoIterator for TokenVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[macro_export]
macro_rules! tokens {
    ( $( $token:expr ),* $(,)? ) => {{
        $crate::token::TokenVec::<$crate::token::Token>::from(vec![
            $( $crate::token::Token::from($token) ),*
        ])
    }};
}

#[cfg(test)]
mod tests {
    use crate::token::Token;

    #[test]
    fn test_token_set_unchanged() {
        let mut token = Token::from("he");
        assert!(!token.set("he"));
        assert!(token.set("she"));
        assert_eq!(token.as_str(), "she");
    }

    #[test]
    fn test_tokens_macro() {
        let tokens = tokens!["he", "ran"];
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.iter().map(Token::as_str).collect::<Vec<_>>(), ["he", "ran"]);

        let empty = tokens![];
        assert!(empty.is_empty());
    }
}
