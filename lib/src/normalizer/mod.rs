pub mod pronoun;

pub use pronoun::{PronounReplacer, PronounSwapper};

use crate::token::Tokens;

pub trait TextNormalizerClone {
    fn clone_box(&self) -> Box<dyn TextNormalizer>;
}

impl<T> TextNormalizerClone for T
where
    T: 'static + TextNormalizer + Clone,
{
    fn clone_box(&self) -> Box<dyn TextNormalizer> {
        Box::new(self.clone())
    }
}

/// Rewrites a token column in place. Implementations must keep the length
/// and order of `tokens`.
pub trait TextNormalizer: TextNormalizerClone + std::fmt::Debug + Send + Sync {
    fn normalize(&mut self, tokens: &mut Tokens);
}

impl Clone for Box<dyn TextNormalizer> {
    fn clone(&self) -> Box<dyn TextNormalizer> {
        self.clone_box()
    }
}

#[derive(Clone, Debug, Default)]
pub struct NormalizerPipeline(Vec<Box<dyn TextNormalizer>>);

impl NormalizerPipeline {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, normalizer: Box<dyn TextNormalizer>) -> &mut Self {
        self.0.push(normalizer);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn run(&mut self, tokens: &mut Tokens) {
        self.0.iter_mut().for_each(|normalizer| {
            normalizer.normalize(tokens);
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        gender::Gender,
        normalizer::{NormalizerPipeline, PronounReplacer, PronounSwapper},
        tokens,
    };

    #[test]
    fn test_normalizer_pipeline() {
        let mut tokens = tokens!["he", "told", "his", "sister"];

        let mut pipeline = NormalizerPipeline::new();
        pipeline.insert(Box::new(PronounReplacer::new(Gender::Male, Gender::Female)));
        pipeline.insert(Box::new(PronounReplacer::new(Gender::Female, Gender::Neutral)));

        assert_eq!(pipeline.len(), 2);
        pipeline.run(&mut tokens);

        // "his" -> "hers" -> "theirs", "sister" -> "sibling".
        assert_eq!(tokens, tokens!["they", "told", "theirs", "sibling"]);
    }

    #[test]
    fn test_normalizer_pipeline_swap_twice() {
        let mut tokens = tokens!["she", "met", "him", "and", "the", "boys"];

        let mut pipeline = NormalizerPipeline::new();
        let swapper = PronounSwapper::new(Gender::Male, Gender::Female);
        pipeline.insert(Box::new(swapper.clone()));
        pipeline.insert(Box::new(swapper));
        pipeline.run(&mut tokens);

        assert_eq!(tokens, tokens!["she", "met", "him", "and", "the", "boys"]);
    }

    #[test]
    fn test_normalizer_pipeline_empty() {
        let mut tokens = tokens!["he"];
        let mut pipeline = NormalizerPipeline::new();
        assert!(pipeline.is_empty());

        pipeline.run(&mut tokens);
        assert_eq!(tokens, tokens!["he"]);
    }
}
