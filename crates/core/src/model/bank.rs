use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::question::Question;

/// The full set of questions available to a quiz, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    items: Vec<Question>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(items: Vec<Question>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.items
    }

    /// Copy of every question in load order.
    #[must_use]
    pub fn ordered_copy(&self) -> Vec<Question> {
        self.items.clone()
    }

    /// Random permutation of every question. The bank itself is left untouched.
    #[must_use]
    pub fn shuffled_copy(&self) -> Vec<Question> {
        self.shuffled_copy_with(&mut rand::rng())
    }

    /// Like [`shuffled_copy`](Self::shuffled_copy), drawing from a caller-supplied RNG.
    #[must_use]
    pub fn shuffled_copy_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Question> {
        let mut copy = self.items.clone();
        copy.as_mut_slice().shuffle(rng);
        copy
    }
}

impl FromIterator<Question> for QuestionBank {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
