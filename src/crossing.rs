use serde::{Deserialize, Serialize};

/// `wordA[index_a] == wordB[index_b]`. Field order drives the derived
/// `Ord`, giving the lexicographic comparator §4.3/§9 require.
#[derive(Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Crossing {
    pub word_a: String,
    pub index_a: usize,
    pub word_b: String,
    pub index_b: usize,
}

impl Crossing {
    pub fn new(word_a: impl Into<String>, index_a: usize, word_b: impl Into<String>, index_b: usize) -> Crossing {
        Crossing {
            word_a: word_a.into(),
            index_a,
            word_b: word_b.into(),
            index_b,
        }
    }

    pub fn slot_a(&self) -> (&str, usize) {
        (&self.word_a, self.index_a)
    }

    pub fn slot_b(&self) -> (&str, usize) {
        (&self.word_b, self.index_b)
    }

    /// Normalized so comparisons don't care which side is A and which is B.
    pub fn word_pair(&self) -> (&str, &str) {
        if self.word_a <= self.word_b {
            (&self.word_a, &self.word_b)
        } else {
            (&self.word_b, &self.word_a)
        }
    }
}
