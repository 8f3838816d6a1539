//! Overlap Enumerator (§4.1): every candidate letter-sharing crossing
//! between distinct word pairs in the input list.

use itertools::iproduct;

use crate::crossing::Crossing;

/// Every matching-letter crossing between `words[a]` and `words[b]`,
/// emitted outer-`a`, inner-`b`, then over `i`, then over `j`, matching
/// the order `ckGraphCrossword.py`'s `wordListLetterOverlaps` walks.
pub fn enumerate_overlaps(words: &[String]) -> Vec<Crossing> {
    let chars: Vec<Vec<char>> = words.iter().map(|w| w.chars().collect()).collect();
    let mut overlaps = Vec::new();
    for a in 0..words.len() {
        for b in (a + 1)..words.len() {
            for (i, j) in iproduct!(0..chars[a].len(), 0..chars[b].len()) {
                if chars[a][i] == chars[b][j] {
                    overlaps.push(Crossing::new(words[a].clone(), i, words[b].clone(), j));
                }
            }
        }
    }
    overlaps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_shared_letters_yields_nothing() {
        let words = vec!["abc".to_owned(), "def".to_owned()];
        assert!(enumerate_overlaps(&words).is_empty());
    }

    #[test]
    fn ab_ba_yields_two_crossings_in_order() {
        let words = vec!["ab".to_owned(), "ba".to_owned()];
        let overlaps = enumerate_overlaps(&words);
        assert_eq!(
            overlaps,
            vec![
                Crossing::new("ab", 0, "ba", 1),
                Crossing::new("ab", 1, "ba", 0),
            ]
        );
    }

    #[test]
    fn cat_act_finds_all_matching_pairs() {
        let words = vec!["cat".to_owned(), "act".to_owned()];
        let overlaps = enumerate_overlaps(&words);
        // c@0<->c@1, a@1<->a@0, t@2<->t@2
        assert_eq!(
            overlaps,
            vec![
                Crossing::new("cat", 0, "act", 1),
                Crossing::new("cat", 1, "act", 0),
                Crossing::new("cat", 2, "act", 2),
            ]
        );
    }

    #[test]
    fn ordering_is_outer_a_inner_b_then_i_then_j() {
        let words = vec!["aa".to_owned(), "aaa".to_owned(), "a".to_owned()];
        let overlaps = enumerate_overlaps(&words);
        let expected = vec![
            Crossing::new("aa", 0, "aaa", 0),
            Crossing::new("aa", 0, "aaa", 1),
            Crossing::new("aa", 0, "aaa", 2),
            Crossing::new("aa", 1, "aaa", 0),
            Crossing::new("aa", 1, "aaa", 1),
            Crossing::new("aa", 1, "aaa", 2),
            Crossing::new("aa", 0, "a", 0),
            Crossing::new("aa", 1, "a", 0),
            Crossing::new("aaa", 0, "a", 0),
            Crossing::new("aaa", 1, "a", 0),
            Crossing::new("aaa", 2, "a", 0),
        ];
        assert_eq!(overlaps, expected);
    }
}
