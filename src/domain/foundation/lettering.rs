//! Option lettering.
//!
//! Assessments label options `a)`, `b)`, ... while the teacher quiz shows
//! `A`, `B`, ... Both follow index order and are kept as separate helpers.

/// Letter case used for an option label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Lower,
    Upper,
}

/// Letter for a zero-based option index: 0 → a, 25 → z, 26 → aa.
pub fn option_letter(index: usize, case: LetterCase) -> String {
    let base = match case {
        LetterCase::Lower => b'a',
        LetterCase::Upper => b'A',
    };
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        letters.push((base + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Assessment export label, e.g. `b)`.
pub fn assessment_label(index: usize) -> String {
    format!("{})", option_letter(index, LetterCase::Lower))
}

/// Teacher quiz button label, e.g. `B`.
pub fn quiz_label(index: usize) -> String {
    option_letter(index, LetterCase::Upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn assessment_labels_are_lowercase_with_paren() {
        let labels: Vec<_> = (0..4).map(assessment_label).collect();
        assert_eq!(labels, vec!["a)", "b)", "c)", "d)"]);
    }

    #[test]
    fn quiz_labels_are_uppercase() {
        let labels: Vec<_> = (0..4).map(quiz_label).collect();
        assert_eq!(labels, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn letters_continue_past_z() {
        assert_eq!(option_letter(25, LetterCase::Lower), "z");
        assert_eq!(option_letter(26, LetterCase::Lower), "aa");
        assert_eq!(option_letter(27, LetterCase::Upper), "AB");
    }

    proptest! {
        #[test]
        fn cases_differ_only_in_case(index in 0usize..2000) {
            let lower = option_letter(index, LetterCase::Lower);
            let upper = option_letter(index, LetterCase::Upper);
            prop_assert_eq!(lower.to_uppercase(), upper);
        }

        #[test]
        fn labels_are_distinct_for_distinct_indices(a in 0usize..2000, b in 0usize..2000) {
            prop_assume!(a != b);
            prop_assert_ne!(assessment_label(a), assessment_label(b));
        }
    }
}
