// src/core/strength.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Characters counted by the `special` criterion.
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Minimum number of characters for the `length` criterion.
pub const MIN_LENGTH: usize = 8;

/// Highest possible score, one point per criterion.
pub const MAX_SCORE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Digits,
    Special,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digits,
        Criterion::Special,
    ];
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Length => write!(f, "Length"),
            Criterion::Uppercase => write!(f, "Uppercase"),
            Criterion::Lowercase => write!(f, "Lowercase"),
            Criterion::Digits => write!(f, "Digits"),
            Criterion::Special => write!(f, "Special"),
        }
    }
}

/// Which of the five criteria a password satisfies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaSet {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub special: bool,
}

impl CriteriaSet {
    pub fn get(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Length => self.length,
            Criterion::Uppercase => self.uppercase,
            Criterion::Lowercase => self.lowercase,
            Criterion::Digits => self.digits,
            Criterion::Special => self.special,
        }
    }

    /// Criteria in display order, paired with whether they are met.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    pub fn score(&self) -> u8 {
        self.iter().filter(|(_, met)| *met).count() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= MAX_SCORE => StrengthLabel::Strong,
            3 | 4 => StrengthLabel::Moderate,
            _ => StrengthLabel::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Check a password against the five criteria
pub fn evaluate_strength(password: &str) -> (u8, CriteriaSet) {
    let criteria = CriteriaSet {
        length: password.chars().count() >= MIN_LENGTH,
        uppercase: password.chars().any(char::is_uppercase),
        lowercase: password.chars().any(char::is_lowercase),
        digits: password.chars().any(is_decimal_digit),
        special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    };

    (criteria.score(), criteria)
}

// Decimal digits from any script (general category Nd)
fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

pub fn label_for_score(score: u8) -> &'static str {
    StrengthLabel::from_score(score).as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria_from_bits(bits: u8) -> CriteriaSet {
        CriteriaSet {
            length: bits & 0b00001 != 0,
            uppercase: bits & 0b00010 != 0,
            lowercase: bits & 0b00100 != 0,
            digits: bits & 0b01000 != 0,
            special: bits & 0b10000 != 0,
        }
    }

    #[test]
    fn strong_password_meets_every_criterion() {
        let (score, criteria) = evaluate_strength("Passw0rd!");
        assert_eq!(
            criteria,
            CriteriaSet {
                length: true,
                uppercase: true,
                lowercase: true,
                digits: true,
                special: true,
            }
        );
        assert_eq!(score, 5);
        assert_eq!(label_for_score(score), "Strong");
    }

    #[test]
    fn short_lowercase_password_is_weak() {
        let (score, criteria) = evaluate_strength("pass");
        assert_eq!(
            criteria,
            CriteriaSet {
                lowercase: true,
                ..CriteriaSet::default()
            }
        );
        assert_eq!(score, 1);
        assert_eq!(label_for_score(score), "Weak");
    }

    #[test]
    fn empty_password_scores_zero() {
        let (score, criteria) = evaluate_strength("");
        assert_eq!(score, 0);
        assert_eq!(criteria, CriteriaSet::default());
        assert_eq!(StrengthLabel::from_score(score), StrengthLabel::Weak);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(!evaluate_strength("Abc1!xy").1.length);
        assert!(evaluate_strength("Abc1!xyz").1.length);
        // seven characters, fourteen bytes
        assert!(!evaluate_strength("ééééééé").1.length);
        assert!(evaluate_strength("éééééééé").1.length);
    }

    #[test]
    fn special_only_counts_fixed_set() {
        for c in SPECIAL_CHARS.chars() {
            assert!(evaluate_strength(&format!("abc{}", c)).1.special, "{}", c);
        }
        for c in ['(', ')', '-', '_', '?', ' ', '~'] {
            assert!(!evaluate_strength(&format!("abc{}", c)).1.special, "{}", c);
        }
    }

    #[test]
    fn case_checks_are_unicode_aware() {
        let (_, criteria) = evaluate_strength("ÄÖÜ");
        assert!(criteria.uppercase);
        assert!(!criteria.lowercase);

        let (_, criteria) = evaluate_strength("ßø");
        assert!(criteria.lowercase);
        assert!(!criteria.uppercase);
    }

    #[test]
    fn digits_include_other_scripts() {
        let (score, criteria) = evaluate_strength("Abcdefg\u{0663}!");
        assert!(criteria.digits);
        assert_eq!(score, 5);

        assert!(evaluate_strength("abc\u{0967}").1.digits);
        assert!(evaluate_strength("abc\u{FF17}").1.digits);
        assert!(evaluate_strength("abc7").1.digits);
    }

    #[test]
    fn non_decimal_numerals_are_not_digits() {
        for c in ['\u{00B2}', '\u{00BD}', '\u{2167}'] {
            assert!(!evaluate_strength(&format!("abc{}", c)).1.digits, "{}", c);
        }
    }

    #[test]
    fn score_matches_count_of_true_criteria() {
        for password in ["", "a", "A1", "aA1!", "aaaaaaaa", "AAAAAAA1", "Passw0rd!", "12345678"] {
            let (score, criteria) = evaluate_strength(password);
            let expected = criteria.iter().filter(|(_, met)| *met).count() as u8;
            assert_eq!(score, expected, "{}", password);
            assert!(score <= MAX_SCORE);
        }
    }

    #[test]
    fn label_mapping_covers_all_combinations() {
        for bits in 0u8..32 {
            let criteria = criteria_from_bits(bits);
            let score = criteria.score();
            assert_eq!(score as u32, bits.count_ones());

            let expected = match score {
                5 => "Strong",
                3 | 4 => "Moderate",
                _ => "Weak",
            };
            assert_eq!(label_for_score(score), expected, "bits {:05b}", bits);
        }
    }

    #[test]
    fn criteria_iterate_in_display_order() {
        let names: Vec<String> = CriteriaSet::default()
            .iter()
            .map(|(c, _)| c.to_string())
            .collect();
        assert_eq!(names, ["Length", "Uppercase", "Lowercase", "Digits", "Special"]);
    }
}
