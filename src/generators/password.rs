use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::strength::SPECIAL_CHARS;
use crate::models::PasswordGenerationOptions;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &[u8] = b"0123456789";

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> String {
        generate_password(options)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a password using the thread-local RNG.
pub fn generate_password(options: &PasswordGenerationOptions) -> String {
    generate_password_with(options, &mut rand::thread_rng())
}

/// Generate a password drawing from `rng`.
///
/// Every enabled class contributes one character before the remaining
/// positions are filled from the combined pool. When `options.length` is
/// shorter than the number of enabled classes, the shuffle-then-truncate
/// step may drop some of those guaranteed characters.
pub fn generate_password_with<R: Rng + ?Sized>(options: &PasswordGenerationOptions, rng: &mut R) -> String {
    let classes: Vec<&[u8]> = [
        (options.include_lowercase, LOWERCASE),
        (options.include_uppercase, UPPERCASE),
        (options.include_numbers, NUMBERS),
        (options.include_symbols, SPECIAL_CHARS.as_bytes()),
    ]
    .into_iter()
    .filter_map(|(enabled, class)| enabled.then_some(class))
    .collect();

    let mut pool: Vec<u8> = classes.concat();
    if pool.is_empty() {
        pool = [LOWERCASE, UPPERCASE, NUMBERS, SPECIAL_CHARS.as_bytes()].concat();
    }

    let mut password: Vec<u8> = classes
        .iter()
        .filter_map(|class| class.choose(&mut *rng).copied())
        .collect();

    while password.len() < options.length {
        if let Some(c) = pool.choose(&mut *rng) {
            password.push(*c);
        }
    }

    password.shuffle(&mut *rng);
    password.truncate(options.length);

    password.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn options(length: usize, lower: bool, upper: bool, digits: bool, special: bool) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length,
            include_lowercase: lower,
            include_uppercase: upper,
            include_numbers: digits,
            include_symbols: special,
        }
    }

    #[test]
    fn all_classes_present_at_length_twelve() {
        let opts = options(12, true, true, true, true);
        for _ in 0..200 {
            let password = generate_password(&opts);
            assert_eq!(password.chars().count(), 12);
            assert!(password.chars().any(|c| c.is_ascii_lowercase()), "{}", password);
            assert!(password.chars().any(|c| c.is_ascii_uppercase()), "{}", password);
            assert!(password.chars().any(|c| c.is_ascii_digit()), "{}", password);
            assert!(password.chars().any(|c| SPECIAL_CHARS.contains(c)), "{}", password);
        }
    }

    #[test]
    fn short_length_is_still_exact() {
        let opts = options(2, true, true, true, true);
        for _ in 0..100 {
            assert_eq!(generate_password(&opts).chars().count(), 2);
        }
    }

    #[test]
    fn zero_length_gives_empty_password() {
        assert_eq!(generate_password(&options(0, true, true, true, true)), "");
        assert_eq!(generate_password(&options(0, false, false, false, false)), "");
    }

    #[test]
    fn only_enabled_classes_are_used() {
        let opts = options(32, false, false, true, false);
        for _ in 0..50 {
            assert!(generate_password(&opts).chars().all(|c| c.is_ascii_digit()));
        }

        let opts = options(32, true, false, false, true);
        for _ in 0..50 {
            let password = generate_password(&opts);
            assert!(password
                .chars()
                .all(|c| c.is_ascii_lowercase() || SPECIAL_CHARS.contains(c)));
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.chars().any(|c| SPECIAL_CHARS.contains(c)));
        }
    }

    #[test]
    fn no_classes_falls_back_to_everything() {
        let opts = options(64, false, false, false, false);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let password = generate_password_with(&opts, &mut rng);
            assert_eq!(password.len(), 64);
            assert!(password
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || SPECIAL_CHARS.contains(c)));
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let opts = PasswordGenerationOptions::default();
        let a = generate_password_with(&opts, &mut StdRng::seed_from_u64(42));
        let b = generate_password_with(&opts, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_eq!(a.len(), opts.length);
    }

    #[test]
    fn generator_wrapper_uses_options() {
        let generator = PasswordGenerator::new();
        let password = generator.generate_password(&options(16, false, true, false, false));
        assert_eq!(password.len(), 16);
        assert!(password.chars().all(|c| c.is_ascii_uppercase()));
    }
}
