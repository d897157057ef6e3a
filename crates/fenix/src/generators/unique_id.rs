//! `Fenix.ControlledUniqueId`: token substitution with seeded randomness.
//!
//! Supported tokens:
//!
//! | Token          | Replaced by                                   |
//! |----------------|-----------------------------------------------|
//! | `%YYYY-MM-DD%` | local date, `2026-02-24`                      |
//! | `%YYYYMMDD%`   | local date, `20260224`                        |
//! | `%YYMMDD%`     | local date, `260224`                          |
//! | `%hh:mm:ss%`   | local time, `13:07:09`                        |
//! | `%hh.mm.ss%`   | local time, `13.07.09`                        |
//! | `%hhmmss%`     | local time, `130709`                          |
//! | `%hhmm%`       | local time, `1307`                            |
//! | `%nnn%`        | one zero-padded random digit per `n`          |
//! | `%a(L; S)%`    | `L` random lowercase letters from seed `S`    |
//! | `%A(L; S)%`    | `L` random uppercase letters from seed `S`    |
//!
//! Digit tokens share one generator seeded with `index + seed`, consumed in
//! order of appearance. Letter tokens each use their own generator seeded
//! with the literal `S`. Tokens that cannot be honored stay verbatim.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::{Captures, Regex};

use crate::entropy::SeededRng;
use crate::generators::{GenerateError, GeneratorInput};

/// Date and time tokens with their chrono format strings, in replacement order.
const DATE_TIME_TOKENS: [(&str, &str); 7] = [
    ("%YYYY-MM-DD%", "%Y-%m-%d"),
    ("%YYYYMMDD%", "%Y%m%d"),
    ("%YYMMDD%", "%y%m%d"),
    ("%hh:mm:ss%", "%H:%M:%S"),
    ("%hh.mm.ss%", "%H.%M.%S"),
    ("%hhmmss%", "%H%M%S"),
    ("%hhmm%", "%H%M"),
];

/// Longest digit token: 10^19 still fits in a u64.
const MAX_DIGITS: usize = 19;

/// Longest letter token.
const MAX_LETTERS: usize = 1024;

const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

static DIGIT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(n+)%").expect("digit token pattern is valid"));

static LETTER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%([aA])\((\d+);\s*(\d+)\)%").expect("letter token pattern is valid")
});

/// Replace every supported token in the single text argument.
///
/// Accepts at most one array index (default 1) and exactly one argument.
pub fn controlled_unique_id(input: &GeneratorInput<'_>) -> Result<String, GenerateError> {
    let index = input.single_index()?;
    let [text] = input.arguments() else {
        return Err(input.argument_count_error("exactly 1"));
    };

    let text = replace_date_time_tokens(text, input.clock.now());
    let text = replace_digit_tokens(&text, &mut SeededRng::for_index(input.seed, index));
    Ok(replace_letter_tokens(&text))
}

fn replace_date_time_tokens(text: &str, now: NaiveDateTime) -> String {
    DATE_TIME_TOKENS
        .iter()
        .fold(text.to_string(), |text, (token, format)| {
            if text.contains(token) {
                text.replace(token, &now.format(format).to_string())
            } else {
                text
            }
        })
}

fn replace_digit_tokens(text: &str, rng: &mut SeededRng) -> String {
    DIGIT_TOKEN
        .replace_all(text, |caps: &Captures<'_>| {
            let width = caps[1].len();
            if width > MAX_DIGITS {
                return caps[0].to_string();
            }
            let bound = 10u64.pow(width as u32);
            format!("{:0width$}", rng.below(bound))
        })
        .into_owned()
}

fn replace_letter_tokens(text: &str) -> String {
    LETTER_TOKEN
        .replace_all(text, |caps: &Captures<'_>| {
            let alphabet = if &caps[1] == "A" { UPPERCASE } else { LOWERCASE };
            let length = caps[2].parse::<usize>().ok().filter(|l| *l <= MAX_LETTERS);
            let seed = caps[3].parse::<u64>().ok();
            match (length, seed) {
                (Some(length), Some(seed)) => seeded_letters(length, seed, alphabet),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// `length` letters drawn uniformly, with replacement, from `alphabet`.
fn seeded_letters(length: usize, seed: u64, alphabet: &[u8; 26]) -> String {
    let mut rng = SeededRng::new(seed);
    (0..length)
        .map(|_| char::from(alphabet[rng.below(26) as usize]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_tokens_share_one_generator() {
        let mut rng = SeededRng::new(1);
        assert_eq!(replace_digit_tokens("%nn%-%nnn%", &mut rng), "55-538");
    }

    #[test]
    fn overlong_digit_token_is_left_verbatim() {
        let token = format!("%{}%", "n".repeat(MAX_DIGITS + 1));
        let mut rng = SeededRng::new(1);
        assert_eq!(replace_digit_tokens(&token, &mut rng), token);
    }

    #[test]
    fn unparseable_letter_seed_is_left_verbatim() {
        let text = "%a(3; 99999999999999999999999)%";
        assert_eq!(replace_letter_tokens(text), text);
    }
}
