//! `Fenix.RandomPositiveDecimalValue` and its `.Sum` variant.
//!
//! Both take `(maxIntegerDigits, numberOfDecimals)` or
//! `(maxIntegerDigits, numberOfDecimals, integerPadWidth, fractionPadWidth)`.

use crate::entropy::SeededRng;
use crate::format::{format_decimal, pad_decimal, pow10, round_half_up};
use crate::generators::{GenerateError, GeneratorInput};

/// Largest total number of digits a value may request; beyond this `f64`
/// overflows during rounding.
const MAX_TOTAL_DIGITS: u32 = 300;

/// Largest integer or fraction pad width.
const MAX_PAD_WIDTH: u32 = 1024;

/// Validated decimal arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DecimalSpec {
    integer_digits: u32,
    decimals: u32,
    /// `(integer width, fraction width)` when four arguments were given.
    padding: Option<(usize, usize)>,
}

impl DecimalSpec {
    fn parse(input: &GeneratorInput<'_>) -> Result<Self, GenerateError> {
        let arguments = input.arguments();
        if arguments.len() != 2 && arguments.len() != 4 {
            return Err(input.argument_count_error("2 or 4"));
        }

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            let value = input.integer_argument(argument)?;
            let value = u32::try_from(value)
                .map_err(|_| input.out_of_range(argument, "must be between 0 and 4294967295"))?;
            values.push(value);
        }

        let (integer_digits, decimals) = (values[0], values[1]);
        if integer_digits.saturating_add(decimals) > MAX_TOTAL_DIGITS {
            return Err(input.out_of_range(
                &arguments[0],
                "integer digits plus decimals must not exceed 300",
            ));
        }

        let padding = match values[..] {
            [_, _, integer_width, fraction_width] => {
                let widths = [(integer_width, &arguments[2]), (fraction_width, &arguments[3])];
                for (width, argument) in widths {
                    if width > MAX_PAD_WIDTH {
                        return Err(input.out_of_range(argument, "pad width must not exceed 1024"));
                    }
                }
                Some((integer_width as usize, fraction_width as usize))
            }
            _ => None,
        };

        Ok(DecimalSpec {
            integer_digits,
            decimals,
            padding,
        })
    }

    /// Format and, with four arguments, pad a value.
    fn render(&self, value: f64) -> String {
        let text = format_decimal(value, self.decimals);
        match self.padding {
            Some((integer_width, fraction_width)) => pad_decimal(&text, integer_width, fraction_width),
            None => text,
        }
    }
}

/// One deterministic positive decimal value.
///
/// Accepts at most one array index (default 1).
pub fn random_positive_decimal_value(input: &GeneratorInput<'_>) -> Result<String, GenerateError> {
    let index = input.single_index()?;
    let spec = DecimalSpec::parse(input)?;
    Ok(spec.render(random_decimal(input.seed, index, &spec)))
}

/// Sum of per-index values.
///
/// Each index draws the value of its absolute index; negative indexes
/// subtract it. No indexes means `[1]`.
pub fn random_positive_decimal_value_sum(
    input: &GeneratorInput<'_>,
) -> Result<String, GenerateError> {
    let spec = DecimalSpec::parse(input)?;
    let indexes = match input.indexes() {
        [] => &[1][..],
        indexes => indexes,
    };

    let mut total = 0.0;
    for &index in indexes {
        let value = random_decimal(input.seed, index.wrapping_abs(), &spec);
        if index >= 0 {
            total += value;
        } else {
            total -= value;
        }
    }

    Ok(spec.render(round_half_up(total, spec.decimals)))
}

/// Draw the value for one index: an integer part below
/// `10^integer_digits`, then (with decimals) a fractional part of
/// `decimals` digits from the same generator, rounded to `decimals` places.
fn random_decimal(seed: u64, index: i64, spec: &DecimalSpec) -> f64 {
    let mut rng = SeededRng::for_index(seed, index);
    let mut value = (pow10(spec.integer_digits as i32) * rng.next_f64()).floor();
    if spec.decimals > 0 {
        let decimals = spec.decimals as i32;
        let fraction = (pow10(decimals) * rng.next_f64()).floor();
        value += pow10(-decimals) * fraction;
    }
    round_half_up(value, spec.decimals)
}
