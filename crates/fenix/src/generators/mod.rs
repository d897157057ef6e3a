//! Built-in value generators.
//!
//! Each generator is a pure function of its [`GeneratorInput`]: the parsed
//! invocation, the derived seed and the clock. Generators convert their own
//! arguments and never share pseudo-random state.

mod date_shift;
mod decimal;
mod error;
mod input;
mod unique_id;

pub use date_shift::today_shift_day;
pub use decimal::{random_positive_decimal_value, random_positive_decimal_value_sum};
pub use error::GenerateError;
pub use input::GeneratorInput;
pub use unique_id::controlled_unique_id;

/// Generator function signature.
pub type GeneratorFn = fn(&GeneratorInput<'_>) -> Result<String, GenerateError>;

/// Canonical names and functions of the built-in generators.
pub const BUILTINS: [(&str, GeneratorFn); 4] = [
    ("Fenix_TodayShiftDay", today_shift_day),
    ("Fenix_ControlledUniqueId", controlled_unique_id),
    ("Fenix_RandomPositiveDecimalValue", random_positive_decimal_value),
    ("Fenix_RandomPositiveDecimalValue_Sum", random_positive_decimal_value_sum),
];
