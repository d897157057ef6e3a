//! `Fenix.TodayShiftDay`: today's local date shifted by a number of days.

use chrono::TimeDelta;

use crate::generators::{GenerateError, GeneratorInput};

/// Output format of the shifted date.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date plus an optional day offset, as `YYYY-MM-DD`.
///
/// Takes no array index and zero or one integer argument. The time of day is
/// discarded before shifting.
pub fn today_shift_day(input: &GeneratorInput<'_>) -> Result<String, GenerateError> {
    if !input.indexes().is_empty() {
        return Err(GenerateError::UnsupportedIndex {
            placeholder: input.placeholder().to_string(),
            indexes: input.indexes().to_vec(),
        });
    }

    let (argument, offset) = match input.arguments() {
        [] => ("0", 0),
        [argument] => (argument.as_str(), input.integer_argument(argument)?),
        _ => return Err(input.argument_count_error("0 or 1")),
    };

    let today = input.clock.now().date();
    let shifted = TimeDelta::try_days(offset)
        .and_then(|delta| today.checked_add_signed(delta))
        .ok_or_else(|| input.out_of_range(argument, "shifted date is outside the calendar"))?;

    Ok(shifted.format(DATE_FORMAT).to_string())
}
