//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Usage of a built-in function: (array indexes, arguments).
fn builtin_usage(name: &str) -> Option<(&'static str, &'static str)> {
    match name {
        "Fenix_TodayShiftDay" => Some(("none", "[dayOffset]")),
        "Fenix_ControlledUniqueId" => Some(("0 or 1", "text with %tokens%")),
        "Fenix_RandomPositiveDecimalValue" => Some((
            "0 or 1",
            "maxIntegerDigits, numberOfDecimals[, integerPad, fractionPad]",
        )),
        "Fenix_RandomPositiveDecimalValue_Sum" => Some((
            "1 or more",
            "maxIntegerDigits, numberOfDecimals[, integerPad, fractionPad]",
        )),
        _ => None,
    }
}

/// Format registered function names as an ASCII table.
pub fn format_functions_table(names: &[String]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Placeholder", "Indexes", "Arguments"]);

    for name in names {
        let (indexes, arguments) = builtin_usage(name).unwrap_or(("?", "?"));
        table.add_row(vec![
            format!("{{{{{}(...)}}}}", name.replace('_', ".")),
            indexes.to_string(),
            arguments.to_string(),
        ]);
    }

    table
}
