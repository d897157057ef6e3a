//! Implementation of the `fenix functions` command.

use crate::commands::Session;
use crate::output::table::format_functions_table;

/// Run the functions command.
pub fn run_functions(session: &Session) -> miette::Result<i32> {
    let names = session.dispatcher.registry().function_names();
    println!("{}", format_functions_table(&names));
    Ok(exitcode::OK)
}
