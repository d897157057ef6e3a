//! CLI command implementations.

mod check;
mod eval;
mod functions;
mod parse;
mod render;

use std::sync::Arc;

use chrono::NaiveDateTime;
use fenix::{Clock, Dispatcher, FixedClock, SystemClock};

pub use check::{run_check, CheckArgs};
pub use eval::{run_eval, EvalArgs};
pub use functions::run_functions;
pub use parse::{run_parse, ParseArgs};
pub use render::{run_render, RenderArgs};

/// State shared by the commands: the dispatcher and the execution identity.
pub struct Session {
    pub dispatcher: Dispatcher,
    pub execution_identity: String,
}

impl Session {
    /// Build a session, freezing the clock when `now` is given.
    pub fn new(execution_identity: String, now: Option<NaiveDateTime>) -> Self {
        let clock: Arc<dyn Clock> = match now {
            Some(now) => Arc::new(FixedClock::at(now)),
            None => Arc::new(SystemClock),
        };
        Session {
            dispatcher: Dispatcher::builder().clock(clock).build(),
            execution_identity,
        }
    }
}
