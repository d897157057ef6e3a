//! Parse, route and run one placeholder.

use std::sync::Arc;

use bon::Builder;
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::dispatch::{DispatchError, FunctionRegistry, ScriptFallback};
use crate::entropy::derive_seed;
use crate::generators::GeneratorInput;
use crate::parser::{PlaceholderInvocation, parse_placeholder};

/// Outcome of routing one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A native handler produced the value.
    Resolved(String),
    /// No native handler is registered. The caller may forward the
    /// invocation to a [`ScriptFallback`].
    NotHandled(PlaceholderInvocation),
}

/// Routes placeholders to registered handlers.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use chrono::NaiveDate;
/// use fenix::{Dispatcher, FixedClock, Resolution};
///
/// let now = NaiveDate::from_ymd_opt(2026, 2, 24)
///     .and_then(|date| date.and_hms_opt(13, 7, 9))
///     .unwrap();
/// let dispatcher = Dispatcher::builder()
///     .clock(Arc::new(FixedClock::at(now)))
///     .build();
///
/// let resolution = dispatcher
///     .dispatch("{{Fenix.TodayShiftDay(-1)}}", "run-1")
///     .unwrap();
/// assert_eq!(resolution, Resolution::Resolved("2026-02-23".to_string()));
/// ```
#[derive(Builder)]
pub struct Dispatcher {
    /// Handlers by canonical name. Defaults to the built-in generators.
    #[builder(default = Arc::new(FunctionRegistry::with_builtins()))]
    registry: Arc<FunctionRegistry>,

    /// Time source for date-based generators. Defaults to the system clock.
    #[builder(default = Arc::new(SystemClock) as Arc<dyn Clock>)]
    clock: Arc<dyn Clock>,
}

impl Dispatcher {
    /// A dispatcher over the built-in generators and the system clock.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Parse `raw_text` and route the invocation.
    pub fn dispatch(
        &self,
        raw_text: &str,
        execution_identity: &str,
    ) -> Result<Resolution, DispatchError> {
        let invocation = parse_placeholder(raw_text)?;
        self.dispatch_invocation(&invocation, execution_identity)
    }

    /// Route an already parsed invocation.
    ///
    /// Handler errors are returned unchanged.
    pub fn dispatch_invocation(
        &self,
        invocation: &PlaceholderInvocation,
        execution_identity: &str,
    ) -> Result<Resolution, DispatchError> {
        let Some(handler) = self.registry.get(&invocation.function_name) else {
            debug!(function = %invocation.function_name, "no native handler");
            return Ok(Resolution::NotHandled(invocation.clone()));
        };

        let seed = derive_seed(
            execution_identity,
            invocation.use_execution_entropy,
            invocation.extra_entropy,
        );
        trace!(placeholder = %invocation.raw_text, seed, "derived seed");
        debug!(function = %invocation.function_name, "dispatching to native handler");

        let input = GeneratorInput {
            invocation,
            execution_identity,
            seed,
            clock: self.clock.as_ref(),
        };
        Ok(Resolution::Resolved(handler(&input)?))
    }

    /// Parse and resolve `raw_text`, forwarding unhandled names to `fallback`.
    pub fn resolve(
        &self,
        raw_text: &str,
        execution_identity: &str,
        fallback: &dyn ScriptFallback,
    ) -> Result<String, DispatchError> {
        let invocation = parse_placeholder(raw_text)?;
        self.resolve_invocation(&invocation, execution_identity, fallback)
    }

    /// Resolve a parsed invocation, forwarding unhandled names to `fallback`.
    pub fn resolve_invocation(
        &self,
        invocation: &PlaceholderInvocation,
        execution_identity: &str,
        fallback: &dyn ScriptFallback,
    ) -> Result<String, DispatchError> {
        match self.dispatch_invocation(invocation, execution_identity)? {
            Resolution::Resolved(value) => Ok(value),
            Resolution::NotHandled(invocation) => {
                debug!(function = %invocation.function_name, "forwarding to fallback");
                Ok(fallback.execute(&invocation, execution_identity)?)
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
