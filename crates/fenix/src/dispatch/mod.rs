//! Registry, dispatcher and document resolution.
//!
//! The [`FunctionRegistry`] maps canonical function names to handlers. The
//! [`Dispatcher`] parses a placeholder, derives its seed and runs the handler,
//! or reports [`Resolution::NotHandled`] so the caller can forward the
//! invocation to a [`ScriptFallback`].

mod dispatcher;
mod document;
mod error;
mod fallback;
mod registry;

pub use dispatcher::{Dispatcher, Resolution};
pub use document::{
    DocumentResolver, ResolveError, ResolvedDocument, ResolvedPlaceholder, ResolvedSegment,
    TestDataSource,
};
pub use error::{DispatchError, RegistryError};
pub use fallback::{FallbackError, NoFallback, ScriptFallback};
pub use registry::{FunctionRegistry, Handler};
