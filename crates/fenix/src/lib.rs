pub mod clock;
pub mod dispatch;
pub mod entropy;
pub mod format;
pub mod generators;
pub mod parser;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dispatch::{
    DispatchError, Dispatcher, DocumentResolver, FallbackError, FunctionRegistry, Handler,
    NoFallback, RegistryError, ResolveError, ResolvedDocument, ResolvedPlaceholder,
    ResolvedSegment, Resolution, ScriptFallback, TestDataSource,
};
pub use entropy::{SeededRng, derive_seed, execution_hash};
pub use generators::{GenerateError, GeneratorFn, GeneratorInput};
pub use parser::{
    DocumentSegment, MalformedReason, ParseError, PlaceholderInvocation, PlaceholderKind,
    parse_placeholder, scan_document,
};
