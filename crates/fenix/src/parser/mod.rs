//! Placeholder parser.
//!
//! This module parses single placeholders into [`PlaceholderInvocation`]s and
//! scans whole documents into literal and placeholder segments. Arguments stay
//! untyped text; each generator converts its own arguments.

pub mod ast;
pub mod error;
mod document;
mod placeholder;

pub use ast::*;
pub use document::scan_document;
pub use error::{MalformedReason, ParseError};
pub use placeholder::parse_placeholder;
