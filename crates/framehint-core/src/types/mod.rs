//! Types for the column completion API.
//!
//! This module defines the request handed over by the host, the reconstructed
//! literal model, and the intermediate structures produced while resolving a
//! partially typed call.

mod completion;
mod literal;
mod request;

// Re-export all public types
pub use completion::{
    ArgumentValue, CallSite, CompletionContext, CompletionResult, KeywordMatch, ParsedArgument,
    SiteKind,
};
pub use literal::{Literal, LiteralValue, Number};
pub use request::{CellInput, CompletionRequest};
