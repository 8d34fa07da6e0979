//! Error types for fragment parsing and completion.
//!
//! # Error Handling Strategy
//!
//! Partial input is the normal case for a completer, so most "failures" are not
//! errors at all:
//!
//! - Text that matches no call or slice shape, a target that does not resolve to a
//!   data frame, and a keyword without a registered strategy are ordinary `None` /
//!   empty-list branches.
//!
//! - [`LiteralError`]: a collection fragment that cannot be closed into valid
//!   literal syntax. The resolver records it as
//!   [`crate::types::ArgumentValue::Unparseable`], which completes to nothing.
//!
//! - [`HostError`]: the host could not describe a method's parameters at all. This
//!   is the only condition that reaches [`CompletionError`], and the provider entry
//!   point still degrades it to an empty suggestion list.

use thiserror::Error;

/// Error raised when a fragment cannot be parsed as a literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// Input ended before the literal was closed.
    #[error("unexpected end of literal")]
    UnexpectedEnd,

    /// A character that cannot start or continue a literal.
    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    /// `{key: value}` literals are recognised but not reconstructed.
    #[error("dictionary literals are not supported (offset {offset})")]
    UnsupportedDict { offset: usize },

    /// A complete literal followed by more text.
    #[error("trailing input after literal at offset {offset}")]
    TrailingInput { offset: usize },

    /// A numeric token that does not fit any number type.
    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    /// Collections nested deeper than the parser follows.
    #[error("literal nested deeper than {limit} levels (offset {offset})")]
    TooDeep { limit: usize, offset: usize },
}

/// Error reported by the host while introspecting a tabular object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot describe parameters of `{method}`: {reason}")]
pub struct HostError {
    pub method: String,
    pub reason: String,
}

impl HostError {
    pub fn new(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            reason: reason.into(),
        }
    }
}

/// Error surfaced by [`crate::ColumnCompleter::try_complete`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error(transparent)]
    Host(#[from] HostError),
}
