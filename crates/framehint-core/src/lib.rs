//! Column-name completion for partially typed data-frame expressions.
//!
//! Given the text up to the cursor in an interactive shell, `framehint-core`
//! works out which data-frame method call (or `frame[[` selection) is being
//! typed and which keyword argument the cursor is in, then suggests matching
//! column names. Input is almost always truncated mid-token, so parsing is
//! heuristic and fails closed: anything unrecognised produces no suggestions.
//!
//! Hosts plug in through the traits in [`host`] and register a
//! [`ColumnCompleter`] with [`host::install`].

pub mod completion;
pub mod config;
pub mod error;
pub mod host;
pub mod literal;
pub mod types;

pub use completion::{dispatch, locate, resolve, split_arguments, ColumnCompleter, StrategyTable};
pub use config::{CompletionConfig, KeywordRule};
pub use error::{CompletionError, HostError, LiteralError};
pub use host::{install, uninstall, Installation};
pub use literal::{reconstruct, trailing_value};

pub use types::{
    ArgumentValue, CallSite, CellInput, CompletionContext, CompletionRequest, CompletionResult,
    KeywordMatch, Literal, LiteralValue, Number, ParsedArgument, SiteKind,
};
