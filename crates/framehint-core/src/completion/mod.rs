//! Column completion for partially typed calls and selections.
//!
//! The pipeline runs in four steps, each usable on its own:
//!
//! 1. [`locate`] finds the open `object.method(` call or `object[[` selection
//!    the cursor is in.
//! 2. [`split_arguments`] and [`parse_arguments`] cut the argument text into
//!    fragments.
//! 3. [`resolve`] binds fragments to keywords, by name or by position.
//! 4. [`dispatch`] runs the strategy registered for the keyword being typed.
//!
//! [`ColumnCompleter`] ties the steps together behind the host traits.

mod dispatcher;
mod engine;
mod locator;
mod resolver;
mod splitter;

pub use dispatcher::{
    complete_columns, dispatch, slice_binding, CompletionStrategy, FunctionKey, StrategyTable,
    SLICE_KEYWORD,
};
pub use engine::ColumnCompleter;
pub use locator::{locate, slice_current_value};
pub use resolver::{parse_arguments, resolve};
pub use splitter::{holds_multiple_arguments, split_arguments};
