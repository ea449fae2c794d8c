//! Error-message stacks for error trace-backs.
//!
//! An [`ErrorChain`] lets each function on the way up push its own message
//! onto the error it received, so the caller can print the whole sequence
//! instead of just the last message:
//!
//! ```text
//! Error 1: "function0: error returned by function1".
//! Error 2: "function1: error returned by function2".
//! Error 3: "function2: [error description etc.]".
//! ```
//!
//! Any error type can be pushed onto: errors that are not already a chain are
//! wrapped whole as the root of the new stack.

pub mod chain;
pub mod ext;
#[cfg(feature = "log")]
pub mod logging;
pub mod models;
pub mod render;

pub use chain::{ErrorChain, Iter};
pub use ext::ResultExt;
pub use models::{BoxError, Payload, PayloadKind};
pub use render::{render, Frame, Frames};

/// Create an [`ErrorChain`] from a format string
///
/// ```
/// let n = -3;
/// let err = elist::newf!("function0: negative value returned by function1: {}", n);
/// assert_eq!(
///     err.to_string(),
///     "Error 1: \"function0: negative value returned by function1: -3\".\n"
/// );
/// ```
#[macro_export]
macro_rules! newf {
    ($($arg:tt)*) => {
        $crate::ErrorChain::new_fmt(::std::format_args!($($arg)*))
    };
}

/// Push a formatted message onto an optional error
///
/// ```
/// use elist::ErrorChain;
///
/// let inner = ErrorChain::new("function1: out of range");
/// let err = elist::pushf!(Some(inner), "function0: call to function1({}) failed", 12);
/// assert_eq!(err.depth(), 2);
/// ```
#[macro_export]
macro_rules! pushf {
    ($existing:expr, $($arg:tt)*) => {
        $crate::ErrorChain::push_fmt($existing, ::std::format_args!($($arg)*))
    };
}
