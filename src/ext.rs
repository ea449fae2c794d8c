use crate::chain::ErrorChain;
use crate::models::BoxError;

/// Push context onto the error of a `Result`
///
/// ```
/// use elist::{ErrorChain, ResultExt};
///
/// fn parse_port(raw: &str) -> Result<u16, ErrorChain> {
///     raw.parse::<u16>()
///         .with_push_err(|| format!("parse_port: bad value {raw:?}"))
/// }
///
/// let err = parse_port("http").unwrap_err();
/// assert_eq!(err.depth(), 2);
/// ```
pub trait ResultExt<T> {
    /// Replace the error with a stack that has `message` at its head
    fn push_err<M>(self, message: M) -> Result<T, ErrorChain>
    where
        M: Into<String>;

    /// Like [`push_err`](ResultExt::push_err), building the message only on error
    fn with_push_err<M, F>(self, message: F) -> Result<T, ErrorChain>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError> + 'static,
{
    fn push_err<M>(self, message: M) -> Result<T, ErrorChain>
    where
        M: Into<String>,
    {
        self.map_err(|err| ErrorChain::push(Some(err), message))
    }

    fn with_push_err<M, F>(self, message: F) -> Result<T, ErrorChain>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        self.map_err(|err| ErrorChain::push(Some(err), message()))
    }
}
