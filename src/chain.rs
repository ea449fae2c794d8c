#[cfg(feature = "anyhow")]
use std::any::Any;
use std::error::Error;
use std::fmt;

use crate::models::{BoxError, Node, Payload};
use crate::render::{self, Frames};

/// Error-message stack
///
/// A singly linked stack of error nodes. The head is the most recent
/// context; following `next` leads back to the root cause. Each node holds
/// either a message or an adopted foreign error.
///
/// `ErrorChain` implements [`std::error::Error`], and its `Display` output
/// is the full trace-back (see [`render()`](crate::render())). Since that
/// text already covers every node, `source()` only reports what lies beneath
/// an adopted foreign error.
///
/// # Example
///
/// ```
/// use elist::ErrorChain;
///
/// fn function2() -> Result<(), ErrorChain> {
///     Err(ErrorChain::new("function2: file not found"))
/// }
///
/// fn function1() -> Result<(), ErrorChain> {
///     function2().map_err(|e| ErrorChain::push(Some(e), "function1: error returned by function2"))
/// }
///
/// let err = function1().unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Error 1: \"function1: error returned by function2\".\n\
///      Error 2: \"function2: file not found\".\n"
/// );
/// ```
pub struct ErrorChain {
    head: Box<Node>,
}

impl ErrorChain {
    /// Create a single-node stack from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_head(Node::new(Payload::Message(message.into()), None))
    }

    /// Create a single-node stack from formatted text
    ///
    /// Usually reached through the [`newf!`](crate::newf) macro.
    pub fn new_fmt(args: fmt::Arguments<'_>) -> Self {
        Self::new(fmt::format(args))
    }

    /// Return a new stack with `message` at the head
    ///
    /// - `None` starts a fresh stack, same as [`ErrorChain::new`].
    /// - An `ErrorChain` is linked in as-is, without copying. It is moved
    ///   into the new stack and cannot be used afterwards.
    /// - Any other error is wrapped in a node of its own, which becomes the
    ///   tail of the new stack. An `anyhow::Error` that holds nothing but an
    ///   `ErrorChain` is unpacked and spliced (with the `anyhow` feature).
    ///
    /// A bare `None` leaves `E` unconstrained, so name any error type:
    ///
    /// ```
    /// use elist::ErrorChain;
    ///
    /// let err = ErrorChain::push(None::<ErrorChain>, "top-level failure");
    /// assert_eq!(err.to_string(), "Error 1: \"top-level failure\".\n");
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// use elist::ErrorChain;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
    /// let err = ErrorChain::push(Some(io), "load_config: open failed");
    ///
    /// assert_eq!(err.depth(), 2);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Error 1: \"load_config: open failed\".\nError 2: \"config.toml missing\".\n"
    /// );
    /// ```
    pub fn push<E>(existing: Option<E>, message: impl Into<String>) -> Self
    where
        E: Into<BoxError> + 'static,
    {
        let next = existing.map(tail_of);
        Self::from_head(Node::new(Payload::Message(message.into()), next))
    }

    /// Formatted version of [`ErrorChain::push`]
    ///
    /// Usually reached through the [`pushf!`](crate::pushf) macro.
    pub fn push_fmt<E>(existing: Option<E>, args: fmt::Arguments<'_>) -> Self
    where
        E: Into<BoxError> + 'static,
    {
        Self::push(existing, fmt::format(args))
    }

    /// Wrap any error as a stack
    ///
    /// An `ErrorChain` comes back unchanged; anything else becomes a single
    /// `Wrapped` node.
    pub fn adopt<E>(err: E) -> Self
    where
        E: Into<BoxError> + 'static,
    {
        Self { head: tail_of(err) }
    }

    /// Push a message onto this stack, consuming it
    pub fn context(self, message: impl Into<String>) -> Self {
        Self::from_head(Node::new(Payload::Message(message.into()), Some(self.head)))
    }

    /// Build a stack from an explicit payload and an optional tail
    ///
    /// This is the only way to get `Absent` or `Unrecognized` nodes into a
    /// stack.
    pub fn with_payload(payload: Payload, tail: Option<ErrorChain>) -> Self {
        Self::from_head(Node::new(payload, tail.map(|chain| chain.head)))
    }

    fn from_head(node: Node) -> Self {
        Self {
            head: Box::new(node),
        }
    }

    /// Payload of the most recent node
    pub fn head(&self) -> &Payload {
        &self.head.payload
    }

    /// Payload of the oldest node
    pub fn root_cause(&self) -> &Payload {
        let mut node = &*self.head;
        while let Some(next) = node.next.as_deref() {
            node = next;
        }
        &node.payload
    }

    /// Number of nodes in the stack (always at least 1)
    pub fn depth(&self) -> usize {
        self.head.links().count()
    }

    /// Payloads from head to root
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            links: self.head.links(),
        }
    }

    /// Numbered trace-back lines from head to root
    pub fn frames(&self) -> Frames<'_> {
        Frames::new(&self.head)
    }
}

/// Turn any error into the tail of a new node
fn tail_of<E>(err: E) -> Box<Node>
where
    E: Into<BoxError> + 'static,
{
    let mut slot = Some(err);
    if let Some(node) = splice_anyhow(&mut slot) {
        return node;
    }

    match slot {
        Some(err) => tail_from(err.into()),
        None => Box::new(Node::new(Payload::Absent, None)),
    }
}

/// Take an `anyhow::Error` out of `slot` and turn it into a tail
///
/// This has to happen before boxing: once converted, an `anyhow::Error` is
/// an opaque wrapper that no longer downcasts to the error it holds. A chain
/// is spliced only when nothing was attached on top of it, otherwise the
/// `anyhow` context would be lost.
#[cfg(feature = "anyhow")]
fn splice_anyhow<E: 'static>(slot: &mut Option<E>) -> Option<Box<Node>> {
    let err = (slot as &mut dyn Any)
        .downcast_mut::<Option<anyhow::Error>>()?
        .take()?;

    let bare = err
        .downcast_ref::<ErrorChain>()
        .is_some_and(|chain| chain.to_string() == err.to_string());
    if !bare {
        return Some(tail_from(err.into()));
    }

    match err.downcast::<ErrorChain>() {
        Ok(chain) => Some(chain.head),
        Err(err) => Some(tail_from(err.into())),
    }
}

#[cfg(not(feature = "anyhow"))]
fn splice_anyhow<E>(_slot: &mut Option<E>) -> Option<Box<Node>> {
    None
}

/// Turn a boxed error into the tail of a new node, splicing in chains
fn tail_from(err: BoxError) -> Box<Node> {
    match err.downcast::<ErrorChain>() {
        Ok(chain) => {
            let ErrorChain { head } = *chain;
            head
        }
        Err(foreign) => {
            #[cfg(feature = "log")]
            tracing::trace!(error = %foreign, "adopting foreign error into error chain");
            Box::new(Node::new(Payload::Wrapped(foreign), None))
        }
    }
}

/// Iterator over the payloads of a chain, head first
pub struct Iter<'a> {
    links: crate::models::node::Links<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Payload;

    fn next(&mut self) -> Option<Self::Item> {
        self.links.next().map(|node| &node.payload)
    }
}

impl<'a> IntoIterator for &'a ErrorChain {
    type Item = &'a Payload;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_trace(f, &self.head)
    }
}

impl fmt::Debug for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorChain").field(&self.head).finish()
    }
}

impl Error for ErrorChain {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        // Display already printed the wrapped error itself
        self.iter()
            .find_map(Payload::as_wrapped)
            .and_then(|err| err.source())
    }
}

impl From<&str> for ErrorChain {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorChain {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
