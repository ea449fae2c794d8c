use std::borrow::Cow;
use std::fmt;

use crate::chain::ErrorChain;
use crate::models::{Node, Payload, PayloadKind};

/// One line of a trace-back: a node and its 1-based position from the head
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    position: usize,
    payload: &'a Payload,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(position: usize, payload: &'a Payload) -> Self {
        Self { position, payload }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn payload(&self) -> &'a Payload {
        self.payload
    }

    pub fn kind(&self) -> PayloadKind {
        self.payload.kind()
    }
}

/// Formats the line without its trailing newline
///
/// ```text
/// Error 1: "handler: request failed".
/// Error 2: "disk full".
/// Error 3: [error == nil].
/// Error 4: [Unrecognized error] "42".
/// ```
impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.position;
        match self.payload {
            Payload::Message(text) => write!(f, "Error {n}: \"{text}\"."),
            Payload::Wrapped(err) => {
                let text = err.to_string();
                write!(f, "Error {n}: \"{}\".", single_line(&text))
            }
            Payload::Absent => write!(f, "Error {n}: [error == nil]."),
            Payload::Unrecognized(value) => {
                write!(f, "Error {n}: [Unrecognized error] \"{value:?}\".")
            }
        }
    }
}

/// Join a foreign description's lines with spaces
///
/// A foreign error may print several lines (another error stack, say), but a
/// frame must stay on one.
fn single_line(text: &str) -> Cow<'_, str> {
    if !text.contains('\n') {
        return Cow::Borrowed(text);
    }
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    Cow::Owned(lines.join(" "))
}

/// Iterator over the frames of a chain, head first
pub struct Frames<'a> {
    position: usize,
    next: Option<&'a Node>,
}

impl<'a> Frames<'a> {
    pub(crate) fn new(head: &'a Node) -> Self {
        Self {
            position: 1,
            next: Some(head),
        }
    }
}

impl<'a> Iterator for Frames<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        let frame = Frame::new(self.position, &node.payload);
        self.next = node.next.as_deref();
        self.position += 1;
        Some(frame)
    }
}

/// Write every frame from `head` down, one newline-terminated line each
pub(crate) fn write_trace<W: fmt::Write>(out: &mut W, head: &Node) -> fmt::Result {
    for frame in Frames::new(head) {
        writeln!(out, "{frame}")?;
    }
    Ok(())
}

/// Render a chain as a plain-text trace-back
///
/// Messages are listed in LIFO order: the outermost context first, the root
/// cause last. `None` renders as the empty string.
///
/// # Example
///
/// ```
/// use elist::{render, ErrorChain};
///
/// let inner = ErrorChain::new("db: connection refused");
/// let outer = ErrorChain::push(Some(inner), "service: query failed");
///
/// assert_eq!(
///     render(Some(&outer)),
///     "Error 1: \"service: query failed\".\nError 2: \"db: connection refused\".\n"
/// );
/// assert_eq!(render(None), "");
/// ```
pub fn render(chain: Option<&ErrorChain>) -> String {
    chain.map(ToString::to_string).unwrap_or_default()
}
