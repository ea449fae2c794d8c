use std::error::Error;
use std::fmt;

/// A foreign error adopted into a chain
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Payload of a single chain node
///
/// Exactly one variant is active per node. [`ErrorChain::new`] and
/// [`ErrorChain::push`] only ever produce `Message` and `Wrapped`; the other
/// two variants exist for chains assembled through
/// [`ErrorChain::with_payload`].
///
/// [`ErrorChain::new`]: crate::ErrorChain::new
/// [`ErrorChain::push`]: crate::ErrorChain::push
/// [`ErrorChain::with_payload`]: crate::ErrorChain::with_payload
#[derive(Debug)]
#[non_exhaustive]
pub enum Payload {
    /// A literal error description
    Message(String),
    /// A non-chain error, kept whole so nothing beyond its text is lost
    Wrapped(BoxError),
    /// No payload at all
    Absent,
    /// A value the renderer has no dedicated line format for
    Unrecognized(Box<dyn fmt::Debug + Send + Sync>),
}

/// Discriminant of a [`Payload`], used as a log field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Message,
    Wrapped,
    Absent,
    Unrecognized,
}

impl Payload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            Payload::Message(_) => PayloadKind::Message,
            Payload::Wrapped(_) => PayloadKind::Wrapped,
            Payload::Absent => PayloadKind::Absent,
            Payload::Unrecognized(_) => PayloadKind::Unrecognized,
        }
    }

    /// The message text, if this is a `Message` payload
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Payload::Message(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// The adopted error, if this is a `Wrapped` payload
    pub fn as_wrapped(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Payload::Wrapped(err) => Some(&**err),
            _ => None,
        }
    }
}

impl PayloadKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PayloadKind::Message => "message",
            PayloadKind::Wrapped => "wrapped",
            PayloadKind::Absent => "absent",
            PayloadKind::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
