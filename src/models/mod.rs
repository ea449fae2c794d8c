pub(crate) mod node;
pub mod payload;

pub(crate) use node::Node;
pub use payload::{BoxError, Payload, PayloadKind};
