use std::fmt;

use super::Payload;

/// One link of an error-message stack
///
/// `next` points at the chronologically prior node. Nodes are never mutated
/// once linked.
pub(crate) struct Node {
    pub(crate) payload: Payload,
    pub(crate) next: Option<Box<Node>>,
}

impl Node {
    pub(crate) fn new(payload: Payload, next: Option<Box<Node>>) -> Self {
        Self { payload, next }
    }

    /// Walk from this node to the root, this node first
    pub(crate) fn links(&self) -> Links<'_> {
        Links { next: Some(self) }
    }
}

// Unlink iteratively, otherwise a deep stack recurses once per node.
impl Drop for Node {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.links().map(|node| &node.payload))
            .finish()
    }
}

pub(crate) struct Links<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node)
    }
}
