use elist::ErrorChain;
use thiserror::Error;

/// A foreign error type with no knowledge of `ErrorChain`
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("connection refused by {host}")]
    ConnectionRefused { host: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build a chain by pushing `messages` in order, starting from nothing
///
/// The last message ends up at the head.
pub fn build_chain(messages: &[&str]) -> Option<ErrorChain> {
    messages
        .iter()
        .fold(None, |chain, message| Some(ErrorChain::push(chain, *message)))
}

/// Expected trace-back for message lines listed head first
pub fn expected_trace(lines: &[&str]) -> String {
    let mut trace = String::new();

    for (i, line) in lines.iter().enumerate() {
        trace.push_str(&format!("Error {}: \"{}\".\n", i + 1, line));
    }

    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_chain_empty() {
        assert!(build_chain(&[]).is_none());
    }

    #[test]
    fn test_build_chain_order() {
        let chain = build_chain(&["root", "middle", "top"]).unwrap();
        assert_eq!(chain.head().as_message(), Some("top"));
        assert_eq!(chain.root_cause().as_message(), Some("root"));
    }

    #[test]
    fn test_expected_trace() {
        assert_eq!(
            expected_trace(&["a", "b"]),
            "Error 1: \"a\".\nError 2: \"b\".\n"
        );
    }
}
