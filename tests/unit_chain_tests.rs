mod common;

use common::{build_chain, StorageError};
use elist::{newf, pushf, ErrorChain, Payload, PayloadKind};

#[test]
fn test_new_creates_single_node() {
    let chain = ErrorChain::new("db: connection refused");

    assert_eq!(chain.depth(), 1);
    assert_eq!(chain.head().as_message(), Some("db: connection refused"));
    assert_eq!(chain.root_cause().as_message(), Some("db: connection refused"));
}

#[test]
fn test_new_takes_message_as_is() {
    let chain = ErrorChain::new("");
    assert_eq!(chain.head().as_message(), Some(""));

    let chain = ErrorChain::new("line one\nline two");
    assert_eq!(chain.head().as_message(), Some("line one\nline two"));
}

#[test]
fn test_new_formatted() {
    let item = 17;
    let chain = newf!("StructName::method: error in item {}", item);

    assert_eq!(chain.depth(), 1);
    assert_eq!(
        chain.head().as_message(),
        Some("StructName::method: error in item 17")
    );
}

#[test]
fn test_new_fmt_matches_new() {
    let a = ErrorChain::new_fmt(format_args!("{}-{}", "x", 2));
    let b = ErrorChain::new("x-2");
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn test_push_onto_none_starts_fresh() {
    let chain = ErrorChain::push(None::<ErrorChain>, "top-level failure");

    assert_eq!(chain.depth(), 1);
    assert_eq!(chain.head().as_message(), Some("top-level failure"));
}

#[test]
fn test_push_onto_chain_links_existing_nodes() {
    let inner = build_chain(&["root", "middle"]).unwrap();
    let chain = ErrorChain::push(Some(inner), "top");

    let messages: Vec<_> = chain.iter().filter_map(Payload::as_message).collect();
    assert_eq!(messages, vec!["top", "middle", "root"]);
}

#[test]
fn test_push_adopts_foreign_error() {
    let foreign = StorageError::ConnectionRefused {
        host: "db01".to_string(),
    };
    let chain = ErrorChain::push(Some(foreign), "service: query failed");

    assert_eq!(chain.depth(), 2);
    let kinds: Vec<_> = chain.iter().map(Payload::kind).collect();
    assert_eq!(kinds, vec![PayloadKind::Message, PayloadKind::Wrapped]);

    // The foreign error is kept whole, not flattened to text
    let wrapped = chain.root_cause().as_wrapped().unwrap();
    assert!(matches!(
        wrapped.downcast_ref::<StorageError>(),
        Some(StorageError::ConnectionRefused { host }) if host == "db01"
    ));
}

#[test]
fn test_pushf_formats_message() {
    let n = 3;
    let chain = pushf!(
        Some(ErrorChain::new("function1: failed")),
        "function0: call to function1({}) failed",
        n
    );

    assert_eq!(
        chain.head().as_message(),
        Some("function0: call to function1(3) failed")
    );
    assert_eq!(chain.depth(), 2);
}

#[test]
fn test_pushf_onto_none() {
    let chain = pushf!(None::<ErrorChain>, "retry {} of {}", 2, 5);
    assert_eq!(chain.depth(), 1);
    assert_eq!(chain.head().as_message(), Some("retry 2 of 5"));
}

#[test]
fn test_context_matches_push() {
    let by_method = ErrorChain::new("root").context("top");
    let by_push = ErrorChain::push(Some(ErrorChain::new("root")), "top");

    assert_eq!(by_method.to_string(), by_push.to_string());
}

#[test]
fn test_depth_after_sequential_pushes() {
    for n in 1..=10 {
        let messages: Vec<String> = (0..n).map(|i| format!("step {i}")).collect();
        let refs: Vec<&str> = messages.iter().map(String::as_str).collect();
        let chain = build_chain(&refs).unwrap();

        assert_eq!(chain.depth(), n);
        let positions: Vec<_> = chain.frames().map(|f| f.position()).collect();
        assert_eq!(positions, (1..=n).collect::<Vec<_>>());
    }
}

#[test]
fn test_from_str_and_string() {
    let a: ErrorChain = "plain".into();
    let b: ErrorChain = String::from("plain").into();
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn test_with_payload_builds_extended_chain() {
    let root = ErrorChain::with_payload(Payload::Absent, None);
    let chain = ErrorChain::with_payload(Payload::Unrecognized(Box::new(404u16)), Some(root));

    assert_eq!(chain.depth(), 2);
    assert_eq!(chain.head().kind(), PayloadKind::Unrecognized);
    assert_eq!(chain.root_cause().kind(), PayloadKind::Absent);
}

#[test]
fn test_into_iterator_for_reference() {
    let chain = build_chain(&["a", "b", "c"]).unwrap();
    let mut count = 0;
    for payload in &chain {
        assert_eq!(payload.kind(), PayloadKind::Message);
        count += 1;
    }
    assert_eq!(count, 3);
}
