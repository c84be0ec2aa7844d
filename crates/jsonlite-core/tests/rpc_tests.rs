use jsonlite_core::{
    decode, dispatch, encode_call, CapabilitySet, JsonLiteError, Outcome, Value,
};

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

/// A capability set with one intentionally reachable method and one that
/// must stay unreachable through the prefix gate.
fn demo_caps() -> CapabilitySet {
    CapabilitySet::new()
        .register("rpc_add", |params| {
            let sum: i64 = params.iter().filter_map(Value::as_i64).sum();
            Ok(Value::Int(sum))
        })
        .register("secretReset", |_params| Ok(text("must never run")))
        .register("rpc_fail", |_params| Err("boom".to_string()))
}

// ============================================================================
// Envelope encoding
// ============================================================================

#[test]
fn encode_call_builds_method_params_mapping() {
    let out = encode_call("add", &[Value::Int(2), Value::Int(3)]);
    assert_eq!(out, "{\"method\":\"add\",\"params\":[2,3]}");
}

#[test]
fn encode_call_with_no_params() {
    assert_eq!(encode_call("ping", &[]), "{\"method\":\"ping\",\"params\":[]}");
}

#[test]
fn encode_call_escapes_method_text() {
    let out = encode_call("do,it", &[]);
    assert_eq!(out, "{\"method\":\"do\\u002cit\",\"params\":[]}");
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn dispatch_invokes_matching_capability() {
    let envelope = encode_call("add", &[Value::Int(2), Value::Int(3)]);
    let (outcome, _decoded) = dispatch(&envelope, &demo_caps(), "rpc_").unwrap();
    assert_eq!(outcome, Outcome::Called(Value::Int(5)));
}

#[test]
fn dispatch_prefix_gates_unprefixed_registrations() {
    // "secretReset" is registered, but the qualified name is
    // "rpc_secretReset" and that has no handler
    let envelope = encode_call("secretReset", &[]);
    let (outcome, _decoded) = dispatch(&envelope, &demo_caps(), "rpc_").unwrap();
    assert_eq!(outcome, Outcome::NoCall);
}

#[test]
fn dispatch_does_not_double_prefix() {
    let envelope = encode_call("rpc_add", &[Value::Int(1)]);
    let (outcome, _decoded) = dispatch(&envelope, &demo_caps(), "rpc_").unwrap();
    assert_eq!(outcome, Outcome::NoCall);
}

#[test]
fn dispatch_unknown_method_is_no_call() {
    let envelope = encode_call("missing", &[]);
    let (outcome, _decoded) = dispatch(&envelope, &demo_caps(), "rpc_").unwrap();
    assert_eq!(outcome, Outcome::NoCall);
}

#[test]
fn dispatch_with_empty_prefix_uses_names_as_is() {
    let envelope = encode_call("secretReset", &[]);
    let (outcome, _decoded) = dispatch(&envelope, &demo_caps(), "").unwrap();
    assert_eq!(outcome, Outcome::Called(text("must never run")));
}

// ============================================================================
// Envelope shape checks
// ============================================================================

#[test]
fn dispatch_requires_a_mapping() {
    let (outcome, decoded) = dispatch("[1,2,3]", &demo_caps(), "rpc_").unwrap();
    assert_eq!(outcome, Outcome::NoCall);
    assert_eq!(
        decoded,
        Value::Sequence(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
    );
}

#[test]
fn dispatch_requires_method_key() {
    let (outcome, _decoded) = dispatch("{\"params\":[]}", &demo_caps(), "rpc_").unwrap();
    assert_eq!(outcome, Outcome::NoCall);
}

#[test]
fn dispatch_requires_params_key() {
    let (outcome, _decoded) = dispatch("{\"method\":\"add\"}", &demo_caps(), "rpc_").unwrap();
    assert_eq!(outcome, Outcome::NoCall);
}

#[test]
fn dispatch_requires_params_to_be_a_sequence() {
    let (outcome, _decoded) = dispatch(
        "{\"method\":\"add\",\"params\":{\"a\":1}}",
        &demo_caps(),
        "rpc_",
    )
    .unwrap();
    assert_eq!(outcome, Outcome::NoCall);
}

#[test]
fn dispatch_always_returns_the_decoded_envelope() {
    let envelope = encode_call("add", &[Value::Int(2), Value::Int(3)]);
    let (_, decoded) = dispatch(&envelope, &demo_caps(), "rpc_").unwrap();
    assert_eq!(decoded, decode(&envelope).unwrap());

    let (_, decoded) = dispatch("{\"unrelated\":true}", &demo_caps(), "rpc_").unwrap();
    assert_eq!(
        decoded,
        Value::Mapping(vec![("unrelated".to_string(), Value::Bool(true))])
    );
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn dispatch_surfaces_handler_failure() {
    let envelope = encode_call("fail", &[]);
    match dispatch(&envelope, &demo_caps(), "rpc_") {
        Err(JsonLiteError::Call { method, message }) => {
            assert_eq!(method, "rpc_fail");
            assert_eq!(message, "boom");
        }
        other => panic!("expected Call error, got {other:?}"),
    }
}

#[test]
fn dispatch_propagates_depth_exhaustion() {
    let bomb = "[".repeat(4096);
    assert!(matches!(
        dispatch(&bomb, &demo_caps(), "rpc_"),
        Err(JsonLiteError::DepthExceeded { .. })
    ));
}

#[test]
fn capability_set_contains_registered_names() {
    let caps = demo_caps();
    assert!(caps.contains("rpc_add"));
    assert!(!caps.contains("rpc_secretReset"));
}
