//! Property-based tests for the hook-event core
//!
//! These tests verify correctness properties of name parsing, argument
//! binding, and promise dispatch:
//! - Name parsing round-trips and rejects malformed names
//! - Wildcard derivation follows the action-presence law
//! - Binding renames the receiver slot and pads missing positions
//! - Promise chains fire at most one callback per event

use std::cell::Cell;

use leafcms_hooks::{HookArguments, HookEvent, HookName, Signature};
use proptest::prelude::*;
use serde_json::json;

// Strategy for name segments (type, action, state): no grammar separators
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,12}"
}

// Strategy for parameter names that never collide with the receiver marker
fn param_name_strategy() -> impl Strategy<Value = String> {
    "[a-su-z][a-z0-9_]{0,12}"
}

/// For any well-formed name `t.a:s`, parsing yields the three parts and
/// reassembling them yields the original name.
#[test]
fn prop_parse_round_trips_full_names() {
    proptest!(|(
        kind in segment_strategy(),
        action in segment_strategy(),
        state in segment_strategy(),
    )| {
        let raw = format!("{}.{}:{}", kind, action, state);
        let name = HookName::parse(&raw).unwrap();

        prop_assert_eq!(name.kind(), kind.as_str());
        prop_assert_eq!(name.action(), Some(action.as_str()));
        prop_assert_eq!(name.state(), state.as_str());
        prop_assert_eq!(
            format!("{}.{}:{}", name.kind(), name.action().unwrap(), name.state()),
            raw
        );
    });
}

/// For any well-formed name `t:s`, parsing yields no action.
#[test]
fn prop_parse_round_trips_actionless_names() {
    proptest!(|(kind in segment_strategy(), state in segment_strategy())| {
        let raw = format!("{}:{}", kind, state);
        let name = HookName::parse(&raw).unwrap();

        prop_assert_eq!(name.kind(), kind.as_str());
        prop_assert_eq!(name.action(), None);
        prop_assert_eq!(name.state(), state.as_str());
    });
}

/// Any name without a `:` separator is rejected.
#[test]
fn prop_parse_rejects_names_without_separator() {
    proptest!(|(raw in "[a-z0-9_.\\-]{1,30}")| {
        prop_assert!(HookName::parse(&raw).is_err());
    });
}

/// The wildcard exists exactly when the action does, and drops only the action.
#[test]
fn prop_wildcard_follows_action_presence() {
    proptest!(|(
        kind in segment_strategy(),
        action in segment_strategy(),
        state in segment_strategy(),
    )| {
        let with_action = HookName::parse(&format!("{}.{}:{}", kind, action, state)).unwrap();
        let without_action = HookName::parse(&format!("{}:{}", kind, state)).unwrap();

        prop_assert_eq!(with_action.wildcard(), Some(format!("{}:{}", kind, state)));
        prop_assert_eq!(without_action.wildcard(), None);
    });
}

/// The receiver slot is renamed to the receiver kind, never duplicated.
#[test]
fn prop_bind_renames_receiver_slot() {
    proptest!(|(kind in segment_strategy(), param in param_name_strategy())| {
        prop_assume!(param != kind && kind != "this");

        let signature = Signature::new(["this".to_string(), param.clone()]);
        let args = signature.bind(&[json!("receiver"), json!("value")], &kind);

        prop_assert_eq!(args.get(&kind), Some(&json!("receiver")));
        prop_assert_eq!(args.get(&param), Some(&json!("value")));
        prop_assert_eq!(args.get("this"), None);
        prop_assert_eq!(args.len(), 2);
    });
}

/// Binding is total: positions past the supplied arguments bind to null and
/// the ordered-values view keeps signature order and length.
#[test]
fn prop_bind_pads_missing_positions() {
    proptest!(|(param_count in 1usize..8, supplied in 0usize..8)| {
        let params: Vec<String> = (0..param_count).map(|i| format!("p{}", i)).collect();
        let positional: Vec<_> = (0..supplied).map(|i| json!(i)).collect();

        let signature = Signature::new(params);
        let args = signature.bind(&positional, "page");

        prop_assert_eq!(args.len(), param_count);
        for (position, value) in args.values().iter().enumerate() {
            if position < supplied {
                prop_assert_eq!(value, &json!(position));
            } else {
                prop_assert_eq!(value, &json!(null));
            }
        }
    });
}

/// Argument lookup is case-insensitive over any stored key.
#[test]
fn prop_argument_lookup_ignores_case() {
    proptest!(|(key in param_name_strategy())| {
        let mut args = HookArguments::new();
        args.insert(key.clone(), json!("v"));

        prop_assert_eq!(args.get(&key.to_uppercase()), Some(&json!("v")));
        prop_assert_eq!(args.get(&key), Some(&json!("v")));
    });
}

/// A promise chain over two distinct actions fires exactly the matching one.
#[test]
fn prop_promise_chain_fires_at_most_one() {
    proptest!(|(
        kind in segment_strategy(),
        action in segment_strategy(),
        other in segment_strategy(),
        state in segment_strategy(),
    )| {
        prop_assume!(action != other);

        let raw = format!("{}.{}:{}", kind, action, state);
        let event = HookEvent::from_arguments(&raw, HookArguments::new()).unwrap();

        let matched = Cell::new(0);
        let unmatched = Cell::new(0);

        event
            .promise(&action, |_| matched.set(matched.get() + 1))
            .promise(&other, |_| unmatched.set(unmatched.get() + 1));

        prop_assert_eq!(matched.get(), 1);
        prop_assert_eq!(unmatched.get(), 0);
    });
}
