//! JSON shape of outcomes (requires the `serialize` feature).

#![cfg(feature = "serialize")]

use serde_json::json;
use try_this::{attempt, failure, Outcome};

#[test]
fn success_serializes_flags_and_data() {
    let outcome = attempt(|| vec![1, 2]);
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({ "success": true, "failure": false, "data": [1, 2] })
    );
}

#[test]
fn failure_serializes_flags_and_message() {
    let outcome: Outcome<u8> = failure!("nope");
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({ "success": false, "failure": true, "error": { "message": "nope" } })
    );
}
