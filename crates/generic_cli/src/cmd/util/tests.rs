use std::collections::BTreeMap;

use generic::reflect::ReflectError;

use super::emit_json;

#[test]
fn emit_json_reports_unencodable_payloads() {
	let payload = BTreeMap::from([((1, 2), "pair key")]);
	let err = emit_json(&payload).expect_err("tuple keys are not json object keys");
	assert!(matches!(err, ReflectError::Json(_)));
}

#[test]
fn emit_json_accepts_values() {
	assert!(emit_json(&generic::reflect::Value::Int(7)).is_ok());
}
