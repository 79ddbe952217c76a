use crate::reflect::{FieldValue, ReflectError, SliceValue, StructValue, Type, Value, append, foreach, make_slice};

fn ints(items: &[i64]) -> Value {
	Value::Slice(SliceValue::new(Type::Int, items.iter().copied().map(Value::Int).collect()))
}

#[test]
fn make_slice_from_scalar_uses_scalar_type() {
	let made = make_slice(&Value::Int(5));
	let slice = made.as_slice().expect("slice");
	assert_eq!(slice.len(), 0);
	assert_eq!(slice.elem, Type::Int);
}

#[test]
fn make_slice_from_slice_reuses_element_type() {
	let made = make_slice(&ints(&[1, 2]));
	assert_eq!(made.ty(), Type::slice_of(Type::Int));
	assert!(made.as_slice().is_some_and(SliceValue::is_empty));
}

#[test]
fn make_slice_looks_through_pointer_exemplar() {
	let made = make_slice(&Value::ptr_to(Value::string("x")));
	assert_eq!(made.ty(), Type::slice_of(Type::String));
}

#[test]
fn append_single_element() {
	let out = append(&make_slice(&Value::Int(0)), &Value::Int(5)).expect("append works");
	assert_eq!(out, ints(&[5]));
}

#[test]
fn append_slice_elements() {
	let out = append(&ints(&[1, 2]), &ints(&[3, 4])).expect("append works");
	assert_eq!(out, ints(&[1, 2, 3, 4]));
}

#[test]
fn append_leaves_inputs_untouched_and_repeats_equal() {
	let ret = ints(&[1, 2]);
	let k = ints(&[3, 4]);

	let first = append(&ret, &k).expect("first append");
	let second = append(&ret, &k).expect("second append");

	assert_eq!(first, second);
	assert_eq!(ret, ints(&[1, 2]));
	assert_eq!(k, ints(&[3, 4]));
}

#[test]
fn append_dereferences_pointer_arguments() {
	let out = append(&Value::ptr_to(ints(&[1])), &Value::ptr_to(Value::Int(2))).expect("append works");
	assert_eq!(out, ints(&[1, 2]));
}

#[test]
fn append_to_any_slice_accepts_mixed_elements() {
	let ret = Value::Slice(SliceValue::empty(Type::Any));
	let out = append(&ret, &Value::Int(1)).and_then(|out| append(&out, &Value::string("two"))).expect("any accepts all");
	assert_eq!(out.as_slice().map(SliceValue::len), Some(2));
}

#[test]
fn append_rejects_mismatched_element_type() {
	let err = append(&ints(&[1]), &Value::string("x")).expect_err("string into []int");
	assert!(matches!(err, ReflectError::NotAssignable { ref expected, ref got } if expected == "int" && got == "string"));
}

#[test]
fn append_rejects_non_slice_destination() {
	let err = append(&Value::Int(1), &Value::Int(2)).expect_err("int is not a slice");
	assert!(matches!(err, ReflectError::NotASlice { got: "int" }));
}

#[test]
fn foreach_stops_when_callback_returns_false() {
	let mut seen = Vec::new();
	foreach(&ints(&[10, 20, 30]), |idx, item| {
		seen.push((idx, item.as_int()));
		seen.len() < 2
	});
	assert_eq!(seen, vec![(0, Some(10)), (1, Some(20))]);
}

#[test]
fn foreach_visits_every_element_in_order() {
	let mut seen = Vec::new();
	foreach(&Value::ptr_to(ints(&[3, 2, 1])), |idx, item| {
		seen.push((idx, item.as_int()));
		true
	});
	assert_eq!(seen, vec![(0, Some(3)), (1, Some(2)), (2, Some(1))]);
}

#[test]
fn foreach_ignores_non_slices() {
	let mut calls = 0;
	let point = Value::Struct(StructValue::new("P", vec![FieldValue::new("X", Value::Int(1))]));
	for value in [Value::Int(42), Value::Nil, point] {
		foreach(&value, |_, _| {
			calls += 1;
			true
		});
	}
	assert_eq!(calls, 0);
}

fn holder(payload: Value) -> Value {
	Value::Struct(StructValue::new("Holder", vec![FieldValue::new("Payload", payload)]))
}

#[test]
fn append_struct_into_slice_with_any_field() {
	let layout = crate::reflect::StructType::new("Holder", vec![crate::reflect::FieldType::new("Payload", Type::Any)]);
	let ret = Value::Slice(SliceValue::empty(Type::Struct(layout)));

	let out = append(&ret, &holder(Value::Int(1))).and_then(|out| append(&out, &holder(Value::string("x")))).expect("any field accepts all");
	assert_eq!(out.as_slice().map(SliceValue::len), Some(2));
	assert_eq!(out.ty(), ret.ty());
}

#[test]
fn append_struct_mismatch_names_both_layouts() {
	let ret = make_slice(&holder(Value::Int(1)));
	let err = append(&ret, &holder(Value::string("x"))).expect_err("string payload into int payload");
	assert!(
		matches!(err, ReflectError::NotAssignable { ref expected, ref got } if expected == "Holder{Payload int}" && got == "Holder{Payload string}"),
		"unexpected error: {err}"
	);
}
