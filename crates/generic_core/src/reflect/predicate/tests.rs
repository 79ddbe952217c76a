use crate::reflect::{
	FieldValue, SliceValue, StructValue, Type, Value, is_int, is_pointer, is_ptr, is_slice, is_string, is_struct, is_struct_or_struct_ptr, is_struct_ptr,
	type_is_pointer, type_is_struct,
};

fn point() -> Value {
	Value::Struct(StructValue::new("Point", vec![FieldValue::new("X", Value::Int(1))]))
}

#[test]
fn ints_are_only_ints() {
	for x in [i64::MIN, -1, 0, 1, 42, i64::MAX] {
		let value = Value::Int(x);
		assert!(is_int(&value));
		assert!(!is_string(&value));
		assert!(!is_slice(&value));
	}
}

#[test]
fn int_and_slice_checks_look_through_one_pointer() {
	assert!(is_int(&Value::ptr_to(Value::Int(1))));
	assert!(is_slice(&Value::ptr_to(Value::Slice(SliceValue::empty(Type::Int)))));
	assert!(!is_int(&Value::ptr_to(Value::ptr_to(Value::Int(1)))));
}

#[test]
fn string_and_ptr_checks_do_not_dereference() {
	let ptr = Value::ptr_to(Value::string("s"));
	assert!(!is_string(&ptr));
	assert!(is_string(&Value::string("s")));
	assert!(is_ptr(&ptr));
	assert!(is_pointer(&ptr));
	assert!(!is_ptr(&Value::Int(1)));
}

#[test]
fn struct_and_struct_pointer_are_distinguished() {
	let value = point();
	let ptr = Value::ptr_to(value.clone());

	assert!(is_struct(&value));
	assert!(!is_struct(&ptr));
	assert!(is_struct_ptr(&ptr));
	assert!(!is_struct_ptr(&value));
	assert!(is_struct_or_struct_ptr(&ptr));
	assert!(is_struct_or_struct_ptr(&value));
	assert!(!is_struct_or_struct_ptr(&Value::Int(1)));
}

#[test]
fn nil_struct_pointer_still_counts_as_struct_pointer() {
	let layout = point().ty();
	assert!(is_struct_ptr(&Value::nil_ptr(layout)));
}

#[test]
fn untyped_nil_matches_nothing() {
	let nil = Value::Nil;
	assert!(!is_int(&nil));
	assert!(!is_string(&nil));
	assert!(!is_slice(&nil));
	assert!(!is_ptr(&nil));
	assert!(!is_struct_or_struct_ptr(&nil));
}

#[test]
fn type_helpers_inspect_kind() {
	assert!(type_is_struct(&point().ty()));
	assert!(!type_is_struct(&Type::Int));
	assert!(type_is_pointer(Some(&Type::ptr_to(Type::Int))));
	assert!(!type_is_pointer(Some(&Type::Any)));
	assert!(!type_is_pointer(None));
	assert!(type_is_pointer(Type::slice_of(Type::ptr_to(Type::Int)).elem()));
	assert!(!type_is_pointer(Type::Int.elem()));
}
