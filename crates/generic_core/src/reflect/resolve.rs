use std::borrow::Cow;

use crate::reflect::{Shape, Type, Value, classify};

/// Return the value `value` points to, or `value` itself when it is not a pointer.
///
/// Only one level is removed: a pointer to a pointer resolves to the inner
/// pointer. A nil pointer resolves to the zero value of its pointee type.
pub fn indirect(value: &Value) -> Cow<'_, Value> {
	match classify(value) {
		Shape::Pointer(ptr) => match ptr.target() {
			Some(target) => Cow::Borrowed(target),
			None => Cow::Owned(ptr.elem.zero()),
		},
		_ => Cow::Borrowed(value),
	}
}

/// Resolve `value` the same way as [`indirect`]; a no-op on non-pointers.
pub fn value_of(value: &Value) -> Cow<'_, Value> {
	indirect(value)
}

/// Type of the resolved value, with one further pointer level stripped from the type.
pub fn type_of(value: &Value) -> Type {
	match value_of(value).ty() {
		Type::Ptr(elem) => *elem,
		other => other,
	}
}

/// Zero value for [`type_of`] of the exemplar.
pub fn zero(exemplar: &Value) -> Value {
	type_of(exemplar).zero()
}
