use crate::reflect::{ReflectError, Result, Shape, Value, classify, is_struct_or_struct_ptr, value_of, zero};

/// Look up a named field on a struct or struct pointer.
///
/// Failures degrade to the zero value of the argument's type, so an absent
/// field cannot be told apart from a zero-valued one. Use [`try_field`] when
/// that distinction matters.
pub fn field(value: &Value, name: &str) -> Value {
	match try_field(value, name) {
		Ok(found) => found,
		Err(err) => {
			tracing::debug!(field = name, %err, "field lookup degraded to zero value");
			zero(value)
		}
	}
}

/// Look up a named field, reporting why a lookup failed.
pub fn try_field(value: &Value, name: &str) -> Result<Value> {
	if !is_struct_or_struct_ptr(value) {
		return Err(ReflectError::NotAStruct { got: classify(value).label() });
	}

	let resolved = value_of(value);
	let Shape::Struct(item) = classify(&resolved) else {
		return Err(ReflectError::NotAStruct { got: classify(&resolved).label() });
	};

	item.field(name).cloned().ok_or_else(|| ReflectError::UnknownField {
		struct_name: item.type_name.to_string(),
		field: name.to_owned(),
	})
}
