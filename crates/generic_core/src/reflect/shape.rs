use crate::reflect::{PtrValue, SliceValue, StructValue, Value};

/// Closed shape classification; every kind predicate matches on this.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
	/// Integer scalar.
	Int(i64),
	/// String payload.
	Str(&'a str),
	/// Typed sequence.
	Slice(&'a SliceValue),
	/// Struct value.
	Struct(&'a StructValue),
	/// Pointer, nil or not.
	Pointer(&'a PtrValue),
	/// Anything else: nil, bool, float.
	Other(&'a Value),
}

impl Shape<'_> {
	/// Lowercase label used in diagnostics.
	pub fn label(&self) -> &'static str {
		match self {
			Shape::Int(_) => "int",
			Shape::Str(_) => "string",
			Shape::Slice(_) => "slice",
			Shape::Struct(_) => "struct",
			Shape::Pointer(_) => "pointer",
			Shape::Other(Value::Nil) => "nil",
			Shape::Other(value) => value.kind().label(),
		}
	}
}

/// Classify a value by its own shape, without indirection.
pub fn classify(value: &Value) -> Shape<'_> {
	match value {
		Value::Int(value) => Shape::Int(*value),
		Value::String(value) => Shape::Str(value),
		Value::Slice(slice) => Shape::Slice(slice),
		Value::Struct(item) => Shape::Struct(item),
		Value::Ptr(ptr) => Shape::Pointer(ptr),
		other => Shape::Other(other),
	}
}
