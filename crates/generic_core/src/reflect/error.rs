use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ReflectError>;

/// Errors produced while inspecting, converting, and combining runtime values.
#[derive(Debug, Error)]
pub enum ReflectError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input was not a well-formed JSON document.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Argument is neither a struct nor a pointer to one.
	#[error("argument does not reference a struct (got {got})")]
	NotAStruct {
		/// Shape label of the offending argument.
		got: &'static str,
	},
	/// Struct exists but has no field with the requested name.
	#[error("struct {struct_name} has no field named {field}")]
	UnknownField {
		/// Struct type name.
		struct_name: String,
		/// Requested field name.
		field: String,
	},
	/// Append destination does not resolve to a slice.
	#[error("append destination is not a slice (got {got})")]
	NotASlice {
		/// Shape label of the destination.
		got: &'static str,
	},
	/// Appended element type cannot be stored in the destination slice.
	#[error("type {got} is not assignable to {expected}")]
	NotAssignable {
		/// Destination element type.
		expected: String,
		/// Offered element type.
		got: String,
	},
	/// A precondition guard rejected its argument.
	#[error("{expected} parameter required, not {value} ({got})")]
	VerifyFailed {
		/// Shape the guard asked for.
		expected: &'static str,
		/// Shape label of the argument.
		got: &'static str,
		/// Rendered argument.
		value: String,
	},
	/// JSON nesting exceeded the configured conversion depth.
	#[error("json depth exceeded (max={max_depth})")]
	JsonDepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// JSON number could not be represented as int or float.
	#[error("json number out of range: {number}")]
	JsonNumberOutOfRange {
		/// Source number text.
		number: String,
	},
	/// Struct type-name key did not hold a string.
	#[error("json type name under {key:?} must be a string")]
	JsonBadTypeName {
		/// Configured type-name key.
		key: String,
	},
}
