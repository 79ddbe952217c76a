mod convert;
mod error;
mod field;
mod json;
mod predicate;
mod resolve;
mod shape;
mod slice;
mod ty;
mod value;
mod verify;

/// Native Rust to runtime value conversion.
pub use convert::Reflect;
/// Error and result aliases.
pub use error::{ReflectError, Result};
/// Struct field lookup with silent and explicit failure modes.
pub use field::{field, try_field};
/// JSON document bridge and options.
pub use json::{DEFAULT_PTR_KEY, DEFAULT_TYPE_KEY, JsonOptions, from_json_slice};
/// Kind predicates over values and types.
pub use predicate::{is_int, is_pointer, is_ptr, is_slice, is_string, is_struct, is_struct_or_struct_ptr, is_struct_ptr, type_is_pointer, type_is_struct};
/// Single-level indirection helpers.
pub use resolve::{indirect, type_of, value_of, zero};
/// Closed shape classification.
pub use shape::{Shape, classify};
/// Slice construction, append, and iteration.
pub use slice::{append, foreach, make_slice};
/// Runtime type descriptors.
pub use ty::{FieldType, Kind, StructType, Type};
/// Runtime value types.
pub use value::{FieldValue, PtrValue, SliceValue, StructValue, Value};
/// Precondition guards and their options.
pub use verify::{Guard, VerifyMode, VerifyOptions, verify_int, verify_slice, verify_string};
