use crate::reflect::{Kind, Shape, Type, Value, classify, indirect};

/// Whether the resolved value is an int.
pub fn is_int(value: &Value) -> bool {
	matches!(classify(&indirect(value)), Shape::Int(_))
}

/// Whether the resolved value is a slice.
pub fn is_slice(value: &Value) -> bool {
	matches!(classify(&indirect(value)), Shape::Slice(_))
}

/// Whether the value itself is a pointer.
pub fn is_ptr(value: &Value) -> bool {
	matches!(classify(value), Shape::Pointer(_))
}

/// Alias of [`is_ptr`] routed through the type descriptor.
pub fn is_pointer(value: &Value) -> bool {
	type_is_pointer(Some(&value.ty()))
}

/// Whether the value itself is a string.
pub fn is_string(value: &Value) -> bool {
	matches!(classify(value), Shape::Str(_))
}

/// Whether the value itself is a struct; a pointer to a struct is not.
pub fn is_struct(value: &Value) -> bool {
	matches!(classify(value), Shape::Struct(_))
}

/// Whether `ty` is a struct type.
pub fn type_is_struct(ty: &Type) -> bool {
	ty.kind() == Kind::Struct
}

/// Whether `ty` is a pointer type; a missing type is not.
pub fn type_is_pointer(ty: Option<&Type>) -> bool {
	ty.is_some_and(|ty| ty.kind() == Kind::Ptr)
}

/// Whether the value is a pointer whose pointee is a struct.
pub fn is_struct_ptr(value: &Value) -> bool {
	is_ptr(value) && is_struct(&indirect(value))
}

/// Whether the resolved value is a struct.
///
/// Resolution already turns a struct pointer into a struct, so this accepts
/// both a bare struct and a pointer to one.
pub fn is_struct_or_struct_ptr(value: &Value) -> bool {
	is_struct(&indirect(value))
}

#[cfg(test)]
mod tests;
