use std::fmt;

use crate::reflect::{FieldValue, PtrValue, SliceValue, StructValue, Value};

/// Coarse shape of a runtime type, used for branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Boolean scalar.
	Bool,
	/// Signed integer scalar.
	Int,
	/// Floating-point scalar.
	Float,
	/// UTF-8 string.
	String,
	/// Ordered sequence with a fixed element type.
	Slice,
	/// Named record with ordered fields.
	Struct,
	/// Single-level reference to another value.
	Ptr,
	/// Dynamic type that admits any value.
	Any,
}

impl Kind {
	/// Lowercase label used in diagnostics and CLI output.
	pub fn label(self) -> &'static str {
		match self {
			Kind::Bool => "bool",
			Kind::Int => "int",
			Kind::Float => "float",
			Kind::String => "string",
			Kind::Slice => "slice",
			Kind::Struct => "struct",
			Kind::Ptr => "ptr",
			Kind::Any => "any",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Runtime type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
	/// Boolean scalar.
	Bool,
	/// Signed 64-bit integer.
	Int,
	/// 64-bit float.
	Float,
	/// UTF-8 string.
	String,
	/// Slice with the boxed element type.
	Slice(Box<Type>),
	/// Struct layout.
	Struct(StructType),
	/// Pointer to the boxed element type.
	Ptr(Box<Type>),
	/// Dynamic type; the element type of heterogeneous slices.
	Any,
}

/// Struct layout with field names in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructType {
	/// Struct type name.
	pub name: Box<str>,
	/// Field layout in declaration order.
	pub fields: Vec<FieldType>,
}

/// Named field inside a struct layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldType {
	/// Field identifier.
	pub name: Box<str>,
	/// Field type.
	pub ty: Type,
}

impl Type {
	/// Return the coarse kind of this type.
	pub fn kind(&self) -> Kind {
		match self {
			Type::Bool => Kind::Bool,
			Type::Int => Kind::Int,
			Type::Float => Kind::Float,
			Type::String => Kind::String,
			Type::Slice(_) => Kind::Slice,
			Type::Struct(_) => Kind::Struct,
			Type::Ptr(_) => Kind::Ptr,
			Type::Any => Kind::Any,
		}
	}

	/// Build `[]elem`.
	pub fn slice_of(elem: Type) -> Self {
		Type::Slice(Box::new(elem))
	}

	/// Build `*elem`.
	pub fn ptr_to(elem: Type) -> Self {
		Type::Ptr(Box::new(elem))
	}

	/// Element type of a slice or pointer type.
	pub fn elem(&self) -> Option<&Type> {
		match self {
			Type::Slice(elem) | Type::Ptr(elem) => Some(elem.as_ref()),
			_ => None,
		}
	}

	/// Whether a value of this type may be stored where `target` is expected.
	///
	/// `any` accepts everything, also as a slice, pointer, or field element.
	/// Structs match by name and field names; field types are checked with the
	/// same rule.
	pub fn assignable_to(&self, target: &Type) -> bool {
		match (self, target) {
			(_, Type::Any) => true,
			(Type::Slice(elem), Type::Slice(target_elem)) | (Type::Ptr(elem), Type::Ptr(target_elem)) => elem.assignable_to(target_elem),
			(Type::Struct(layout), Type::Struct(target_layout)) => layout.assignable_to(target_layout),
			_ => self == target,
		}
	}

	/// Narrowest type both `self` and `other` are assignable to.
	///
	/// Same-named structs with the same field names merge field by field.
	/// Anything else that differs widens to `any`.
	pub fn unify(&self, other: &Type) -> Type {
		match (self, other) {
			_ if self == other => self.clone(),
			(Type::Slice(elem), Type::Slice(other_elem)) => Type::slice_of(elem.unify(other_elem)),
			(Type::Ptr(elem), Type::Ptr(other_elem)) => Type::ptr_to(elem.unify(other_elem)),
			(Type::Struct(layout), Type::Struct(other_layout)) if layout.same_fields(other_layout) => Type::Struct(StructType {
				name: layout.name.clone(),
				fields: layout
					.fields
					.iter()
					.zip(&other_layout.fields)
					.map(|(field, other_field)| FieldType::new(field.name.clone(), field.ty.unify(&other_field.ty)))
					.collect(),
			}),
			_ => Type::Any,
		}
	}

	/// Produce the zero value of this type.
	pub fn zero(&self) -> Value {
		match self {
			Type::Bool => Value::Bool(false),
			Type::Int => Value::Int(0),
			Type::Float => Value::Float(0.0),
			Type::String => Value::String("".into()),
			Type::Slice(elem) => Value::Slice(SliceValue::empty((**elem).clone())),
			Type::Struct(layout) => Value::Struct(StructValue {
				type_name: layout.name.clone(),
				fields: layout
					.fields
					.iter()
					.map(|field| FieldValue {
						name: field.name.clone(),
						value: field.ty.zero(),
					})
					.collect(),
			}),
			Type::Ptr(elem) => Value::Ptr(PtrValue {
				elem: (**elem).clone(),
				target: None,
			}),
			Type::Any => Value::Nil,
		}
	}
}

impl fmt::Display for Type {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Type::Bool => f.write_str("bool"),
			Type::Int => f.write_str("int"),
			Type::Float => f.write_str("float"),
			Type::String => f.write_str("string"),
			Type::Slice(elem) if f.alternate() => write!(f, "[]{elem:#}"),
			Type::Slice(elem) => write!(f, "[]{elem}"),
			Type::Struct(layout) if f.alternate() => {
				write!(f, "{}{{", layout.name)?;
				for (idx, field) in layout.fields.iter().enumerate() {
					if idx > 0 {
						f.write_str("; ")?;
					}
					write!(f, "{} {:#}", field.name, field.ty)?;
				}
				f.write_str("}")
			}
			Type::Struct(layout) => f.write_str(&layout.name),
			Type::Ptr(elem) if f.alternate() => write!(f, "*{elem:#}"),
			Type::Ptr(elem) => write!(f, "*{elem}"),
			Type::Any => f.write_str("any"),
		}
	}
}

impl StructType {
	/// Build a struct layout.
	pub fn new(name: impl Into<Box<str>>, fields: Vec<FieldType>) -> Self {
		Self { name: name.into(), fields }
	}

	/// Find a field layout by exact, case-sensitive name.
	pub fn field(&self, name: &str) -> Option<&FieldType> {
		self.fields.iter().find(|field| &*field.name == name)
	}

	/// Same name and the same field names in the same order.
	pub fn same_fields(&self, other: &StructType) -> bool {
		self.name == other.name
			&& self.fields.len() == other.fields.len()
			&& self.fields.iter().zip(&other.fields).all(|(field, other_field)| field.name == other_field.name)
	}

	/// Whether a struct of this layout may be stored where `target` is expected.
	pub fn assignable_to(&self, target: &StructType) -> bool {
		self.same_fields(target)
			&& self
				.fields
				.iter()
				.zip(&target.fields)
				.all(|(field, target_field)| field.ty.assignable_to(&target_field.ty))
	}
}

impl FieldType {
	/// Build a named field layout.
	pub fn new(name: impl Into<Box<str>>, ty: Type) -> Self {
		Self { name: name.into(), ty }
	}
}
